//! Values Compass Converter Module
//!
//! Turns the three locale markdown sources of the Values Compass test into a
//! single `values_compass_v1` spec.
//!
//! ## Sections
//! 1. Intro - opening paragraph
//! 2. Values - ten value ids with display name and definition
//! 3. Start screen - title, short promise, instructions, scale labels
//! 4. Questions - thirty numbered prompts
//! 5. Scoring map - value to question numbers (checked, not emitted)
//! 6. Conflict pairs - ordered value pairs
//! 7. Profiles - free preview and paid bullets per value
//! 8. Conflict library - level, summary and playbook per pair
//! 9. Result templates - preview template, paywall hook, paid report outline
//! 10. Paywall - CTA, bullets, short line

pub mod utils;
pub mod types;
pub mod splitter;
pub mod sections;
pub mod locale_parser;
pub mod aggregator;
pub mod spec_types;
pub mod generator;

pub use aggregator::parse_locales;
pub use generator::SpecBuilder;
pub use locale_parser::{parse_locale_file, parse_locale_source};
pub use spec_types::Spec;
pub use types::{Locale, LocaleDocument, Localized};
