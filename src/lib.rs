//! Values Compass Spec Converter
//!
//! Converts the Values Compass test content (three locale markdown files:
//! en, es, pt-BR) into one `values_compass_v1` JSON spec.
//!
//! Module layout:
//! - `compass/`: markdown splitting, section parsers, cross-locale checks, spec builder
//! - `config`: test identity and conversion inputs
//! - `validate`: structural validator for the emitted JSON
//! - `convert`: the end-to-end pipeline and spec writer
//!
//! Content errors are collected, never raised one by one: a failed run lists
//! every problem across all three locales and writes nothing.

pub mod error;
pub mod config;
pub mod compass;
pub mod validate;
pub mod convert;

// Re-export commonly used types
pub use compass::{Locale, Localized, Spec, SpecBuilder};
pub use config::{ConvertConfig, SpecMeta};
pub use convert::{convert, render_spec, write_spec};
pub use error::{ConvertError, ErrorLog};
pub use validate::{validate_spec, SpecInfo};
