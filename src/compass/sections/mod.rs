//! Section Parsers
//!
//! Each module parses one numbered section of a locale file. Parsers never
//! stop at the first problem: they fill in what they can and push every
//! problem into the shared `ErrorLog`.

pub mod s1_intro;
pub mod s2_values;
pub mod s3_start_screen;
pub mod s4_questions;
pub mod s5_scoring_map;
pub mod s6_conflict_pairs;
pub mod s7_profiles;
pub mod s8_conflict_library;
pub mod s9_result_templates;
pub mod s10_paywall;

pub use s3_start_screen::StartScreen;
pub use s9_result_templates::ResultTemplates;

/// Number of sections every locale file must contain.
pub const SECTION_COUNT: u32 = 10;
