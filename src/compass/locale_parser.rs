//! Locale Parser
//!
//! Runs the splitter and all ten section parsers over one locale file.
//!
//! Public API:
//! - parse_locale_source(text, label, errors) -> LocaleDocument
//! - parse_locale_file(path, locale, errors) -> LocaleDocument

use std::fs;
use std::path::Path;

use crate::compass::sections::{
    s10_paywall, s1_intro, s2_values, s3_start_screen, s4_questions, s5_scoring_map,
    s6_conflict_pairs, s7_profiles, s8_conflict_library, s9_result_templates, SECTION_COUNT,
};
use crate::compass::splitter::split_sections;
use crate::compass::types::{Locale, LocaleDocument};
use crate::error::ErrorLog;

/// Error prefix for a locale file, e.g. `es (content/es.md)`.
pub fn locale_label(locale: Locale, path: &Path) -> String {
    format!("{} ({})", locale, path.display())
}

/// Parse one locale's markdown text.
pub fn parse_locale_source(text: &str, label: &str, errors: &mut ErrorLog) -> LocaleDocument {
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    let sections = split_sections(&lines, errors, label);

    let empty: Vec<String> = Vec::new();
    let section = |number: u32| sections.get(&number).unwrap_or(&empty).as_slice();

    for number in 1..=SECTION_COUNT {
        if section(number).is_empty() {
            errors.push(format!("{} missing section {}", label, number));
        }
    }

    let mut doc = LocaleDocument::default();

    doc.intro = s1_intro::parse(section(1), errors, label);
    doc.values = s2_values::parse(section(2), errors, label);

    let start = s3_start_screen::parse(section(3), errors, label);
    doc.title = start.title;
    doc.short_description = start.short_description;
    doc.instructions = start.instructions;
    doc.scale_labels = start.scale_labels;

    doc.questions = s4_questions::parse(section(4), errors, label);
    s5_scoring_map::parse(section(5), errors, label);
    doc.conflict_pairs = s6_conflict_pairs::parse(section(6), errors, label);
    doc.profiles = s7_profiles::parse(section(7), errors, label);
    doc.conflict_library = s8_conflict_library::parse(section(8), errors, label);

    let templates = s9_result_templates::parse(section(9), errors, label);
    doc.preview_template = templates.preview_template;
    doc.paywall_hook = templates.paywall_hook;
    doc.paid_report_title = templates.paid_report_title;
    doc.paid_report_sections = templates.paid_report_sections;

    doc.paywall_copy = s10_paywall::parse(section(10), errors, label);

    tracing::debug!(
        "{}: {} questions, {} values, {} conflict pairs",
        label,
        doc.questions.len(),
        doc.values.len(),
        doc.conflict_pairs.len()
    );
    doc
}

/// Read and parse one locale file. A missing or unreadable file is logged and
/// yields an empty document.
pub fn parse_locale_file(path: &Path, locale: Locale, errors: &mut ErrorLog) -> LocaleDocument {
    let label = locale_label(locale, path);
    if !path.exists() {
        errors.push(format!("{} source file not found", label));
        return LocaleDocument::default();
    }
    match fs::read_to_string(path) {
        Ok(text) => parse_locale_source(&text, &label, errors),
        Err(err) => {
            errors.push(format!("{} cannot be read: {}", label, err));
            LocaleDocument::default()
        }
    }
}
