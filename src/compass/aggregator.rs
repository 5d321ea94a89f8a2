//! Locale Aggregator
//!
//! Parses all three locale files, then checks the facts that must agree across
//! them. Nothing here stops early: every locale is parsed even when an earlier
//! one failed, so a single run reports everything.

use std::path::PathBuf;

use crate::compass::locale_parser::parse_locale_file;
use crate::compass::types::{Locale, LocaleDocument, Localized};
use crate::compass::utils::lookup_tables::{pair_id, ValueId, QUESTION_COUNT};
use crate::error::ErrorLog;

/// Parse every locale file in locale order.
pub fn parse_locales(sources: &Localized<PathBuf>, errors: &mut ErrorLog) -> Localized<LocaleDocument> {
    let docs = Localized::from_fn(|locale| {
        let before = errors.len();
        let doc = parse_locale_file(sources.get(locale), locale, errors);
        tracing::info!(
            "Parsed {} locale from {} ({} errors)",
            locale,
            sources.get(locale).display(),
            errors.len() - before
        );
        doc
    });
    validate_locale_data(&docs, errors);
    check_conflict_library(&docs, errors);
    check_conflict_pairs(&docs, errors);
    docs
}

/// Second pass over each parsed document: required copy is present and the
/// counts are right, whatever the section parsers reported.
pub fn validate_locale_data(docs: &Localized<LocaleDocument>, errors: &mut ErrorLog) {
    for (locale, doc) in docs.iter() {
        let required = [
            (doc.title.as_str(), "title"),
            (doc.short_description.as_str(), "short description"),
            (doc.intro.as_str(), "intro"),
            (doc.instructions.as_str(), "instructions"),
            (doc.paywall_copy.cta.as_str(), "paywall CTA"),
            (doc.paid_report_title.as_str(), "paid report title"),
        ];
        for (value, name) in required {
            if value.is_empty() {
                errors.push(format!("{} missing {}", locale, name));
            }
        }

        if doc.questions.len() != QUESTION_COUNT as usize {
            errors.push(format!("{} missing questions", locale));
        }
        if doc.values.len() != ValueId::ALL.len() {
            errors.push(format!("{} missing values", locale));
        }
        if doc.profiles.len() != ValueId::ALL.len() {
            errors.push(format!("{} missing profiles", locale));
        }
        if doc.conflict_pairs.is_empty() {
            errors.push(format!("{} missing conflict pairs", locale));
        }
    }
}

/// Each locale's library must hold an entry for every pair that locale lists.
pub fn check_conflict_library(docs: &Localized<LocaleDocument>, errors: &mut ErrorLog) {
    for (locale, doc) in docs.iter() {
        for &(a, b) in &doc.conflict_pairs {
            let key = pair_id(a, b);
            if !doc.conflict_library.contains_key(&key) {
                errors.push(format!("{} conflict library missing {}", locale, key));
            }
        }
    }
}

/// Every locale must list the same conflict pairs as `en`, in the same order.
pub fn check_conflict_pairs(docs: &Localized<LocaleDocument>, errors: &mut ErrorLog) {
    let base = &docs.en.conflict_pairs;
    for (locale, doc) in docs.iter() {
        if locale == Locale::En {
            continue;
        }
        if &doc.conflict_pairs != base {
            errors.push(format!("{} conflict pairs do not match", locale));
        }
    }
}
