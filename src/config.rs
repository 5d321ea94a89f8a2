//! Conversion configuration.
//!
//! `SpecMeta` carries the catalog identity of the test being built; the
//! `ConvertConfig` adds the three locale sources and the output path.

use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::compass::types::Localized;
use crate::error::ErrorLog;

pub static TEST_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^test-[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

pub static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

/// Catalog identity of one test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecMeta {
    pub test_id: String,
    pub slug: String,
    pub category: String,
    pub version: i64,
}

impl SpecMeta {
    /// Build with surrounding whitespace trimmed from every string field.
    pub fn new(test_id: &str, slug: &str, category: &str, version: i64) -> Self {
        Self {
            test_id: test_id.trim().to_string(),
            slug: slug.trim().to_string(),
            category: category.trim().to_string(),
            version,
        }
    }

    /// Log every metadata problem.
    pub fn validate(&self, errors: &mut ErrorLog) {
        if !TEST_ID_PATTERN.is_match(&self.test_id) {
            errors.push("test_id must match test-<slug>");
        }
        if !SLUG_PATTERN.is_match(&self.slug) {
            errors.push("slug must be url-safe");
        }
        if self.test_id != format!("test-{}", self.slug) {
            errors.push("test_id must align with slug");
        }
        if self.category.is_empty() {
            errors.push("category must be a non-empty string");
        }
        if self.version < 1 {
            errors.push("version must be >= 1");
        }
    }

    /// Version as emitted in the JSON. Callers validate first; anything
    /// below 1 is clamped.
    pub fn spec_version(&self) -> u32 {
        u32::try_from(self.version.max(1)).unwrap_or(u32::MAX)
    }
}

/// Everything one conversion run needs.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub meta: SpecMeta,
    pub sources: Localized<PathBuf>,
    pub output: PathBuf,
}
