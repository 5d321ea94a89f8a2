//! Shared data types for Values Compass conversion.
//!
//! - `Locale` / `Localized<T>`: the three supported locales and per-locale values
//! - `LocaleDocument`: everything parsed out of one locale's markdown file

use serde::Serialize;
use std::collections::BTreeMap;

use crate::compass::utils::lookup_tables::ValueId;

/// Supported content locales, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    En,
    Es,
    PtBr,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Es, Locale::PtBr];

    /// BCP 47 tag used as the output key (`pt-BR`, not `pt-br`).
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::PtBr => "pt-BR",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Map a loosely written tag (`" PT-br "`) to its canonical locale.
pub fn normalize_locale_tag(value: &str) -> Option<Locale> {
    match value.trim().to_lowercase().as_str() {
        "en" => Some(Locale::En),
        "es" => Some(Locale::Es),
        "pt-br" => Some(Locale::PtBr),
        _ => None,
    }
}

/// One value per locale. Serializes as `{"en": .., "es": .., "pt-BR": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Localized<T> {
    pub en: T,
    pub es: T,
    #[serde(rename = "pt-BR")]
    pub pt_br: T,
}

impl<T> Localized<T> {
    pub fn from_fn(mut f: impl FnMut(Locale) -> T) -> Self {
        Self {
            en: f(Locale::En),
            es: f(Locale::Es),
            pt_br: f(Locale::PtBr),
        }
    }

    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::En => &self.en,
            Locale::Es => &self.es,
            Locale::PtBr => &self.pt_br,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(Locale, &T) -> U) -> Localized<U> {
        Localized::from_fn(|locale| f(locale, self.get(locale)))
    }

    /// `(locale, value)` pairs in locale order.
    pub fn iter(&self) -> impl Iterator<Item = (Locale, &T)> {
        Locale::ALL.into_iter().map(move |locale| (locale, self.get(locale)))
    }
}

/// Display name and definition from section 2.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueDefinition {
    pub name: String,
    pub definition: String,
}

/// Free preview text and paid bullets from section 7.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileCopy {
    pub preview: String,
    pub paid: Vec<String>,
}

/// One conflict library entry from section 8.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConflictEntry {
    pub level: String,
    pub summary: String,
    pub playbook: Vec<String>,
}

/// Section 10 copy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PaywallCopy {
    pub cta: String,
    pub bullets: Vec<String>,
    pub short_line: String,
}

/// An ordered conflict pair `(a, b)`.
pub type ConflictPair = (ValueId, ValueId);

/// Everything parsed out of one locale file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocaleDocument {
    pub title: String,
    pub short_description: String,
    pub intro: String,
    pub instructions: String,
    /// Rank (1..=5) -> label.
    pub scale_labels: BTreeMap<u32, String>,
    /// Question number (1..=30) -> prompt.
    pub questions: BTreeMap<u32, String>,
    pub values: BTreeMap<ValueId, ValueDefinition>,
    pub profiles: BTreeMap<ValueId, ProfileCopy>,
    pub conflict_pairs: Vec<ConflictPair>,
    /// Keyed by `"{a}_vs_{b}"`.
    pub conflict_library: BTreeMap<String, ConflictEntry>,
    pub preview_template: String,
    pub paywall_hook: String,
    pub paid_report_title: String,
    pub paid_report_sections: Vec<String>,
    pub paywall_copy: PaywallCopy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_locale_tag() {
        assert_eq!(normalize_locale_tag("en"), Some(Locale::En));
        assert_eq!(normalize_locale_tag(" PT-br "), Some(Locale::PtBr));
        assert_eq!(normalize_locale_tag("fr"), None);
        assert_eq!(normalize_locale_tag(""), None);
    }

    #[test]
    fn test_localized_serializes_in_locale_order() {
        let names = Localized::from_fn(|locale| locale.tag().to_uppercase());
        let json = serde_json::to_string(&names).unwrap();
        assert_eq!(json, r#"{"en":"EN","es":"ES","pt-BR":"PT-BR"}"#);
    }

    #[test]
    fn test_localized_map_and_iter() {
        let lengths = Localized::from_fn(|locale| locale.tag().to_string()).map(|_, tag| tag.len());
        let collected: Vec<_> = lengths.iter().map(|(l, n)| (l, *n)).collect();
        assert_eq!(collected, vec![(Locale::En, 2), (Locale::Es, 2), (Locale::PtBr, 5)]);
    }
}
