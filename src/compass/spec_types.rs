//! Output document types.
//!
//! These mirror the JSON contract consumed by the catalog validator and the
//! runtime: every piece of copy is a `Localized<T>` keyed by locale tag.

use serde::{Serialize, Serializer};

use crate::compass::types::{Localized, PaywallCopy};
use crate::compass::utils::lookup_tables::ValueId;

/// String-keyed map that serializes in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

/// Complete test spec.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spec {
    pub test_id: String,
    pub slug: String,
    pub version: u32,
    pub category: String,
    pub locales: Localized<LocaleSummary>,
    pub questions: Vec<QuestionSpec>,
    pub scoring: Scoring,
    pub result_bands: Vec<ResultBand>,
    pub value_dimensions: Vec<ValueDimension>,
    pub value_profiles: OrderedMap<ValueProfile>,
    pub conflicts: Vec<ConflictSpec>,
    pub templates: Templates,
}

/// Landing and report headline copy for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSummary {
    pub title: String,
    pub short_description: String,
    pub intro: String,
    pub instructions: String,
    pub paywall_headline: String,
    pub report_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSpec {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: String,
    pub prompt: Localized<String>,
    pub options: Vec<OptionSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    pub id: String,
    pub label: Localized<String>,
}

/// Option id -> {value id -> weight}.
pub type OptionWeights = OrderedMap<OrderedMap<u32>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scoring {
    pub scales: Vec<ValueId>,
    pub option_weights: OptionWeights,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultBand {
    pub band_id: String,
    pub min_score_inclusive: u32,
    pub max_score_inclusive: u32,
    pub copy: Localized<BandCopy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandCopy {
    pub headline: String,
    pub summary: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueDimension {
    pub value_id: ValueId,
    pub name: Localized<String>,
    pub definition: Localized<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueProfile {
    pub preview: Localized<String>,
    pub paid: Localized<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictSpec {
    pub pair_id: String,
    pub a: ValueId,
    pub b: ValueId,
    pub label: Localized<String>,
    pub copy: ConflictCopy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictCopy {
    pub level: Localized<String>,
    pub summary: Localized<String>,
    pub playbook: Localized<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Templates {
    pub preview_template: Localized<String>,
    pub paywall_hook: Localized<String>,
    pub paid_report: PaidReport,
    pub paywall_copy: Localized<PaywallCopy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaidReport {
    pub title: Localized<String>,
    pub sections: Localized<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_map_keeps_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("zeta", 1);
        map.insert("alpha", 2);
        map.insert("zeta", 3);
        assert_eq!(map.keys().count(), 2);
        assert_eq!(map.get("zeta"), Some(&3));
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"zeta":3,"alpha":2}"#);
    }

    #[test]
    fn test_question_type_field_name() {
        let question = QuestionSpec {
            id: "q01".to_string(),
            question_type: "single_choice".to_string(),
            prompt: Localized::default(),
            options: vec![],
        };
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "single_choice");
        assert_eq!(json["prompt"]["pt-BR"], "");
    }
}
