//! Spec Generator
//!
//! Merges the three parsed locale documents into one `Spec`.
//!
//! Public API (consumed by convert.rs):
//! - SpecBuilder::new(meta) -> Self
//! - SpecBuilder::build(&docs) -> Spec
//!
//! The builder assumes the documents already passed the aggregator checks.
//! It never fails; a field missing from a document comes out empty.

use crate::compass::types::{ConflictPair, LocaleDocument, Localized};
use crate::compass::utils::lookup_tables::{
    pair_id, value_for_question, ValueId, MAX_SCORE, MIN_SCORE, QUESTION_COUNT, SCALE_POINTS,
};
use crate::compass::spec_types::{
    BandCopy, ConflictCopy, ConflictSpec, LocaleSummary, OptionSpec, OptionWeights, OrderedMap,
    PaidReport, QuestionSpec, ResultBand, Scoring, Spec, Templates, ValueDimension, ValueProfile,
};
use crate::config::SpecMeta;

/// Band narrative copy. Not sourced from markdown; the same English copy is
/// written for every locale.
const BAND_COPY: [(&str, &str, &str); 3] = [
    ("low", "Lower alignment", "Your total score lands in the lower range."),
    ("mid", "Balanced alignment", "Your total score lands in the middle range."),
    ("high", "Higher alignment", "Your total score lands in the upper range."),
];

const BAND_BULLETS: [&str; 3] = [
    "Use your results as a reflection tool.",
    "Compare your highest values and tensions.",
    "Apply one change in the next week.",
];

/// Stateless spec builder for one test.
pub struct SpecBuilder {
    meta: SpecMeta,
}

impl SpecBuilder {
    pub fn new(meta: SpecMeta) -> Self {
        Self { meta }
    }

    /// Build the complete spec. `en`'s conflict pair list is the canonical one.
    pub fn build(&self, docs: &Localized<LocaleDocument>) -> Spec {
        let spec = Spec {
            test_id: self.meta.test_id.clone(),
            slug: self.meta.slug.clone(),
            version: self.meta.spec_version(),
            category: self.meta.category.clone(),
            locales: build_locale_summaries(docs),
            questions: build_questions(docs),
            scoring: build_scoring(),
            result_bands: build_result_bands(),
            value_dimensions: build_value_dimensions(docs),
            value_profiles: build_profiles(docs),
            conflicts: build_conflicts(docs, &docs.en.conflict_pairs),
            templates: build_templates(docs),
        };
        tracing::info!(
            "Built spec {}: {} questions, {} conflicts",
            spec.test_id,
            spec.questions.len(),
            spec.conflicts.len()
        );
        spec
    }
}

/// `q07`
pub fn question_id(number: u32) -> String {
    format!("q{:02}", number)
}

/// `q07_3`
pub fn option_id(number: u32, rank: u32) -> String {
    format!("{}_{}", question_id(number), rank)
}

pub fn build_locale_summaries(docs: &Localized<LocaleDocument>) -> Localized<LocaleSummary> {
    docs.map(|_, doc| LocaleSummary {
        title: doc.title.clone(),
        short_description: doc.short_description.clone(),
        intro: doc.intro.clone(),
        instructions: doc.instructions.clone(),
        paywall_headline: doc.paywall_copy.cta.clone(),
        report_title: doc.paid_report_title.clone(),
    })
}

/// 30 single-choice questions. Every question reuses the locale's five scale
/// labels as its options.
pub fn build_questions(docs: &Localized<LocaleDocument>) -> Vec<QuestionSpec> {
    (1..=QUESTION_COUNT)
        .map(|number| QuestionSpec {
            id: question_id(number),
            question_type: "single_choice".to_string(),
            prompt: docs.map(|_, doc| doc.questions.get(&number).cloned().unwrap_or_default()),
            options: (1..=SCALE_POINTS)
                .map(|rank| OptionSpec {
                    id: option_id(number, rank),
                    label: docs.map(|_, doc| doc.scale_labels.get(&rank).cloned().unwrap_or_default()),
                })
                .collect(),
        })
        .collect()
}

/// Scales in canonical order; each option weighs its rank against the value
/// that owns the question.
pub fn build_scoring() -> Scoring {
    let mut option_weights = OptionWeights::new();
    for number in 1..=QUESTION_COUNT {
        let Some(value_id) = value_for_question(number) else {
            continue;
        };
        for rank in 1..=SCALE_POINTS {
            let mut weight = OrderedMap::new();
            weight.insert(value_id.id(), rank);
            option_weights.insert(option_id(number, rank), weight);
        }
    }

    Scoring {
        scales: ValueId::ALL.to_vec(),
        option_weights,
    }
}

/// Three equal-width bands over `[MIN_SCORE, MAX_SCORE]`; the top band takes
/// any remainder.
pub fn build_result_bands() -> Vec<ResultBand> {
    let band_size = (MAX_SCORE - MIN_SCORE + 1) / 3;
    let first_max = MIN_SCORE + band_size - 1;
    let second_max = first_max + band_size;
    let ranges = [
        (MIN_SCORE, first_max),
        (first_max + 1, second_max),
        (second_max + 1, MAX_SCORE),
    ];

    BAND_COPY
        .iter()
        .zip(ranges)
        .map(|(&(band_id, headline, summary), (minimum, maximum))| ResultBand {
            band_id: band_id.to_string(),
            min_score_inclusive: minimum,
            max_score_inclusive: maximum,
            copy: Localized::from_fn(|_| BandCopy {
                headline: headline.to_string(),
                summary: summary.to_string(),
                bullets: BAND_BULLETS.iter().map(|b| b.to_string()).collect(),
            }),
        })
        .collect()
}

pub fn build_value_dimensions(docs: &Localized<LocaleDocument>) -> Vec<ValueDimension> {
    ValueId::ALL
        .iter()
        .map(|&value_id| ValueDimension {
            value_id,
            name: docs.map(|_, doc| value_name(doc, value_id)),
            definition: docs.map(|_, doc| {
                doc.values
                    .get(&value_id)
                    .map(|v| v.definition.clone())
                    .unwrap_or_default()
            }),
        })
        .collect()
}

pub fn build_profiles(docs: &Localized<LocaleDocument>) -> OrderedMap<ValueProfile> {
    let mut profiles = OrderedMap::new();
    for value_id in ValueId::ALL {
        let profile = ValueProfile {
            preview: docs.map(|_, doc| {
                doc.profiles
                    .get(&value_id)
                    .map(|p| p.preview.clone())
                    .unwrap_or_default()
            }),
            paid: docs.map(|_, doc| {
                doc.profiles
                    .get(&value_id)
                    .map(|p| p.paid.clone())
                    .unwrap_or_default()
            }),
        };
        profiles.insert(value_id.id(), profile);
    }
    profiles
}

/// One entry per pair, labelled with each locale's display names and joined
/// with that locale's conflict library entry.
pub fn build_conflicts(docs: &Localized<LocaleDocument>, pairs: &[ConflictPair]) -> Vec<ConflictSpec> {
    pairs
        .iter()
        .map(|&(a, b)| {
            let key = pair_id(a, b);
            let entry = |doc: &LocaleDocument| doc.conflict_library.get(&key).cloned().unwrap_or_default();
            ConflictSpec {
                pair_id: key.clone(),
                a,
                b,
                label: docs.map(|_, doc| format!("{} vs {}", value_name(doc, a), value_name(doc, b))),
                copy: ConflictCopy {
                    level: docs.map(|_, doc| entry(doc).level),
                    summary: docs.map(|_, doc| entry(doc).summary),
                    playbook: docs.map(|_, doc| entry(doc).playbook),
                },
            }
        })
        .collect()
}

pub fn build_templates(docs: &Localized<LocaleDocument>) -> Templates {
    Templates {
        preview_template: docs.map(|_, doc| doc.preview_template.clone()),
        paywall_hook: docs.map(|_, doc| doc.paywall_hook.clone()),
        paid_report: PaidReport {
            title: docs.map(|_, doc| doc.paid_report_title.clone()),
            sections: docs.map(|_, doc| doc.paid_report_sections.clone()),
        },
        paywall_copy: docs.map(|_, doc| doc.paywall_copy.clone()),
    }
}

fn value_name(doc: &LocaleDocument, value_id: ValueId) -> String {
    doc.values
        .get(&value_id)
        .map(|v| v.name.clone())
        .unwrap_or_default()
}
