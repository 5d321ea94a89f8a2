//! Spec Validator
//!
//! Structural check of a `values_compass_v1` spec as JSON, independent of how
//! it was produced. Used as the final stage of conversion and by the
//! `validate` subcommand for specs already on disk.
//!
//! Errors are path-qualified: `spec.json.questions[3].prompt.es must be a
//! non-empty string`.

use serde_json::{Map, Value};

use crate::compass::types::{normalize_locale_tag, Locale};
use crate::config::{SLUG_PATTERN, TEST_ID_PATTERN};
use crate::error::ErrorLog;

/// Format identifier assumed when a spec does not declare one.
pub const DEFAULT_FORMAT_ID: &str = "values_compass_v1";

const LOCALE_BLOCK_FIELDS: [&str; 5] = [
    "title",
    "short_description",
    "intro",
    "paywall_headline",
    "report_title",
];

/// Identity facts gathered while validating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecInfo {
    pub test_id: Option<String>,
    pub slug: Option<String>,
    pub locales: Vec<Locale>,
}

fn validate_string(value: Option<&Value>, path: &str, errors: &mut ErrorLog) -> Option<String> {
    match value.and_then(Value::as_str).map(str::trim) {
        Some(text) if !text.is_empty() => Some(text.to_string()),
        _ => {
            errors.push(format!("{} must be a non-empty string", path));
            None
        }
    }
}

fn validate_integer(value: Option<&Value>, path: &str, errors: &mut ErrorLog) -> Option<i64> {
    let integer = value.and_then(Value::as_i64);
    if integer.is_none() {
        errors.push(format!("{} must be an integer", path));
    }
    integer
}

fn as_object<'a>(value: Option<&'a Value>, path: &str, errors: &mut ErrorLog) -> Option<&'a Map<String, Value>> {
    let object = value.and_then(Value::as_object);
    if object.is_none() {
        errors.push(format!("{} must be an object", path));
    }
    object
}

fn as_array<'a>(value: Option<&'a Value>, path: &str, errors: &mut ErrorLog) -> Option<&'a Vec<Value>> {
    let array = value.and_then(Value::as_array);
    if array.is_none() {
        errors.push(format!("{} must be an array", path));
    }
    array
}

fn validate_localized_map(value: Option<&Value>, locales: &[Locale], path: &str, errors: &mut ErrorLog) {
    let Some(map) = as_object(value, path, errors) else {
        return;
    };
    for locale in locales {
        validate_string(map.get(locale.tag()), &format!("{}.{}", path, locale), errors);
    }
}

fn validate_result_copy(value: Option<&Value>, locales: &[Locale], path: &str, errors: &mut ErrorLog) {
    let Some(map) = as_object(value, path, errors) else {
        return;
    };
    for locale in locales {
        let locale_path = format!("{}.{}", path, locale);
        let Some(copy) = as_object(map.get(locale.tag()), &locale_path, errors) else {
            continue;
        };
        validate_string(copy.get("headline"), &format!("{}.headline", locale_path), errors);
        validate_string(copy.get("summary"), &format!("{}.summary", locale_path), errors);
        if let Some(bullets) = as_array(copy.get("bullets"), &format!("{}.bullets", locale_path), errors) {
            for (index, bullet) in bullets.iter().enumerate() {
                validate_string(Some(bullet), &format!("{}.bullets[{}]", locale_path, index), errors);
            }
        }
    }
}

fn validate_locales(value: Option<&Value>, prefix: &str, errors: &mut ErrorLog) -> Vec<Locale> {
    let path = format!("{}.locales", prefix);
    let Some(map) = as_object(value, &path, errors) else {
        return Vec::new();
    };

    let mut locales = Vec::new();
    for key in map.keys() {
        match normalize_locale_tag(key) {
            None => errors.push(format!("{}.{} is not an allowed locale tag", path, key)),
            Some(locale) if locale.tag() != key => {
                errors.push(format!("{}.{} must be {}", path, key, locale));
            }
            Some(locale) => locales.push(locale),
        }
    }
    if locales.is_empty() {
        errors.push(format!("{} must include at least one locale", path));
    }

    for locale in &locales {
        let block_path = format!("{}.{}", path, locale);
        if let Some(block) = as_object(map.get(locale.tag()), &block_path, errors) {
            for field in LOCALE_BLOCK_FIELDS {
                validate_string(block.get(field), &format!("{}.{}", block_path, field), errors);
            }
        }
    }
    locales
}

fn validate_questions(value: Option<&Value>, locales: &[Locale], prefix: &str, errors: &mut ErrorLog) {
    let Some(questions) = as_array(value, &format!("{}.questions", prefix), errors) else {
        return;
    };
    for (index, question) in questions.iter().enumerate() {
        let path = format!("{}.questions[{}]", prefix, index);
        let Some(question) = as_object(Some(question), &path, errors) else {
            continue;
        };
        validate_string(question.get("id"), &format!("{}.id", path), errors);
        let question_type = validate_string(question.get("type"), &format!("{}.type", path), errors);
        if question_type.is_some_and(|t| t != "single_choice") {
            errors.push(format!("{}.type must be single_choice", path));
        }
        validate_localized_map(question.get("prompt"), locales, &format!("{}.prompt", path), errors);

        let Some(options) = as_array(question.get("options"), &format!("{}.options", path), errors) else {
            continue;
        };
        for (option_index, option) in options.iter().enumerate() {
            let option_path = format!("{}.options[{}]", path, option_index);
            let Some(option) = as_object(Some(option), &option_path, errors) else {
                continue;
            };
            validate_string(option.get("id"), &format!("{}.id", option_path), errors);
            validate_localized_map(option.get("label"), locales, &format!("{}.label", option_path), errors);
        }
    }
}

fn validate_scoring(value: Option<&Value>, prefix: &str, errors: &mut ErrorLog) {
    let path = format!("{}.scoring", prefix);
    let Some(scoring) = as_object(value, &path, errors) else {
        return;
    };

    if let Some(scales) = as_array(scoring.get("scales"), &format!("{}.scales", path), errors) {
        for (index, scale) in scales.iter().enumerate() {
            validate_string(Some(scale), &format!("{}.scales[{}]", path, index), errors);
        }
    }

    let weights_path = format!("{}.option_weights", path);
    let Some(option_weights) = as_object(scoring.get("option_weights"), &weights_path, errors) else {
        return;
    };
    for (option_id, weights) in option_weights {
        let option_path = format!("{}.{}", weights_path, option_id);
        let Some(weights) = as_object(Some(weights), &option_path, errors) else {
            continue;
        };
        for (scale_id, weight) in weights {
            validate_integer(Some(weight), &format!("{}.{}", option_path, scale_id), errors);
        }
    }
}

fn validate_result_bands(value: Option<&Value>, locales: &[Locale], prefix: &str, errors: &mut ErrorLog) {
    let Some(bands) = as_array(value, &format!("{}.result_bands", prefix), errors) else {
        return;
    };
    for (index, band) in bands.iter().enumerate() {
        let path = format!("{}.result_bands[{}]", prefix, index);
        let Some(band) = as_object(Some(band), &path, errors) else {
            continue;
        };
        validate_string(band.get("band_id"), &format!("{}.band_id", path), errors);
        validate_integer(band.get("min_score_inclusive"), &format!("{}.min_score_inclusive", path), errors);
        validate_integer(band.get("max_score_inclusive"), &format!("{}.max_score_inclusive", path), errors);
        validate_result_copy(band.get("copy"), locales, &format!("{}.copy", path), errors);
    }
}

/// Validate one spec document. `prefix` names it in error paths (usually the
/// file path).
pub fn validate_spec(data: &Value, prefix: &str, errors: &mut ErrorLog) -> SpecInfo {
    let Some(root) = data.as_object() else {
        errors.push(format!("{} must be a JSON object", prefix));
        return SpecInfo::default();
    };

    match root.get("format_id") {
        None => {}
        Some(Value::String(format_id)) if format_id.trim() == DEFAULT_FORMAT_ID => {}
        Some(Value::String(format_id)) if !format_id.trim().is_empty() => {
            errors.push(format!("{}.format_id must be {}", prefix, DEFAULT_FORMAT_ID));
            return SpecInfo::default();
        }
        Some(_) => {
            errors.push(format!("{}.format_id must be a non-empty string", prefix));
            return SpecInfo::default();
        }
    }

    let test_id = validate_string(root.get("test_id"), &format!("{}.test_id", prefix), errors);
    if test_id.as_deref().is_some_and(|id| !TEST_ID_PATTERN.is_match(id)) {
        errors.push(format!("{}.test_id must match test-<slug>", prefix));
    }
    let slug = validate_string(root.get("slug"), &format!("{}.slug", prefix), errors);
    if slug.as_deref().is_some_and(|s| !SLUG_PATTERN.is_match(s)) {
        errors.push(format!("{}.slug must be url-safe", prefix));
    }
    if let (Some(id), Some(s)) = (&test_id, &slug) {
        if *id != format!("test-{}", s) {
            errors.push(format!("{}.test_id must align with slug", prefix));
        }
    }

    let version = validate_integer(root.get("version"), &format!("{}.version", prefix), errors);
    if version.is_some_and(|v| v < 1) {
        errors.push(format!("{}.version must be >= 1", prefix));
    }
    validate_string(root.get("category"), &format!("{}.category", prefix), errors);

    let locales = validate_locales(root.get("locales"), prefix, errors);
    validate_questions(root.get("questions"), &locales, prefix, errors);
    validate_scoring(root.get("scoring"), prefix, errors);
    validate_result_bands(root.get("result_bands"), &locales, prefix, errors);

    SpecInfo {
        test_id,
        slug,
        locales,
    }
}
