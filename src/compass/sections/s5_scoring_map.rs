//! Section 5: Scoring Map
//!
//! A markdown table of `| FREEDOM | 1, 11, 21 |` rows. The table is only a
//! cross-check: each row must equal the fixed grouping in
//! `lookup_tables`, in the same order. Nothing from it reaches the output.

use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

use crate::compass::utils::lookup_tables::ValueId;
use crate::error::ErrorLog;

static TABLE_ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|\s*([A-Z0-9_]+)\s*\|\s*([0-9,\s]+)\|").unwrap());

pub fn parse(lines: &[String], errors: &mut ErrorLog, label: &str) {
    let mut table: FxHashMap<String, Vec<u32>> = FxHashMap::default();
    for line in lines {
        let Some(caps) = TABLE_ROW_RE.captures(line.trim()) else {
            continue;
        };
        let numbers = caps[2]
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .filter_map(|part| part.parse::<u32>().ok())
            .collect();
        table.insert(caps[1].to_string(), numbers);
    }

    for value_id in ValueId::ALL {
        let expected = value_id.questions();
        match table.get(value_id.token()) {
            None => errors.push(format!("{} missing scoring map for {}", label, value_id.token())),
            Some(actual) if actual.as_slice() != expected.as_slice() => errors.push(format!(
                "{} scoring map for {} must be {:?}",
                label,
                value_id.token(),
                expected
            )),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<String> {
        let mut rows = vec!["| Value | Questions |".to_string(), "|---|---|".to_string()];
        for value in ValueId::ALL {
            let [a, b, c] = value.questions();
            rows.push(format!("| {} | {}, {}, {} |", value.token(), a, b, c));
        }
        rows
    }

    #[test]
    fn test_matching_table() {
        let mut errors = ErrorLog::new();
        parse(&table(), &mut errors, "en");
        assert!(errors.is_empty(), "{:?}", errors);
    }

    #[test]
    fn test_order_sensitive_mismatch() {
        let mut rows = table();
        rows[2] = "| FREEDOM | 11, 1, 21 |".to_string();
        let mut errors = ErrorLog::new();
        parse(&rows, &mut errors, "en");
        assert_eq!(errors.messages(), &["en scoring map for FREEDOM must be [1, 11, 21]".to_string()]);
    }

    #[test]
    fn test_missing_row() {
        let rows: Vec<String> = table().into_iter().filter(|r| !r.contains("ORDER")).collect();
        let mut errors = ErrorLog::new();
        parse(&rows, &mut errors, "es");
        assert!(errors.contains("es missing scoring map for ORDER"));
    }
}
