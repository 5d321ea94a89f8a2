//! Section 6: Conflict Pairs
//!
//! Ordered list of `1) FREEDOM vs SECURITY` lines (the `1)` prefix is optional).
//! The pair order here is the order of `conflicts` in the output.

use regex::Regex;
use std::sync::LazyLock;

use crate::compass::types::ConflictPair;
use crate::compass::utils::lookup_tables::ValueId;
use crate::error::ErrorLog;

pub(crate) static PAIR_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\d+\)\s*)?([A-Z0-9_]+)\s+vs\s+([A-Z0-9_]+)\s*$").unwrap()
});

/// Both tokens of a `TOKEN vs TOKEN` line, if the line has that shape.
pub(crate) fn match_pair_tokens(line: &str) -> Option<(String, String)> {
    let caps = PAIR_LINE_RE.captures(line.trim())?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

/// A `TOKEN vs TOKEN` line whose tokens are both known values.
pub(crate) fn match_known_pair(line: &str) -> Option<ConflictPair> {
    let (left, right) = match_pair_tokens(line)?;
    Some((ValueId::from_token(&left)?, ValueId::from_token(&right)?))
}

pub fn parse(lines: &[String], errors: &mut ErrorLog, label: &str) -> Vec<ConflictPair> {
    let mut pairs = Vec::new();
    for line in lines {
        let Some((left, right)) = match_pair_tokens(line) else {
            continue;
        };
        match (ValueId::from_token(&left), ValueId::from_token(&right)) {
            (Some(a), Some(b)) => pairs.push((a, b)),
            _ => errors.push(format!("{} has unknown conflict pair {} vs {}", label, left, right)),
        }
    }

    if pairs.is_empty() {
        errors.push(format!("{} has no conflict pairs", label));
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_pairs_keep_order() {
        let input = lines("Top tensions:\n1) FREEDOM vs SECURITY\n2) ACHIEVEMENT vs CONNECTION\nRECOGNITION vs INTEGRITY\n");
        let mut errors = ErrorLog::new();
        let pairs = parse(&input, &mut errors, "en");
        assert!(errors.is_empty());
        assert_eq!(
            pairs,
            vec![
                (ValueId::Freedom, ValueId::Security),
                (ValueId::Achievement, ValueId::Connection),
                (ValueId::Recognition, ValueId::Integrity),
            ]
        );
    }

    #[test]
    fn test_unknown_token_and_empty() {
        let mut errors = ErrorLog::new();
        let pairs = parse(&lines("1) FREEDOM vs CHAOS"), &mut errors, "es");
        assert!(pairs.is_empty());
        assert!(errors.contains("es has unknown conflict pair FREEDOM vs CHAOS"));
        assert!(errors.contains("es has no conflict pairs"));
    }

    #[test]
    fn test_lowercase_vs_line_is_not_a_pair() {
        assert_eq!(match_known_pair("Freedom vs Security"), None);
        assert_eq!(
            match_known_pair("  ORDER vs GROWTH  "),
            Some((ValueId::Order, ValueId::Growth))
        );
    }
}
