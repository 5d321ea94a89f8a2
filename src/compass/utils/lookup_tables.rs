//! Values Compass Fixed Model
//!
//! The ten value dimensions, their uppercase source tokens and the fixed
//! question grouping. Parsed markdown is checked against these tables; it
//! never redefines them.
//!
//! Question grouping: value at canonical position `n` (1-based) owns
//! questions `n`, `n + 10` and `n + 20`.

use serde::Serialize;

/// Number of prompts in one test.
pub const QUESTION_COUNT: u32 = 30;

/// Points on the answer scale (1..=5).
pub const SCALE_POINTS: u32 = 5;

/// Lowest possible total score (every answer at 1).
pub const MIN_SCORE: u32 = QUESTION_COUNT;

/// Highest possible total score (every answer at 5).
pub const MAX_SCORE: u32 = QUESTION_COUNT * SCALE_POINTS;

/// One of the ten scored value dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueId {
    Freedom,
    Security,
    Achievement,
    Connection,
    Growth,
    Contribution,
    Recognition,
    Enjoyment,
    Integrity,
    Order,
}

// ============================================================================
// EMBEDDED VALUE TABLE
// (value, output id, source token, questions)
// ============================================================================

static VALUE_TABLE: &[(ValueId, &str, &str, [u32; 3])] = &[
    (ValueId::Freedom, "freedom", "FREEDOM", [1, 11, 21]),
    (ValueId::Security, "security", "SECURITY", [2, 12, 22]),
    (ValueId::Achievement, "achievement", "ACHIEVEMENT", [3, 13, 23]),
    (ValueId::Connection, "connection", "CONNECTION", [4, 14, 24]),
    (ValueId::Growth, "growth", "GROWTH", [5, 15, 25]),
    (ValueId::Contribution, "contribution", "CONTRIBUTION", [6, 16, 26]),
    (ValueId::Recognition, "recognition", "RECOGNITION", [7, 17, 27]),
    (ValueId::Enjoyment, "enjoyment", "ENJOYMENT", [8, 18, 28]),
    (ValueId::Integrity, "integrity", "INTEGRITY", [9, 19, 29]),
    (ValueId::Order, "order", "ORDER", [10, 20, 30]),
];

impl ValueId {
    /// Canonical order. This is the order of `scoring.scales`.
    pub const ALL: [ValueId; 10] = [
        ValueId::Freedom,
        ValueId::Security,
        ValueId::Achievement,
        ValueId::Connection,
        ValueId::Growth,
        ValueId::Contribution,
        ValueId::Recognition,
        ValueId::Enjoyment,
        ValueId::Integrity,
        ValueId::Order,
    ];

    fn row(self) -> &'static (ValueId, &'static str, &'static str, [u32; 3]) {
        &VALUE_TABLE[self as usize]
    }

    /// Lowercase identifier used in the output JSON.
    pub fn id(self) -> &'static str {
        self.row().1
    }

    /// Uppercase token used in the markdown source.
    pub fn token(self) -> &'static str {
        self.row().2
    }

    /// The three question numbers scored against this value.
    pub fn questions(self) -> [u32; 3] {
        self.row().3
    }

    /// Exact, case-sensitive token lookup (`"FREEDOM"` -> `Freedom`).
    pub fn from_token(token: &str) -> Option<ValueId> {
        VALUE_TABLE
            .iter()
            .find(|(_, _, t, _)| *t == token)
            .map(|(value, _, _, _)| *value)
    }
}

impl std::fmt::Display for ValueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// The value that owns question `number`, if it is in 1..=30.
pub fn value_for_question(number: u32) -> Option<ValueId> {
    VALUE_TABLE
        .iter()
        .find(|(_, _, _, questions)| questions.contains(&number))
        .map(|(value, _, _, _)| *value)
}

/// Conflict library key, e.g. `freedom_vs_security`.
pub fn pair_id(a: ValueId, b: ValueId) -> String {
    format!("{}_vs_{}", a.id(), b.id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_enum_order() {
        for (index, value) in ValueId::ALL.iter().enumerate() {
            assert_eq!(VALUE_TABLE[index].0, *value);
            assert_eq!(value.token().to_lowercase(), value.id());
            assert_eq!(serde_json::to_value(value).unwrap(), value.id());
        }
    }

    #[test]
    fn test_grouping_covers_every_question_once() {
        let mut seen = vec![0u32; QUESTION_COUNT as usize + 1];
        for value in ValueId::ALL {
            for q in value.questions() {
                seen[q as usize] += 1;
                assert_eq!(value_for_question(q), Some(value));
            }
        }
        assert!(seen[1..].iter().all(|&count| count == 1));
        assert_eq!(value_for_question(0), None);
        assert_eq!(value_for_question(31), None);
    }

    #[test]
    fn test_token_lookup_is_case_sensitive() {
        assert_eq!(ValueId::from_token("ORDER"), Some(ValueId::Order));
        assert_eq!(ValueId::from_token("order"), None);
        assert_eq!(ValueId::from_token("CHAOS"), None);
    }

    #[test]
    fn test_score_range() {
        assert_eq!(MIN_SCORE, 30);
        assert_eq!(MAX_SCORE, 150);
        assert_eq!(pair_id(ValueId::Freedom, ValueId::Security), "freedom_vs_security");
    }

    #[test]
    fn test_serializes_as_lowercase_id() {
        let json = serde_json::to_string(&ValueId::Contribution).unwrap();
        assert_eq!(json, "\"contribution\"");
    }
}
