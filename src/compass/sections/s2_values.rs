//! Section 2: The 10 Values
//!
//! One line per value: `3) ACHIEVEMENT (Achievement) - Reaching goals that matter.`

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::compass::types::ValueDefinition;
use crate::compass::utils::lookup_tables::ValueId;
use crate::error::ErrorLog;

static VALUE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d+\)\s*([A-Z0-9_]+)\s*\(([^)]+)\)\s*-\s*(.+)$").unwrap()
});

pub fn parse(lines: &[String], errors: &mut ErrorLog, label: &str) -> BTreeMap<ValueId, ValueDefinition> {
    let mut values = BTreeMap::new();

    for line in lines {
        let Some(caps) = VALUE_LINE_RE.captures(line) else {
            continue;
        };
        let token = &caps[1];
        let Some(value_id) = ValueId::from_token(token) else {
            errors.push(format!("{} has unknown value id {}", label, token));
            continue;
        };
        values.insert(
            value_id,
            ValueDefinition {
                name: caps[2].trim().to_string(),
                definition: caps[3].trim().to_string(),
            },
        );
    }

    for value_id in ValueId::ALL {
        if !values.contains_key(&value_id) {
            errors.push(format!("{} missing value definition for {}", label, value_id));
        }
    }

    values
}
