//! Section 7: Value Profiles
//!
//! Each value opens with `FREEDOM (Freedom)` (optionally underlined). The text
//! up to the next opener is two label blocks: preview, then paid bullets.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::compass::types::ProfileCopy;
use crate::compass::utils::blocks::{is_underline, join_words, non_blank, parse_label_blocks};
use crate::compass::utils::lookup_tables::ValueId;
use crate::error::ErrorLog;

static PROFILE_OPENER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Z0-9_]+)\s*\(([^)]+)\)\s*$").unwrap());

fn match_opener(line: &str) -> Option<ValueId> {
    let caps = PROFILE_OPENER_RE.captures(line.trim())?;
    ValueId::from_token(&caps[1])
}

pub fn parse(lines: &[String], errors: &mut ErrorLog, label: &str) -> BTreeMap<ValueId, ProfileCopy> {
    let mut profiles = BTreeMap::new();

    let mut index = 0;
    while index < lines.len() {
        let Some(value_id) = match_opener(&lines[index]) else {
            index += 1;
            continue;
        };

        let mut start = index + 1;
        if start < lines.len() && is_underline(&lines[start]) {
            start += 1;
        }
        let end = (start..lines.len())
            .find(|&i| match_opener(&lines[i]).is_some())
            .unwrap_or(lines.len());

        let blocks = parse_label_blocks(&lines[start.min(end)..end]);
        let token = value_id.token();
        if blocks.len() < 2 {
            errors.push(format!("{} profile for {} missing preview or paid blocks", label, token));
        } else {
            let preview = join_words(&blocks[0].bullets);
            let paid = non_blank(&blocks[1].bullets);
            if preview.is_empty() {
                errors.push(format!("{} profile preview missing for {}", label, token));
            }
            if paid.is_empty() {
                errors.push(format!("{} profile paid copy missing for {}", label, token));
            }
            profiles.insert(value_id, ProfileCopy { preview, paid });
        }
        index = end;
    }

    for value_id in ValueId::ALL {
        if !profiles.contains_key(&value_id) {
            errors.push(format!("{} missing profile copy for {}", label, value_id));
        }
    }

    profiles
}
