//! Section 8: Conflict Library
//!
//! Each entry opens with a `FREEDOM vs SECURITY` line. Below it, the first
//! label block is the intensity level with its summary bullets, the second
//! block holds the playbook.

use std::collections::BTreeMap;

use crate::compass::sections::s6_conflict_pairs::match_known_pair;
use crate::compass::types::ConflictEntry;
use crate::compass::utils::blocks::{is_underline, join_words, non_blank, parse_label_blocks};
use crate::compass::utils::lookup_tables::pair_id;
use crate::error::ErrorLog;

pub fn parse(lines: &[String], errors: &mut ErrorLog, label: &str) -> BTreeMap<String, ConflictEntry> {
    let mut library = BTreeMap::new();

    let mut index = 0;
    while index < lines.len() {
        let Some((left, right)) = match_known_pair(&lines[index]) else {
            index += 1;
            continue;
        };
        let key = pair_id(left, right);

        let mut start = index + 1;
        if start < lines.len() && is_underline(&lines[start]) {
            start += 1;
        }
        let end = (start..lines.len())
            .find(|&i| match_known_pair(&lines[i]).is_some())
            .unwrap_or(lines.len());

        let blocks = parse_label_blocks(&lines[start.min(end)..end]);
        match blocks.first() {
            None => errors.push(format!("{} conflict block missing for {}", label, key)),
            Some(first) => {
                let level = first.label.trim().to_string();
                let summary = join_words(&first.bullets);
                let playbook = blocks.get(1).map(|b| non_blank(&b.bullets)).unwrap_or_default();
                if summary.is_empty() {
                    errors.push(format!("{} conflict summary missing for {}", label, key));
                }
                if playbook.is_empty() {
                    errors.push(format!("{} conflict playbook missing for {}", label, key));
                }
                library.insert(
                    key,
                    ConflictEntry {
                        level,
                        summary,
                        playbook,
                    },
                );
            }
        }
        index = end;
    }

    if library.is_empty() {
        errors.push(format!("{} conflict library is empty", label));
    }
    library
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_library_entries() {
        let input = lines(
            "FREEDOM vs SECURITY\n---\nHigh tension\n- Room to roam versus a safety net.\n\nPlaybook\n- Save first.\n- Experiment within limits.\n\nACHIEVEMENT vs CONNECTION\nMedium tension\n- Goals versus people.\nPlaybook\n- Block time for both.\n",
        );
        let mut errors = ErrorLog::new();
        let library = parse(&input, &mut errors, "en");
        assert!(errors.is_empty(), "{:?}", errors);
        assert_eq!(library.len(), 2);

        let entry = &library["freedom_vs_security"];
        assert_eq!(entry.level, "High tension");
        assert_eq!(entry.summary, "Room to roam versus a safety net.");
        assert_eq!(entry.playbook, vec!["Save first.", "Experiment within limits."]);

        assert_eq!(library["achievement_vs_connection"].playbook, vec!["Block time for both."]);
    }

    #[test]
    fn test_missing_playbook_and_empty_library() {
        let mut errors = ErrorLog::new();
        let library = parse(&lines("GROWTH vs ORDER\nLow tension\n- Summary only.\n"), &mut errors, "pt-BR");
        assert_eq!(library.len(), 1);
        assert!(errors.contains("pt-BR conflict playbook missing for growth_vs_order"));

        let mut errors = ErrorLog::new();
        parse(&lines("No pairs here"), &mut errors, "pt-BR");
        assert!(errors.contains("pt-BR conflict library is empty"));
    }
}
