//! Section 3: Start Screen
//!
//! Three label blocks, in order: title, short promise, instructions. The
//! instruction bullets also carry the answer scale as `1 = Not at all like me`.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::compass::utils::blocks::{join_words, parse_label_blocks};
use crate::compass::utils::lookup_tables::SCALE_POINTS;
use crate::error::ErrorLog;

static SCALE_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*=\s*(.+)$").unwrap());

/// Parsed start screen copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartScreen {
    pub title: String,
    pub short_description: String,
    pub instructions: String,
    pub scale_labels: BTreeMap<u32, String>,
}

pub fn parse(lines: &[String], errors: &mut ErrorLog, label: &str) -> StartScreen {
    let blocks = parse_label_blocks(lines);
    if blocks.len() < 3 {
        errors.push(format!(
            "{} section 3 must include title, short promise, and instructions",
            label
        ));
        return StartScreen::default();
    }

    let title = join_words(&blocks[0].bullets);
    let short_description = join_words(&blocks[1].bullets);
    let instruction_lines = &blocks[2].bullets;
    let instructions = instruction_lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    if title.is_empty() {
        errors.push(format!("{} section 3 missing title", label));
    }
    if short_description.is_empty() {
        errors.push(format!("{} section 3 missing short promise", label));
    }
    if instructions.is_empty() {
        errors.push(format!("{} section 3 missing instructions", label));
    }

    let scale_labels: BTreeMap<u32, String> = instruction_lines
        .iter()
        .filter_map(|line| {
            let caps = SCALE_LINE_RE.captures(line)?;
            let rank = caps[1].parse::<u32>().ok()?;
            Some((rank, caps[2].trim().to_string()))
        })
        .collect();

    let missing: Vec<String> = (1..=SCALE_POINTS)
        .filter(|rank| !scale_labels.contains_key(rank))
        .map(|rank| rank.to_string())
        .collect();
    if !missing.is_empty() {
        errors.push(format!(
            "{} instructions missing scale labels for: {}",
            label,
            missing.join(", ")
        ));
    }

    StartScreen {
        title,
        short_description,
        instructions,
        scale_labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_start_screen() {
        let input = lines(
            "Title\n- Values Compass\n\nShort promise\n- Find what matters.\n\nInstructions\n- Rate each statement.\n- 1 = Not at all\n- 2 = A little\n- 3 = Somewhat\n- 4 = Mostly\n- 5 = Completely\n",
        );
        let mut errors = ErrorLog::new();
        let screen = parse(&input, &mut errors, "en");

        assert!(errors.is_empty(), "{:?}", errors);
        assert_eq!(screen.title, "Values Compass");
        assert_eq!(screen.short_description, "Find what matters.");
        assert!(screen.instructions.starts_with("Rate each statement.\n1 = Not at all"));
        assert_eq!(screen.scale_labels.len(), 5);
        assert_eq!(screen.scale_labels[&5], "Completely");
    }

    #[test]
    fn test_missing_scale_labels_are_listed() {
        let input = lines("Title\n- T\n\nPromise\n- P\n\nInstructions\n- 1 = One\n- 3 = Three\n- 5 = Five\n");
        let mut errors = ErrorLog::new();
        parse(&input, &mut errors, "pt-BR");
        assert!(errors.contains("pt-BR instructions missing scale labels for: 2, 4"));
    }

    #[test]
    fn test_too_few_blocks() {
        let mut errors = ErrorLog::new();
        let screen = parse(&lines("Title\n- T\n"), &mut errors, "en");
        assert_eq!(screen, StartScreen::default());
        assert!(errors.contains("section 3 must include title, short promise, and instructions"));
    }
}
