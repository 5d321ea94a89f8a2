//! Line-level helpers shared by the section parsers.
//!
//! Most sections are written as "label line, then bullet lines, then a blank
//! line". [`LabelBlockCollector`] turns such a run of lines into
//! [`LabelBlock`]s.

use regex::Regex;
use std::sync::LazyLock;

static UNDERLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-=]{3,}\s*$").unwrap());

/// A line of three or more `-` / `=` characters.
pub fn is_underline(line: &str) -> bool {
    UNDERLINE_RE.is_match(line)
}

/// Bullet marker at the start of a trimmed line.
pub fn is_bullet(trimmed: &str) -> bool {
    trimmed.starts_with('-') || trimmed.starts_with('*')
}

/// Trim, then drop the leading run of `-`, `*` and spaces.
pub fn strip_bullet(line: &str) -> &str {
    line.trim()
        .trim_start_matches(['-', '*', ' '])
        .trim()
}

/// First contiguous run of non-blank, non-bullet lines, joined with spaces.
///
/// Leading blank lines and bullet lines are skipped; the first blank line
/// after some text ends the paragraph.
pub fn first_paragraph(lines: &[String]) -> String {
    let mut buffer: Vec<&str> = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !buffer.is_empty() {
                break;
            }
            continue;
        }
        if trimmed.starts_with('-') {
            continue;
        }
        buffer.push(trimmed);
    }
    buffer.join(" ").trim().to_string()
}

/// Non-empty items joined with a single space.
pub fn join_words(items: &[String]) -> String {
    items.join(" ").trim().to_string()
}

/// Items with blanks removed.
pub fn non_blank(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// A label line and the bullet items below it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelBlock {
    pub label: String,
    pub bullets: Vec<String>,
}

/// State machine for label blocks.
///
/// - blank line: closes the open block
/// - bullet line: appended to the open block, dropped if none is open
/// - any other line: closes the open block and opens a new one
#[derive(Debug, Default)]
pub struct LabelBlockCollector {
    open: Option<LabelBlock>,
    blocks: Vec<LabelBlock>,
}

impl LabelBlockCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            self.flush();
            return;
        }
        if is_bullet(trimmed) {
            if let Some(block) = self.open.as_mut() {
                block.bullets.push(strip_bullet(trimmed).to_string());
            }
            return;
        }
        self.flush();
        self.open = Some(LabelBlock {
            label: trimmed.to_string(),
            bullets: Vec::new(),
        });
    }

    fn flush(&mut self) {
        if let Some(block) = self.open.take() {
            self.blocks.push(block);
        }
    }

    pub fn finish(mut self) -> Vec<LabelBlock> {
        self.flush();
        self.blocks
    }
}

/// Split `lines` into label blocks.
pub fn parse_label_blocks(lines: &[String]) -> Vec<LabelBlock> {
    let mut collector = LabelBlockCollector::new();
    for line in lines {
        collector.feed(line);
    }
    collector.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_underline() {
        assert!(is_underline("---"));
        assert!(is_underline("  ======  "));
        assert!(is_underline("-=-="));
        assert!(!is_underline("--"));
        assert!(!is_underline("--- x"));
    }

    #[test]
    fn test_strip_bullet() {
        assert_eq!(strip_bullet("  - item "), "item");
        assert_eq!(strip_bullet("* - nested"), "nested");
        assert_eq!(strip_bullet("plain"), "plain");
    }

    #[test]
    fn test_first_paragraph_skips_bullets_and_stops_at_blank() {
        let input = lines("\n- note\nFirst line\nsecond line\n\nLater paragraph");
        assert_eq!(first_paragraph(&input), "First line second line");
    }

    #[test]
    fn test_label_blocks() {
        let input = lines(
            "- orphan bullet\nTitle\n- Values Compass\n\nPromise\n- one\n- two\nInstructions\n- rate",
        );
        let blocks = parse_label_blocks(&input);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].label, "Title");
        assert_eq!(blocks[0].bullets, vec!["Values Compass"]);
        assert_eq!(blocks[1].bullets, vec!["one", "two"]);
        assert_eq!(blocks[2].label, "Instructions");
        assert_eq!(blocks[2].bullets, vec!["rate"]);
    }

    #[test]
    fn test_label_without_bullets_is_kept() {
        let blocks = parse_label_blocks(&lines("Medium tension\n\nPlaybook\n- act"));
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].bullets.is_empty());
    }
}
