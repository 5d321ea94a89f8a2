//! Section Splitter
//!
//! Breaks one locale file into its numbered sections. A section heading is a
//! line like `4. Questions` directly followed by an underline (`---` or
//! `===`). Section 9 reuses the same heading rule, without the number, for its
//! two subsections.

use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

use crate::compass::utils::blocks::is_underline;
use crate::error::ErrorLog;

static SECTION_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\.\s+.+$").unwrap());

/// Section number -> body lines (heading and underline excluded).
pub type SectionMap = FxHashMap<u32, Vec<String>>;

/// Split `lines` into numbered sections.
///
/// Bodies run from the line after the underline to the next recognized
/// heading. Missing headings and duplicate numbers are logged; the first
/// occurrence of a duplicated number wins.
pub fn split_sections(lines: &[String], errors: &mut ErrorLog, label: &str) -> SectionMap {
    let mut sections = SectionMap::default();

    let headings: Vec<(u32, usize)> = lines
        .windows(2)
        .enumerate()
        .filter_map(|(index, pair)| {
            let number = SECTION_HEADER_RE
                .captures(&pair[0])
                .and_then(|caps| caps[1].parse::<u32>().ok())?;
            is_underline(&pair[1]).then_some((number, index))
        })
        .collect();

    if headings.is_empty() {
        errors.push(format!("{} has no numbered sections", label));
        return sections;
    }

    for (position, &(number, heading_index)) in headings.iter().enumerate() {
        if sections.contains_key(&number) {
            errors.push(format!("{} has duplicate section {}", label, number));
            continue;
        }
        let start = heading_index + 2;
        let end = headings
            .get(position + 1)
            .map(|&(_, next_index)| next_index)
            .unwrap_or(lines.len());
        sections.insert(number, lines[start..end.max(start)].to_vec());
    }

    tracing::debug!("{}: found {} sections", label, sections.len());
    sections
}

/// Split a section body on `heading + underline` pairs and return each
/// subsection's body lines.
///
/// Any non-blank line can be a heading here. Lines before the first heading
/// are dropped; the last subsection runs to the end of `lines`.
pub fn split_subsections(lines: &[String]) -> Vec<Vec<String>> {
    let is_heading = |index: usize| {
        index + 1 < lines.len() && !lines[index].trim().is_empty() && is_underline(&lines[index + 1])
    };

    let mut subsections = Vec::new();
    let mut index = 0;
    while index < lines.len() {
        if !is_heading(index) {
            index += 1;
            continue;
        }
        let start = index + 2;
        let end = (start..lines.len())
            .find(|&candidate| is_heading(candidate))
            .unwrap_or(lines.len());
        subsections.push(lines[start.min(end)..end].to_vec());
        index = end;
    }
    subsections
}
