//! Section 9: Result Templates
//!
//! Two underlined subsections:
//! 1. Free preview: template lines plus a paywall hook (the bullets right
//!    after a line mentioning "paywall").
//! 2. Paid report: the first bullet is the report title, `1) ...` lines are
//!    the report sections in order.

use regex::Regex;
use std::sync::LazyLock;

use crate::compass::splitter::split_subsections;
use crate::compass::utils::blocks::{is_bullet, strip_bullet};
use crate::error::ErrorLog;

static REPORT_SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\)\s*(.+)$").unwrap());

/// Parsed result templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTemplates {
    pub preview_template: String,
    pub paywall_hook: String,
    pub paid_report_title: String,
    pub paid_report_sections: Vec<String>,
}

/// Remove the paywall marker line and the bullets under it.
///
/// Returns the hook text and the remaining lines. If several marker lines
/// exist, the last one's bullets win.
fn extract_paywall_hook(lines: &[String]) -> (String, Vec<String>) {
    let mut cleaned = Vec::new();
    let mut hook_lines: Vec<String> = Vec::new();

    let mut index = 0;
    while index < lines.len() {
        let trimmed = lines[index].trim();
        if !trimmed.to_lowercase().contains("paywall") {
            cleaned.push(lines[index].clone());
            index += 1;
            continue;
        }
        hook_lines.clear();
        index += 1;
        while index < lines.len() {
            let bullet = lines[index].trim();
            if bullet.is_empty() || !is_bullet(bullet) {
                break;
            }
            hook_lines.push(strip_bullet(bullet).to_string());
            index += 1;
        }
    }

    (hook_lines.join(" ").trim().to_string(), cleaned)
}

pub fn parse(lines: &[String], errors: &mut ErrorLog, label: &str) -> ResultTemplates {
    let subsections = split_subsections(lines);
    if subsections.len() < 2 {
        errors.push(format!(
            "{} section 9 must include free preview and paid report structure",
            label
        ));
        return ResultTemplates::default();
    }

    let (paywall_hook, preview_lines) = extract_paywall_hook(&subsections[0]);
    let preview_template = preview_lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();
    if preview_template.is_empty() {
        errors.push(format!("{} free preview template is empty", label));
    }
    if paywall_hook.is_empty() {
        errors.push(format!("{} paywall hook missing", label));
    }

    let mut paid_report_title = String::new();
    let mut paid_report_sections = Vec::new();
    for line in &subsections[1] {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if paid_report_title.is_empty() && trimmed.starts_with('-') {
            paid_report_title = strip_bullet(trimmed).to_string();
        }
        if let Some(caps) = REPORT_SECTION_RE.captures(trimmed) {
            paid_report_sections.push(caps[1].trim().to_string());
        }
    }
    if paid_report_title.is_empty() {
        errors.push(format!("{} paid report title missing", label));
    }
    if paid_report_sections.is_empty() {
        errors.push(format!("{} paid report sections missing", label));
    }

    ResultTemplates {
        preview_template,
        paywall_hook,
        paid_report_title,
        paid_report_sections,
    }
}
