//! Section 10: Paywall Copy
//!
//! Three label blocks in fixed order: CTA, selling bullets, short line.

use crate::compass::types::PaywallCopy;
use crate::compass::utils::blocks::{join_words, non_blank, parse_label_blocks};
use crate::error::ErrorLog;

pub fn parse(lines: &[String], errors: &mut ErrorLog, label: &str) -> PaywallCopy {
    let blocks = parse_label_blocks(lines);
    if blocks.len() < 3 {
        errors.push(format!(
            "{} section 10 must include CTA, bullets, and short line",
            label
        ));
        return PaywallCopy::default();
    }

    let copy = PaywallCopy {
        cta: join_words(&blocks[0].bullets),
        bullets: non_blank(&blocks[1].bullets),
        short_line: join_words(&blocks[2].bullets),
    };
    if copy.cta.is_empty() {
        errors.push(format!("{} paywall CTA missing", label));
    }
    if copy.bullets.is_empty() {
        errors.push(format!("{} paywall bullets missing", label));
    }
    if copy.short_line.is_empty() {
        errors.push(format!("{} paywall short line missing", label));
    }
    copy
}
