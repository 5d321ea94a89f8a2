//! Section 1: Intro
//!
//! The intro paragraph is the first run of non-bullet text lines.

use crate::compass::utils::blocks::first_paragraph;
use crate::error::ErrorLog;

pub fn parse(lines: &[String], errors: &mut ErrorLog, label: &str) -> String {
    let intro = first_paragraph(lines);
    if intro.is_empty() {
        errors.push(format!("{} section 1 intro missing", label));
    }
    intro
}
