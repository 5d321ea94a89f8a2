//! Section 4: Questions
//!
//! `12. I feel uneasy when plans change at the last minute.` opens question
//! 12. Non-numbered lines that follow are continuation text.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::compass::utils::lookup_tables::QUESTION_COUNT;
use crate::error::ErrorLog;

static QUESTION_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\.\s+(.*)$").unwrap());

/// Open question block plus the questions closed so far.
#[derive(Debug, Default)]
struct QuestionCollector {
    open: Option<(u32, Vec<String>)>,
    questions: BTreeMap<u32, String>,
    stray_lines: Vec<String>,
}

impl QuestionCollector {
    fn feed(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }
        if let Some(caps) = QUESTION_LINE_RE.captures(trimmed) {
            if let Ok(number) = caps[1].parse::<u32>() {
                self.flush();
                self.open = Some((number, vec![caps[2].trim().to_string()]));
                return;
            }
        }
        match self.open.as_mut() {
            Some((_, text)) => text.push(trimmed.to_string()),
            None => self.stray_lines.push(trimmed.to_string()),
        }
    }

    fn flush(&mut self) {
        if let Some((number, text)) = self.open.take() {
            self.questions.insert(number, text.join(" ").trim().to_string());
        }
    }

    fn finish(mut self) -> (BTreeMap<u32, String>, Vec<String>) {
        self.flush();
        (self.questions, self.stray_lines)
    }
}

pub fn parse(lines: &[String], errors: &mut ErrorLog, label: &str) -> BTreeMap<u32, String> {
    let mut collector = QuestionCollector::default();
    for line in lines {
        collector.feed(line);
    }
    let (mut questions, stray_lines) = collector.finish();

    for line in stray_lines {
        errors.push(format!("{} section 4 has text outside any question: {}", label, line));
    }

    let out_of_range: Vec<u32> = questions
        .keys()
        .copied()
        .filter(|number| !(1..=QUESTION_COUNT).contains(number))
        .collect();
    for number in out_of_range {
        errors.push(format!("{} has question number {} outside 1-{}", label, number, QUESTION_COUNT));
        questions.remove(&number);
    }

    if questions.len() != QUESTION_COUNT as usize {
        errors.push(format!(
            "{} expected {} questions, found {}",
            label,
            QUESTION_COUNT,
            questions.len()
        ));
    }
    for number in 1..=QUESTION_COUNT {
        if !questions.contains_key(&number) {
            errors.push(format!("{} missing question {}", label, number));
        }
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: u32) -> Vec<String> {
        (1..=count).map(|n| format!("{}. Prompt number {}.", n, n)).collect()
    }

    #[test]
    fn test_thirty_questions() {
        let mut errors = ErrorLog::new();
        let questions = parse(&numbered(30), &mut errors, "en");
        assert!(errors.is_empty(), "{:?}", errors);
        assert_eq!(questions.len(), 30);
        assert_eq!(questions[&30], "Prompt number 30.");
    }

    #[test]
    fn test_continuation_lines_are_joined() {
        let mut lines = numbered(30);
        lines.insert(1, "   which continues here".to_string());
        lines.insert(2, String::new());
        let mut errors = ErrorLog::new();
        let questions = parse(&lines, &mut errors, "en");
        assert!(errors.is_empty(), "{:?}", errors);
        assert_eq!(questions[&1], "Prompt number 1. which continues here");
    }

    #[test]
    fn test_missing_question_is_named() {
        let mut lines = numbered(30);
        lines.remove(6);
        let mut errors = ErrorLog::new();
        parse(&lines, &mut errors, "pt-BR (pt-BR.md)");
        assert!(errors.contains("pt-BR (pt-BR.md) expected 30 questions, found 29"));
        assert!(errors.contains("pt-BR (pt-BR.md) missing question 7"));
    }

    #[test]
    fn test_stray_text_and_out_of_range() {
        let mut lines = numbered(30);
        lines.insert(0, "Answer honestly.".to_string());
        lines.push("31. One too many.".to_string());
        let mut errors = ErrorLog::new();
        let questions = parse(&lines, &mut errors, "es");
        assert_eq!(questions.len(), 30);
        assert!(errors.contains("es section 4 has text outside any question: Answer honestly."));
        assert!(errors.contains("es has question number 31 outside 1-30"));
        assert_eq!(errors.len(), 2);
    }
}
