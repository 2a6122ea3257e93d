//! # AutoFeedback Strategy
//!
//! Generates template-based feedback for each graded question.
//!
//! - Fully correct answers get `"Correct"`.
//! - Missing answers get `"No answer"`.
//! - Multi-select answers list the correct options that were missed and the selections that
//!   matched nothing, e.g. `"Missing: Hypotension; Unexpected: Rash"`.
//! - Other wrong answers state the expected answer.

use crate::report::QuestionReport;
use crate::scorer::score_selection;
use crate::traits::feedback::{Feedback, FeedbackEntry};
use crate::types::{Question, QuestionType};

/// Automatic feedback strategy: derives a message from the graded report alone.
#[derive(Debug)]
pub struct AutoFeedback;

impl AutoFeedback {
    fn message(question: &Question, report: &QuestionReport) -> String {
        if report.result.is_correct {
            return "Correct".to_string();
        }
        if report.answer.trim().is_empty() {
            return "No answer".to_string();
        }

        match question.question_type {
            QuestionType::MultiSelect => {
                let score = score_selection(
                    &report.resolved_answer,
                    &report.resolved_correct,
                    report.possible,
                );
                let mut parts = Vec::new();
                if !score.missed.is_empty() {
                    parts.push(format!("Missing: {}", score.missed.join(", ")));
                }
                if !score.unexpected.is_empty() {
                    parts.push(format!("Unexpected: {}", score.unexpected.join(", ")));
                }
                if parts.is_empty() {
                    // Every selection overlaps a correct option, yet the sets differ.
                    return format!("Expected: {}", report.resolved_correct.join(", "));
                }
                parts.join("; ")
            }
            _ => format!("Expected: {}", question.correct_answer.trim()),
        }
    }
}

impl Feedback for AutoFeedback {
    fn assemble_feedback(&self, graded: &[(&Question, &QuestionReport)]) -> Vec<FeedbackEntry> {
        graded
            .iter()
            .map(|(question, report)| FeedbackEntry {
                question_id: report.question_id.clone(),
                message: Self::message(question, report),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GradingResult;

    fn make_question(question_type: QuestionType, correct: &str) -> Question {
        Question {
            id: "q".to_string(),
            question_type,
            options: vec![],
            correct_answer: correct.to_string(),
            points: 4,
            explanation: None,
        }
    }

    fn make_report(answer: &str, result: GradingResult, user: &[&str], correct: &[&str]) -> QuestionReport {
        QuestionReport {
            question_id: "q".to_string(),
            answer: answer.to_string(),
            result,
            possible: 4,
            resolved_answer: user.iter().map(|s| s.to_string()).collect(),
            resolved_correct: correct.iter().map(|s| s.to_string()).collect(),
            feedback: String::new(),
        }
    }

    #[test]
    fn test_correct_answer() {
        let q = make_question(QuestionType::FreeText, "Paris");
        let r = make_report("paris", GradingResult::full(4), &["paris"], &["Paris"]);
        let feedback = AutoFeedback.assemble_feedback(&[(&q, &r)]);
        assert_eq!(
            feedback,
            vec![FeedbackEntry {
                question_id: "q".to_string(),
                message: "Correct".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_and_unexpected_selections() {
        let q = make_question(QuestionType::MultiSelect, "Fever, Hypotension");
        let r = make_report(
            "Fever,Rash",
            GradingResult::zero(),
            &["Fever", "Rash"],
            &["Fever", "Hypotension"],
        );
        let feedback = AutoFeedback.assemble_feedback(&[(&q, &r)]);
        assert_eq!(feedback[0].message, "Missing: Hypotension; Unexpected: Rash");
    }

    #[test]
    fn test_only_missing_selections() {
        let q = make_question(QuestionType::MultiSelect, "Fever, Hypotension");
        let r = make_report(
            "Fever",
            GradingResult::partial(2, 4),
            &["Fever"],
            &["Fever", "Hypotension"],
        );
        let feedback = AutoFeedback.assemble_feedback(&[(&q, &r)]);
        assert_eq!(feedback[0].message, "Missing: Hypotension");
    }

    #[test]
    fn test_overlapping_selections_fall_back_to_expected() {
        let q = make_question(QuestionType::MultiSelect, "Severe sepsis");
        let r = make_report(
            "Sepsis, Severe sepsis",
            GradingResult::partial(4, 4),
            &["Severe sepsis", "Sepsis"],
            &["Severe sepsis"],
        );
        let feedback = AutoFeedback.assemble_feedback(&[(&q, &r)]);
        assert_eq!(feedback[0].message, "Expected: Severe sepsis");
    }

    #[test]
    fn test_scalar_wrong_answer_and_empty_answer() {
        let q = make_question(QuestionType::SingleChoice, "Furosemide ");
        let wrong = make_report("Digoxin", GradingResult::zero(), &["Digoxin"], &["Furosemide"]);
        let empty = make_report("  ", GradingResult::zero(), &[], &["Furosemide"]);
        let feedback = AutoFeedback.assemble_feedback(&[(&q, &wrong), (&q, &empty)]);
        assert_eq!(feedback[0].message, "Expected: Furosemide");
        assert_eq!(feedback[1].message, "No answer");
    }
}
