//! # Quiz Marker Library
//!
//! This crate is the answer-grading core of the quiz competition tooling. It decides whether
//! a respondent's answer is correct and how many points it earns, including partial credit for
//! multi-select questions whose option texts may themselves contain commas.
//!
//! The core is pure: it performs no I/O, holds no state and never fails on malformed input.
//! Missing answers, missing option catalogs and unparseable selections degrade to `false`,
//! `0` or empty lists, and the caller decides what to log.
//!
//! ## Key Concepts
//! - **Normalization**: every comparison is case and whitespace insensitive.
//! - **Option Tokenizer**: longest-match-first detection of known options in comma-joined text.
//! - **Comparators**: per-question-type correctness strategies.
//! - **Scorer**: partial credit that rewards precision as well as recall.
//! - **GradingJob**: grades a respondent's whole submission into a [`SubmissionReport`].
//!
//! ## Example
//!
//! ```
//! use quiz_marker::{is_answer_correct, compute_partial_credit, QuestionType};
//!
//! let options = ["Cold, pale skin", "Warm, flushed skin", "Cyanosis"];
//! assert!(is_answer_correct(
//!     "Warm, flushed skin,Cold, pale skin",
//!     "Cold, pale skin,Warm, flushed skin",
//!     QuestionType::MultiSelect,
//!     &options,
//! ));
//! assert_eq!(
//!     compute_partial_credit("Cold, pale skin", "Cold, pale skin,Warm, flushed skin", QuestionType::MultiSelect, 4, &options),
//!     2
//! );
//! ```

pub mod comparators;
pub mod error;
pub mod feedback;
pub mod report;
pub mod resolver;
pub mod scorer;
pub mod tokenizer;
pub mod traits;
pub mod types;
pub mod utilities;

pub use comparators::is_answer_correct;
pub use report::{QuestionReport, SubmissionReport};
pub use resolver::resolve_multi_select;
pub use scorer::{compute_partial_credit, grade_answer};
pub use types::{GradingResult, Question, QuestionType, SubmittedAnswer};
pub use utilities::normalization::normalize;

use crate::feedback::auto_feedback::AutoFeedback;
use crate::resolver::resolve_pair;
use crate::traits::feedback::Feedback;
use std::collections::BTreeMap;
use tracing::debug;

/// Grades submissions against one quiz.
///
/// # Fields
/// - `questions`: the quiz, in display order.
/// - `feedback`: strategy that fills in each [`QuestionReport::feedback`].
pub struct GradingJob<'a> {
    questions: &'a [Question],
    feedback: Box<dyn Feedback + 'a>,
}

impl<'a> GradingJob<'a> {
    /// Create a grading job with automatic feedback.
    pub fn new(questions: &'a [Question]) -> Self {
        Self {
            questions,
            feedback: Box::new(AutoFeedback),
        }
    }

    /// Set a custom feedback strategy for this grading job.
    pub fn with_feedback<F: Feedback + 'a>(mut self, feedback: F) -> Self {
        self.feedback = Box::new(feedback);
        self
    }

    pub fn questions(&self) -> &'a [Question] {
        self.questions
    }

    /// Grades one answer to one question, including feedback.
    pub fn grade_question(&self, question: &Question, answer: &str) -> QuestionReport {
        let result = grade_answer(question, answer);

        let (resolved_answer, resolved_correct) = match question.question_type {
            QuestionType::MultiSelect => {
                resolve_pair(answer, &question.correct_answer, &question.present_options())
            }
            _ => (non_blank(answer), non_blank(&question.correct_answer)),
        };

        debug!(
            "Graded '{}': {:?} selected, {:?} expected, {} of {} points",
            question.id, resolved_answer, resolved_correct, result.earned_points, question.points
        );

        let mut report = QuestionReport {
            question_id: question.id.clone(),
            answer: answer.to_string(),
            result,
            possible: question.points,
            resolved_answer,
            resolved_correct,
            feedback: String::new(),
        };

        let message = self
            .feedback
            .assemble_feedback(&[(question, &report)])
            .into_iter()
            .next()
            .map(|entry| entry.message);
        if let Some(message) = message {
            report.feedback = message;
        }
        report
    }

    /// Grades every question of the quiz for one respondent.
    ///
    /// `answers` maps question ids to raw answers. Unanswered questions are graded as empty
    /// answers and earn nothing.
    pub fn mark(
        &self,
        respondent: &str,
        timestamp: &str,
        answers: &BTreeMap<String, String>,
    ) -> SubmissionReport {
        let reports: Vec<QuestionReport> = self
            .questions
            .iter()
            .map(|q| {
                let answer = answers.get(&q.id).map(String::as_str).unwrap_or_default();
                self.grade_question(q, answer)
            })
            .collect();

        let earned = reports.iter().map(|r| r.result.earned_points).sum();
        let possible = reports.iter().map(|r| r.possible).sum();
        let overall_score = scorer::compute_overall_score(&reports);

        SubmissionReport {
            respondent: respondent.to_string(),
            timestamp: timestamp.to_string(),
            questions: reports,
            earned,
            possible,
            overall_score,
        }
    }
}

fn non_blank(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Vec::new()
    } else {
        vec![trimmed.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::manual_feedback::ManualFeedback;

    fn quiz() -> Vec<Question> {
        vec![
            Question {
                id: "shock".to_string(),
                question_type: QuestionType::MultiSelect,
                options: vec![
                    Some("Cold, pale skin".into()),
                    Some("Warm, flushed skin".into()),
                    Some("Rapid, weak pulse".into()),
                    None,
                ],
                correct_answer: "Cold, pale skin,Rapid, weak pulse".to_string(),
                points: 4,
                explanation: Some("Hypovolemic shock causes vasoconstriction.".into()),
            },
            Question {
                id: "diuretic".to_string(),
                question_type: QuestionType::SingleChoice,
                options: vec![Some("Furosemide".into()), Some("Digoxin".into())],
                correct_answer: "Furosemide".to_string(),
                points: 2,
                explanation: None,
            },
            Question {
                id: "organ".to_string(),
                question_type: QuestionType::FreeText,
                options: vec![],
                correct_answer: "Kidney".to_string(),
                points: 1,
                explanation: None,
            },
        ]
    }

    fn answers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_mark_full_submission() {
        let questions = quiz();
        let job = GradingJob::new(&questions);
        let report = job.mark(
            "team-1",
            "2024-03-02T10:15:00Z",
            &answers(&[
                ("shock", "Rapid, weak pulse,Cold, pale skin"),
                ("diuretic", "furosemide"),
                ("organ", " kidney "),
            ]),
        );

        assert_eq!(report.earned, 7);
        assert_eq!(report.possible, 7);
        assert_eq!(report.overall_score, 100);
        assert!(report.questions.iter().all(|q| q.result.is_correct));
        assert!(report.questions.iter().all(|q| q.feedback == "Correct"));
    }

    #[test]
    fn test_mark_partial_and_missing() {
        let questions = quiz();
        let job = GradingJob::new(&questions);
        let report = job.mark(
            "team-2",
            "2024-03-02T10:16:00Z",
            &answers(&[("shock", "Cold, pale skin"), ("diuretic", "Digoxin")]),
        );

        let shock = &report.questions[0];
        assert!(shock.result.is_partial);
        assert_eq!(shock.result.earned_points, 2);
        assert_eq!(shock.resolved_answer, vec!["Cold, pale skin"]);
        assert_eq!(shock.resolved_correct.len(), 2);
        assert_eq!(shock.feedback, "Missing: Rapid, weak pulse");

        assert_eq!(report.questions[1].feedback, "Expected: Furosemide");
        assert_eq!(report.questions[2].feedback, "No answer");
        assert_eq!(report.questions[2].answer, "");

        assert_eq!(report.earned, 2);
        assert_eq!(report.overall_score, 29);
    }

    #[test]
    fn test_custom_feedback_strategy() {
        let questions = quiz();
        let job = GradingJob::new(&questions).with_feedback(ManualFeedback);
        let report = job.mark("team-3", "t", &answers(&[("shock", "Warm, flushed skin")]));
        assert_eq!(
            report.questions[0].feedback,
            "Hypovolemic shock causes vasoconstriction."
        );
        assert_eq!(report.questions[1].feedback, "Score: 0/2");
    }

    #[test]
    fn test_wrong_answer_with_overlapping_selections_gets_feedback() {
        let questions = vec![Question {
            id: "sepsis".to_string(),
            question_type: QuestionType::MultiSelect,
            options: vec![Some("Sepsis".into()), Some("Severe sepsis".into())],
            correct_answer: "Severe sepsis".to_string(),
            points: 4,
            explanation: None,
        }];
        let job = GradingJob::new(&questions);
        let report = job.grade_question(&questions[0], "Sepsis, Severe sepsis");

        assert!(!report.result.is_correct);
        assert_eq!(report.resolved_answer, vec!["Severe sepsis", "Sepsis"]);
        assert_eq!(report.resolved_correct, vec!["Severe sepsis"]);
        assert_eq!(report.feedback, "Expected: Severe sepsis");
    }

    #[test]
    fn test_grade_question_is_repeatable() {
        let questions = quiz();
        let job = GradingJob::new(&questions);
        let first = job.grade_question(&questions[0], "Cold, pale skin,Warm, flushed skin");
        let second = job.grade_question(&questions[0], "Cold, pale skin,Warm, flushed skin");
        assert_eq!(first, second);
        assert_eq!(first.result.earned_points, 0);
    }
}
