//! Manual feedback strategy: shows the quiz author's explanation.
//!
//! Questions that were not fully correct get the explanation stored on the question. Without
//! an explanation the message falls back to the points earned.

use crate::report::QuestionReport;
use crate::traits::feedback::{Feedback, FeedbackEntry};
use crate::types::Question;

pub struct ManualFeedback;

impl Feedback for ManualFeedback {
    fn assemble_feedback(&self, graded: &[(&Question, &QuestionReport)]) -> Vec<FeedbackEntry> {
        graded
            .iter()
            .map(|(question, report)| {
                let message = if report.result.is_correct {
                    "Correct".to_string()
                } else if let Some(explanation) = question
                    .explanation
                    .as_deref()
                    .filter(|e| !e.trim().is_empty())
                {
                    explanation.trim().to_string()
                } else {
                    format!(
                        "Score: {}/{}",
                        report.result.earned_points, report.possible
                    )
                };

                FeedbackEntry {
                    question_id: report.question_id.clone(),
                    message,
                }
            })
            .collect()
    }
}
