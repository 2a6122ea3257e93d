//!
//! # Feedback Trait
//!
//! This module defines the [`Feedback`] trait and the [`FeedbackEntry`] struct, which are used to
//! implement pluggable feedback strategies for graded answers (generated from the resolved
//! selections, or taken from the quiz author's explanation).
//!

use crate::report::QuestionReport;
use crate::types::Question;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackEntry {
    pub question_id: String,
    pub message: String,
}

/// A trait for pluggable feedback strategies.
///
/// # Arguments
/// - `graded`: each question paired with its graded report, in quiz order.
///
/// # Returns
/// One [`FeedbackEntry`] per input pair, in the same order.
pub trait Feedback: Send + Sync {
    fn assemble_feedback(&self, graded: &[(&Question, &QuestionReport)]) -> Vec<FeedbackEntry>;
}
