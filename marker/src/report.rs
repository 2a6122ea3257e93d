//! # Grade Report Module
//!
//! This module defines the serializable records the grading core hands back to its caller.
//! They carry the resolved option lists next to the numeric result so the orchestration
//! layer can log or display *why* an answer was graded the way it was.
//!
//! ## JSON Output Example
//!
//! ```json
//! {
//!   "respondent": "team-7",
//!   "timestamp": "2024-03-02T10:15:00Z",
//!   "questions": [
//!     {
//!       "questionId": "q1",
//!       "answer": "Fever,Rash",
//!       "result": { "isCorrect": false, "isPartial": false, "earnedPoints": 0 },
//!       "possible": 4,
//!       "resolvedAnswer": ["Fever", "Rash"],
//!       "resolvedCorrect": ["Fever", "Hypotension"],
//!       "feedback": "Missing: Hypotension; Unexpected: Rash"
//!     }
//!   ],
//!   "earned": 0,
//!   "possible": 4,
//!   "overallScore": 0
//! }
//! ```

use crate::types::GradingResult;
use serde::{Deserialize, Serialize};

/// The graded outcome of one answer, with the selections the resolver recognised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionReport {
    pub question_id: String,
    /// The raw answer as received.
    pub answer: String,
    pub result: GradingResult,
    /// The question's full point value.
    pub possible: u32,
    /// Options the resolver found in the answer.
    pub resolved_answer: Vec<String>,
    /// Options the resolver found in the correct-answer field.
    pub resolved_correct: Vec<String>,
    #[serde(default)]
    pub feedback: String,
}

/// All graded answers of one respondent's submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReport {
    pub respondent: String,
    pub timestamp: String,
    pub questions: Vec<QuestionReport>,
    pub earned: u32,
    pub possible: u32,
    /// `earned / possible` as a rounded percentage.
    pub overall_score: u32,
}
