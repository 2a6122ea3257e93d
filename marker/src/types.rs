//! # Types Module
//!
//! This module defines the core data structures used throughout the grading core:
//! question definitions, submitted answers and grading outcomes. All of them are
//! transient values built per grading call from data the orchestration layer supplies.

use crate::error::MarkerError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of option slots a question may carry.
pub const MAX_OPTIONS: usize = 6;

/// The kind of question, which decides how answers are compared.
///
/// Form backends describe question kinds with display labels ("Multiple Choice",
/// "Checkboxes", ...). Parsing a label is total: anything unrecognised is graded as
/// [`QuestionType::FreeText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    /// Exactly one option is chosen. The correct-answer field may list several
    /// acceptable strings separated by commas.
    SingleChoice,
    /// Any number of options are chosen and joined with commas by the form backend.
    MultiSelect,
    /// Anything typed by the respondent.
    #[default]
    FreeText,
}

impl QuestionType {
    /// The canonical display label for this type.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::SingleChoice => "Multiple Choice",
            QuestionType::MultiSelect => "Multiple Select",
            QuestionType::FreeText => "Free Text",
        }
    }
}

impl From<&str> for QuestionType {
    fn from(label: &str) -> Self {
        let key: String = label
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "multiplechoice" | "singlechoice" | "choice" | "radio" | "dropdown" => {
                QuestionType::SingleChoice
            }
            "multipleselect" | "multiselect" | "checkbox" | "checkboxes" | "selectall" => {
                QuestionType::MultiSelect
            }
            _ => QuestionType::FreeText,
        }
    }
}

impl From<String> for QuestionType {
    fn from(label: String) -> Self {
        QuestionType::from(label.as_str())
    }
}

impl From<QuestionType> for String {
    fn from(question_type: QuestionType) -> Self {
        question_type.label().to_string()
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single quiz question as defined by the quiz author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique token identifying the question within a quiz.
    pub id: String,
    /// How answers to this question are compared.
    #[serde(rename = "type", default)]
    pub question_type: QuestionType,
    /// Option texts in display order. Slots may be empty.
    #[serde(default)]
    pub options: Vec<Option<String>>,
    /// The correct answer. For multi-select questions this is a comma-joined list of option texts.
    #[serde(default)]
    pub correct_answer: String,
    /// Points awarded for a fully correct answer.
    pub points: u32,
    /// Optional author explanation shown as feedback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    /// Option texts that are present and not blank, in display order.
    pub fn present_options(&self) -> Vec<&str> {
        self.options
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|o| !o.trim().is_empty())
            .collect()
    }

    /// Checks the structural rules every question must satisfy before grading.
    ///
    /// # Errors
    ///
    /// Returns [`MarkerError::InvalidQuestion`] for an empty id, zero points or more than
    /// [`MAX_OPTIONS`] option slots.
    pub fn validate(&self) -> Result<(), MarkerError> {
        if self.id.trim().is_empty() {
            return Err(MarkerError::InvalidQuestion(
                "question id must not be empty".to_string(),
            ));
        }
        if self.points == 0 {
            return Err(MarkerError::InvalidQuestion(format!(
                "question '{}' must be worth at least one point",
                self.id
            )));
        }
        if self.options.len() > MAX_OPTIONS {
            return Err(MarkerError::InvalidQuestion(format!(
                "question '{}' has {} options (max {})",
                self.id,
                self.options.len(),
                MAX_OPTIONS
            )));
        }
        Ok(())
    }
}

/// One respondent's raw answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub question_id: String,
    pub answer: String,
}

/// The outcome of grading one answer.
///
/// Invariant: `earned_points` never exceeds the question's point value, and
/// `is_partial` is only set for multi-select answers worth strictly between zero and
/// full marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingResult {
    pub is_correct: bool,
    pub is_partial: bool,
    pub earned_points: u32,
}

impl GradingResult {
    /// A wrong (or missing) answer.
    pub fn zero() -> Self {
        Self::default()
    }

    /// A fully correct answer worth `points`.
    pub fn full(points: u32) -> Self {
        Self {
            is_correct: true,
            is_partial: false,
            earned_points: points,
        }
    }

    /// A multi-select award that is not fully correct.
    pub fn partial(earned: u32, points: u32) -> Self {
        let earned = earned.min(points);
        Self {
            is_correct: false,
            is_partial: earned > 0 && earned < points,
            earned_points: earned,
        }
    }
}
