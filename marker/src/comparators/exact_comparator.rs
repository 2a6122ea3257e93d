//! A comparator for free-text answers.
//!
//! The `ExactComparator` awards correctness on an all-or-nothing basis after normalization,
//! so only case and whitespace differences are forgiven.

use crate::traits::comparator::AnswerComparator;
use crate::utilities::normalization::same_text;

/// Normalized string equality.
pub struct ExactComparator;

impl AnswerComparator for ExactComparator {
    fn is_correct(&self, user_answer: &str, correct_answer: &str, _options: &[&str]) -> bool {
        same_text(user_answer, correct_answer)
    }
}
