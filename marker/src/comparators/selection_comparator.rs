//! A comparator for multi-select answers.
//!
//! The `SelectionComparator` resolves both the respondent's answer and the correct-answer
//! list against the question's option catalog and compares the two selections as sets.
//! Order never matters; every selected option must be correct and every correct option
//! must be selected. Two selections that both resolve to nothing are never equal.

use crate::resolver::resolve_pair;
use crate::traits::comparator::AnswerComparator;
use crate::utilities::normalization::same_text;
use tracing::debug;

/// Set equality over resolved selections.
pub struct SelectionComparator;

impl AnswerComparator for SelectionComparator {
    fn is_correct(&self, user_answer: &str, correct_answer: &str, options: &[&str]) -> bool {
        let (user_items, correct_items) = resolve_pair(user_answer, correct_answer, options);

        if user_items.is_empty() || correct_items.is_empty() {
            return false;
        }
        if user_items.len() != correct_items.len() {
            debug!(
                "Selection size mismatch: {} selected, {} expected",
                user_items.len(),
                correct_items.len()
            );
            return false;
        }

        let covers = |from: &[String], into: &[String]| {
            from.iter().all(|a| into.iter().any(|b| same_text(a, b)))
        };
        covers(&user_items, &correct_items) && covers(&correct_items, &user_items)
    }
}
