//! A comparator for single-choice answers.
//!
//! Older quizzes store several acceptable answers for a single-choice question in one
//! comma-separated correct-answer field. The `AcceptListComparator` first tries a plain
//! normalized match and only then treats the field as such a list.

use crate::traits::comparator::AnswerComparator;
use crate::utilities::normalization::{normalize, same_text, split_naive};

/// Normalized equality, falling back to membership in a comma-separated accept list.
pub struct AcceptListComparator;

impl AnswerComparator for AcceptListComparator {
    fn is_correct(&self, user_answer: &str, correct_answer: &str, _options: &[&str]) -> bool {
        if same_text(user_answer, correct_answer) {
            return true;
        }
        if !correct_answer.contains(',') {
            return false;
        }
        let answer = normalize(user_answer);
        split_naive(correct_answer).iter().any(|accepted| *accepted == answer)
    }
}
