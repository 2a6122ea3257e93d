//! # Comparators
//!
//! This module is the correctness evaluator of the grading core. Each comparator implements
//! the [`AnswerComparator`] trait for one question type, which keeps the per-type rules
//! interchangeable and individually testable.
//!
//! The available comparators are:
//! - [`exact_comparator`]: normalized equality, used for free text.
//! - [`accept_list_comparator`]: normalized equality or membership in a legacy comma-separated
//!   accept list, used for single choice.
//! - [`selection_comparator`]: set equality over resolved option selections, used for multi-select.

pub mod accept_list_comparator;
pub mod exact_comparator;
pub mod selection_comparator;

use crate::traits::comparator::AnswerComparator;
use crate::types::QuestionType;
use accept_list_comparator::AcceptListComparator;
use exact_comparator::ExactComparator;
use selection_comparator::SelectionComparator;

/// Returns the comparator responsible for `question_type`.
pub fn comparator_for(question_type: QuestionType) -> &'static dyn AnswerComparator {
    match question_type {
        QuestionType::SingleChoice => &AcceptListComparator,
        QuestionType::MultiSelect => &SelectionComparator,
        QuestionType::FreeText => &ExactComparator,
    }
}

/// Decides whether `user_answer` is correct for a question of `question_type`.
///
/// Empty or blank answers (on either side) are never correct. This function never panics
/// and never fails.
///
/// ```
/// use quiz_marker::comparators::is_answer_correct;
/// use quiz_marker::types::QuestionType;
///
/// let options = ["A", "B", "C"];
/// assert!(is_answer_correct("A,B", "B,A", QuestionType::MultiSelect, &options));
/// assert!(!is_answer_correct("A,B,C", "A,B", QuestionType::MultiSelect, &options));
/// ```
pub fn is_answer_correct<S: AsRef<str>>(
    user_answer: &str,
    correct_answer: &str,
    question_type: QuestionType,
    options: &[S],
) -> bool {
    if user_answer.trim().is_empty() || correct_answer.trim().is_empty() {
        return false;
    }
    let options: Vec<&str> = options.iter().map(AsRef::as_ref).collect();
    comparator_for(question_type).is_correct(user_answer, correct_answer, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_OPTIONS: [&str; 0] = [];

    #[test]
    fn test_symmetric_multi_select() {
        let options = ["A", "B", "C"];
        assert!(is_answer_correct(
            "A,B",
            "B,A",
            QuestionType::from("Multiple Select"),
            &options
        ));
    }

    #[test]
    fn test_size_mismatch_short_circuits() {
        let options = ["A", "B", "C"];
        assert!(!is_answer_correct(
            "A,B,C",
            "A,B",
            QuestionType::from("Multiple Select"),
            &options
        ));
    }

    #[test]
    fn test_single_choice_case_and_whitespace() {
        assert!(is_answer_correct(
            "Furosemide",
            "furosemide ",
            QuestionType::from("Multiple Choice"),
            &NO_OPTIONS
        ));
    }

    #[test]
    fn test_unknown_type_grades_as_free_text() {
        let question_type = QuestionType::from("Scale");
        assert_eq!(question_type, QuestionType::FreeText);
        assert!(is_answer_correct("42", " 42", question_type, &NO_OPTIONS));
        // Free text does not read the correct answer as an accept list.
        assert!(!is_answer_correct("42", "41, 42", question_type, &NO_OPTIONS));
    }

    #[test]
    fn test_empty_inputs_are_never_correct() {
        for question_type in [
            QuestionType::SingleChoice,
            QuestionType::MultiSelect,
            QuestionType::FreeText,
        ] {
            assert!(!is_answer_correct("", "A", question_type, &["A"]));
            assert!(!is_answer_correct("A", "  ", question_type, &["A"]));
            assert!(!is_answer_correct("", "", question_type, &NO_OPTIONS));
        }
    }
}
