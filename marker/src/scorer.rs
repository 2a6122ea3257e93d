//! # Scorer Module
//!
//! This module awards points. [`compute_partial_credit`] implements the multi-select partial
//! credit rule, [`grade_answer`] turns one answer into a [`GradingResult`] and
//! [`compute_overall_score`] aggregates a whole submission into a percentage.

use crate::comparators::is_answer_correct;
use crate::report::QuestionReport;
use crate::resolver::resolve_pair;
use crate::types::{GradingResult, Question, QuestionType};
use crate::utilities::normalization::overlaps;

/// How a resolved multi-select answer relates to the resolved correct selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionScore {
    /// Selected items that match a correct item.
    pub matched: Vec<String>,
    /// Selected items that match no correct item.
    pub unexpected: Vec<String>,
    /// Correct items that no selected item matches.
    pub missed: Vec<String>,
    /// Points earned under the partial credit rule.
    pub earned: u32,
}

/// Scores resolved selections against resolved correct items.
///
/// Each matching selection earns `total_points / correct_items.len()`; each non-matching
/// selection deducts the same share. The result is rounded half up, floored at zero and
/// capped at `total_points`. A selection matches a correct item when either normalized text
/// contains the other.
pub fn score_selection(
    user_items: &[String],
    correct_items: &[String],
    total_points: u32,
) -> SelectionScore {
    if correct_items.is_empty() {
        return SelectionScore {
            unexpected: user_items.to_vec(),
            ..SelectionScore::default()
        };
    }

    let (matched, unexpected): (Vec<String>, Vec<String>) = user_items
        .iter()
        .cloned()
        .partition(|item| correct_items.iter().any(|c| overlaps(item, c)));

    let missed = correct_items
        .iter()
        .filter(|c| !user_items.iter().any(|item| overlaps(item, c)))
        .cloned()
        .collect();

    let points_per_item = f64::from(total_points) / correct_items.len() as f64;
    let raw = matched.len() as f64 * points_per_item - unexpected.len() as f64 * points_per_item;
    let earned = (raw.max(0.0).round() as u32).min(total_points);

    SelectionScore {
        matched,
        unexpected,
        missed,
        earned,
    }
}

/// Computes the partial credit award for a multi-select answer.
///
/// Returns `0` for any other question type, and `0` when the correct answer resolves to no
/// items at all (callers should report that as a data-integrity problem).
///
/// ```
/// use quiz_marker::scorer::compute_partial_credit;
/// use quiz_marker::types::QuestionType;
///
/// let options = ["Fever", "Tachycardia", "Hypotension", "Bradycardia"];
/// let earned = compute_partial_credit(
///     "Fever, Tachycardia, Bradycardia",
///     "Fever, Tachycardia, Hypotension",
///     QuestionType::MultiSelect,
///     6,
///     &options,
/// );
/// assert_eq!(earned, 2);
/// ```
pub fn compute_partial_credit<S: AsRef<str>>(
    user_answer: &str,
    correct_answer: &str,
    question_type: QuestionType,
    total_points: u32,
    options: &[S],
) -> u32 {
    if question_type != QuestionType::MultiSelect {
        return 0;
    }
    let (user_items, correct_items) = resolve_pair(user_answer, correct_answer, options);
    score_selection(&user_items, &correct_items, total_points).earned
}

/// Grades one raw answer against a question.
///
/// A correct answer earns the full point value. A wrong multi-select answer may still earn
/// partial credit. Anything else earns nothing.
pub fn grade_answer(question: &Question, answer: &str) -> GradingResult {
    let options = question.present_options();

    if is_answer_correct(
        answer,
        &question.correct_answer,
        question.question_type,
        &options,
    ) {
        return GradingResult::full(question.points);
    }

    if question.question_type == QuestionType::MultiSelect {
        let earned = compute_partial_credit(
            answer,
            &question.correct_answer,
            question.question_type,
            question.points,
            &options,
        );
        return GradingResult::partial(earned, question.points);
    }

    GradingResult::zero()
}

/// Computes the overall score as a percentage from a slice of [`QuestionReport`]s.
///
/// Returns `0` when nothing was possible. The result is rounded to the nearest integer.
pub fn compute_overall_score(reports: &[QuestionReport]) -> u32 {
    let possible: u32 = reports.iter().map(|r| r.possible).sum();
    if possible == 0 {
        return 0;
    }
    let earned: u32 = reports.iter().map(|r| r.result.earned_points).sum();
    (f64::from(earned) / f64::from(possible) * 100.0).round() as u32
}
