/// AnswerComparator is a strategy trait for deciding whether an answer is correct.
/// Each implementation covers one question type; [`crate::comparators::comparator_for`]
/// picks the right one.
pub trait AnswerComparator: Send + Sync {
    /// Decide whether `user_answer` satisfies `correct_answer`.
    ///
    /// - `user_answer`: the raw answer as captured by the form backend.
    /// - `correct_answer`: the raw correct-answer field of the question.
    /// - `options`: the question's present option texts (may be empty).
    ///
    /// Implementations never fail; anything they cannot make sense of is incorrect.
    fn is_correct(&self, user_answer: &str, correct_answer: &str, options: &[&str]) -> bool;
}
