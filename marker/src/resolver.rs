//! Multi-select resolution.
//!
//! Thin wrapper over [`OptionTokenizer`]: the same call resolves both a respondent's answer
//! and the quiz author's correct-answer list, always against the same option catalog.

use crate::tokenizer::OptionTokenizer;

/// Resolves a comma-joined answer into the set of options it selects.
///
/// The result has set semantics (no two entries share a normalized form); its order is
/// detection order and carries no meaning.
///
/// ```
/// use quiz_marker::resolver::resolve_multi_select;
///
/// let options = ["Cold, pale skin", "Warm, flushed skin"];
/// let mut resolved = resolve_multi_select("Cold, pale skin,Warm, flushed skin", &options);
/// resolved.sort();
/// assert_eq!(resolved, vec!["Cold, pale skin", "Warm, flushed skin"]);
/// ```
pub fn resolve_multi_select<S: AsRef<str>>(answer: &str, options: &[S]) -> Vec<String> {
    OptionTokenizer::new(options).scan(answer)
}

/// Resolves the respondent answer and the correct-answer list with one tokenizer.
///
/// Returns `(user_items, correct_items)`.
pub fn resolve_pair<S: AsRef<str>>(
    user_answer: &str,
    correct_answer: &str,
    options: &[S],
) -> (Vec<String>, Vec<String>) {
    let tokenizer = OptionTokenizer::new(options);
    (tokenizer.scan(user_answer), tokenizer.scan(correct_answer))
}
