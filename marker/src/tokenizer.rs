//! # Option Tokenizer
//!
//! Multi-select answers reach the grading core as a single string: the form backend joins
//! every chosen option with commas. Option text may itself contain commas ("Cold, pale
//! skin"), so splitting on commas is ambiguous. The [`OptionTokenizer`] undoes the
//! ambiguity using the question's known option catalog.
//!
//! ## Algorithm
//!
//! 1. Options are normalized and scanned **longest first**, so a short option never
//!    matches inside the text of a longer option that contains it.
//! 2. Each option is searched for in a mutable buffer holding the normalized answer. A
//!    match must sit on a boundary: buffer start/end, a comma or whitespace on each side.
//! 3. A matched span is replaced with a single comma, which keeps delimiter continuity so
//!    that two neighbours cannot fuse into a new false match.
//! 4. Options with more than two words that fail the substring search may still match
//!    word by word, which absorbs minor punctuation drift.
//! 5. Whatever is left over is kept as extra "other" selections when a fragment is longer
//!    than three characters; shorter debris is dropped.
//!
//! Without any option catalog the tokenizer falls back to naive comma splitting.

use crate::utilities::normalization::normalize;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::ops::Range;
use tracing::debug;

/// Runs of characters that are neither whitespace nor commas.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\s,]+").expect("word pattern is valid"));

/// Tunables for the fallback heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerSettings {
    /// Leftover fragments must be longer than this many characters to be kept.
    pub min_fragment_chars: usize,
    /// Options need more than this many words to qualify for word-overlap matching.
    pub min_overlap_words: usize,
}

impl Default for TokenizerSettings {
    fn default() -> Self {
        Self {
            min_fragment_chars: 3,
            min_overlap_words: 2,
        }
    }
}

#[derive(Debug, Clone)]
struct CatalogOption {
    original: String,
    normalized: String,
    words: Vec<String>,
}

/// Identifies which known options are present in a comma-joined answer string.
#[derive(Debug, Clone)]
pub struct OptionTokenizer {
    options: Vec<CatalogOption>,
    settings: TokenizerSettings,
}

impl OptionTokenizer {
    /// Builds a tokenizer for `options` with the default settings.
    ///
    /// Blank options are discarded.
    pub fn new<S: AsRef<str>>(options: &[S]) -> Self {
        Self::with_settings(options, TokenizerSettings::default())
    }

    pub fn with_settings<S: AsRef<str>>(options: &[S], settings: TokenizerSettings) -> Self {
        let mut catalog: Vec<CatalogOption> = options
            .iter()
            .map(AsRef::as_ref)
            .filter(|o| !o.trim().is_empty())
            .map(|o| {
                let normalized = normalize(o);
                CatalogOption {
                    original: o.trim().to_string(),
                    words: words_of(&normalized),
                    normalized,
                }
            })
            .collect();

        // Stable, so equal-length options keep their display order.
        catalog.sort_by_key(|o| Reverse(o.normalized.chars().count()));

        Self {
            options: catalog,
            settings,
        }
    }

    /// True if no usable options were supplied.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Decomposes `answer` into the options it selects, in detection order.
    ///
    /// Recognised options are returned with their original catalog text. Unrecognised
    /// leftover fragments are returned normalized. The result never contains two entries
    /// with the same normalized text.
    pub fn scan(&self, answer: &str) -> Vec<String> {
        if normalize(answer).is_empty() {
            return Vec::new();
        }

        if self.options.is_empty() {
            return dedup_normalized(
                answer
                    .split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(str::to_string)
                    .collect(),
            );
        }

        let mut remaining = normalize(answer);
        let mut selected = Vec::new();

        for option in &self.options {
            if let Some(span) = find_bounded(&remaining, &option.normalized) {
                remaining.replace_range(span, ",");
                selected.push(option.original.clone());
                continue;
            }

            if option.words.len() > self.settings.min_overlap_words
                && strip_words(&mut remaining, &option.words)
            {
                debug!("Matched option '{}' by word overlap", option.original);
                selected.push(option.original.clone());
            }
        }

        let leftover = remaining.trim_matches(|c: char| c == ',' || c.is_whitespace());
        if !leftover.is_empty() {
            let min = self.settings.min_fragment_chars;
            let fragments: Vec<&str> = if leftover.contains(',') {
                leftover.split(',').map(str::trim).collect()
            } else {
                vec![leftover]
            };
            for fragment in fragments {
                if fragment.chars().count() > min {
                    debug!("Keeping unrecognised selection '{}'", fragment);
                    selected.push(fragment.to_string());
                }
            }
        }

        dedup_normalized(selected)
    }
}

fn is_delimiter(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Finds the first occurrence of `needle` in `haystack` that is delimited on both sides.
fn find_bounded(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }

    let mut from = 0;
    while let Some(offset) = haystack[from..].find(needle) {
        let start = from + offset;
        let end = start + needle.len();

        let before_ok = haystack[..start].chars().next_back().is_none_or(is_delimiter);
        let after_ok = haystack[end..].chars().next().is_none_or(is_delimiter);
        if before_ok && after_ok {
            return Some(start..end);
        }

        // Advance by one character to allow overlapping candidates.
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

fn word_key(token: &str) -> String {
    token.trim_matches(|c: char| !c.is_alphanumeric()).to_string()
}

fn words_of(normalized: &str) -> Vec<String> {
    WORD.find_iter(normalized)
        .map(|m| word_key(m.as_str()))
        .filter(|w| !w.is_empty())
        .collect()
}

/// Removes one token per option word from `remaining` if every word is present.
///
/// Leaves `remaining` untouched and returns `false` when any word is missing.
fn strip_words(remaining: &mut String, words: &[String]) -> bool {
    let tokens: Vec<(Range<usize>, String)> = WORD
        .find_iter(remaining.as_str())
        .map(|m| (m.range(), word_key(m.as_str())))
        .collect();

    let mut used = vec![false; tokens.len()];
    let mut spans = Vec::with_capacity(words.len());
    for word in words {
        let hit = tokens
            .iter()
            .enumerate()
            .position(|(i, (_, key))| !used[i] && key == word);
        match hit {
            Some(i) => {
                used[i] = true;
                spans.push(tokens[i].0.clone());
            }
            None => return false,
        }
    }

    // Back to front so earlier ranges stay valid.
    spans.sort_by_key(|span| Reverse(span.start));
    for span in spans {
        remaining.replace_range(span, ",");
    }
    true
}

fn dedup_normalized(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(normalize(item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut items: Vec<String>) -> Vec<String> {
        items.sort();
        items
    }

    #[test]
    fn test_longest_option_wins_over_contained_option() {
        let tokenizer =
            OptionTokenizer::new(&["Sepsis", "Severe Sepsis with Organ Dysfunction"]);
        assert_eq!(
            tokenizer.scan("Severe Sepsis with Organ Dysfunction"),
            vec!["Severe Sepsis with Organ Dysfunction"]
        );
    }

    #[test]
    fn test_both_nested_options_selected() {
        let tokenizer =
            OptionTokenizer::new(&["Sepsis", "Severe Sepsis with Organ Dysfunction"]);
        assert_eq!(
            sorted(tokenizer.scan("Sepsis, Severe Sepsis with Organ Dysfunction")),
            vec!["Sepsis", "Severe Sepsis with Organ Dysfunction"]
        );
    }

    #[test]
    fn test_options_containing_commas() {
        let tokenizer = OptionTokenizer::new(&["Cold, pale skin", "Warm, flushed skin"]);
        assert_eq!(
            sorted(tokenizer.scan("Cold, pale skin,Warm, flushed skin")),
            vec!["Cold, pale skin", "Warm, flushed skin"]
        );
        assert_eq!(tokenizer.scan("warm,  FLUSHED skin"), vec!["Warm, flushed skin"]);
    }

    #[test]
    fn test_short_option_needs_boundaries() {
        let tokenizer = OptionTokenizer::new(&["A", "B", "C"]);
        assert_eq!(tokenizer.scan("A,B"), vec!["A", "B"]);
        assert_eq!(tokenizer.scan("c"), vec!["C"]);
        // "a" inside "cat" is not a selection of option A.
        assert_eq!(tokenizer.scan("cat"), Vec::<String>::new());
    }

    #[test]
    fn test_word_overlap_absorbs_punctuation_drift() {
        let tokenizer = OptionTokenizer::new(&["Cold, pale skin", "Rapid weak pulse"]);
        assert_eq!(
            sorted(tokenizer.scan("cold pale skin, rapid; weak pulse")),
            vec!["Cold, pale skin", "Rapid weak pulse"]
        );
    }

    #[test]
    fn test_two_word_options_do_not_use_word_overlap() {
        let tokenizer = OptionTokenizer::new(&["Heart failure"]);
        // Both words are present but not as one span, so the option is not selected.
        let scanned = tokenizer.scan("failure of the heart");
        assert!(!scanned.contains(&"Heart failure".to_string()));
        assert_eq!(scanned, vec!["failure of the heart"]);
    }

    #[test]
    fn test_leftover_fragments_kept_when_long_enough() {
        let tokenizer = OptionTokenizer::new(&["Fever", "Cough"]);
        assert_eq!(
            tokenizer.scan("Fever, night sweats, or, a"),
            vec!["Fever", "night sweats"]
        );
        assert_eq!(tokenizer.scan("Cough, Headache"), vec!["Cough", "headache"]);
    }

    #[test]
    fn test_short_debris_discarded() {
        let tokenizer = OptionTokenizer::new(&["Fever", "Cough"]);
        assert_eq!(tokenizer.scan("Fever, or"), vec!["Fever"]);
        assert_eq!(tokenizer.scan("abc"), Vec::<String>::new());
    }

    #[test]
    fn test_custom_fragment_threshold() {
        let settings = TokenizerSettings {
            min_fragment_chars: 1,
            ..TokenizerSettings::default()
        };
        let tokenizer = OptionTokenizer::with_settings(&["Fever"], settings);
        assert_eq!(tokenizer.scan("Fever, abc"), vec!["Fever", "abc"]);
    }

    #[test]
    fn test_naive_fallback_without_options() {
        let tokenizer = OptionTokenizer::new::<&str>(&[]);
        assert!(tokenizer.is_empty());
        assert_eq!(tokenizer.scan(" A , b,,a "), vec!["A", "b"]);
    }

    #[test]
    fn test_blank_options_are_discarded() {
        let tokenizer = OptionTokenizer::new(&["", "  ", "Fever"]);
        assert!(!tokenizer.is_empty());
        assert_eq!(tokenizer.scan("fever"), vec!["Fever"]);
    }

    #[test]
    fn test_empty_answer_selects_nothing() {
        let tokenizer = OptionTokenizer::new(&["Fever"]);
        assert!(tokenizer.scan("").is_empty());
        assert!(tokenizer.scan("  ,  ").is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let tokenizer = OptionTokenizer::new(&["Fever", "Cough"]);
        assert_eq!(tokenizer.scan("Fever, fever, FEVER"), vec!["Fever"]);
    }

    #[test]
    fn test_removed_option_does_not_fuse_its_neighbours() {
        let tokenizer = OptionTokenizer::new(&["long option text", "p q"]);
        let scanned = tokenizer.scan("p long option text q");
        assert_eq!(scanned, vec!["long option text"]);
        assert!(!scanned.contains(&"p q".to_string()));
    }

    #[test]
    fn test_word_overlap_stripping_leaves_delimiters() {
        let words = words_of("cold pale skin");
        let mut buffer = "night skin pale cold sweats".to_string();
        assert!(strip_words(&mut buffer, &words));
        assert_eq!(buffer, "night , , , sweats");

        // The commas left behind split the surrounding text into separate fragments.
        let tokenizer = OptionTokenizer::new(&["Cold pale skin", "Fever"]);
        assert_eq!(
            tokenizer.scan("night skin pale cold sweats"),
            vec!["Cold pale skin", "night", "sweats"]
        );
    }

    #[test]
    fn test_strip_words_leaves_buffer_untouched_on_miss() {
        let words = words_of("cold pale skin");
        let mut buffer = "cold skin".to_string();
        assert!(!strip_words(&mut buffer, &words));
        assert_eq!(buffer, "cold skin");
    }

    #[test]
    fn test_find_bounded_skips_embedded_matches() {
        assert_eq!(find_bounded("cat, a", "a"), Some(5..6));
        assert_eq!(find_bounded("cat", "a"), None);
        assert_eq!(find_bounded("", "a"), None);
        assert_eq!(find_bounded("a", ""), None);
    }
}
