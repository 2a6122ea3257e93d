//! Answer normalization helpers.
//!
//! Every comparison in the grading core goes through [`normalize`], so case and
//! whitespace differences between what a respondent typed, what the form backend
//! captured and what the quiz author entered never decide a grade on their own.

/// Lowercases `text`, collapses runs of whitespace into a single space and trims both ends.
///
/// Total: empty or whitespace-only input yields an empty string.
///
/// ```
/// use quiz_marker::utilities::normalization::normalize;
///
/// assert_eq!(normalize("  Cold,   PALE\tskin "), "cold, pale skin");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits `text` naively on commas and normalizes every non-empty part.
///
/// This is the degraded path used when no option catalog is available, so option
/// text that itself contains commas is split apart.
pub fn split_naive(text: &str) -> Vec<String> {
    text.split(',')
        .map(normalize)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Builds an order-independent key for a comma-joined answer.
///
/// Parts are normalized, sorted and deduplicated, so `"B, a"` and `"A,b,a"` share
/// the key `"a,b"`.
pub fn canonical_key(text: &str) -> String {
    let mut parts = split_naive(text);
    parts.sort();
    parts.dedup();
    parts.join(",")
}

/// Case-insensitive equality on normalized text.
pub fn same_text(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// True if either normalized text contains the other.
///
/// Empty text never overlaps anything.
pub fn overlaps(a: &str, b: &str) -> bool {
    let (a, b) = (normalize(a), normalize(b));
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a == b || a.contains(&b) || b.contains(&a)
}
