//! Token-sort similarity scoring.
//!
//! The score is a normalized Levenshtein ratio over token-sorted strings:
//! both inputs are lowercased, split into alphanumeric tokens, sorted, and
//! re-joined before the edit distance is taken. This makes the score
//! insensitive to word order and to separator noise like hyphens or
//! trailing whitespace.
//!
//! The exact formula is `round(100 * (1 - levenshtein / max_len))` with
//! `max_len` the character count of the longer normalized form. Thresholds
//! elsewhere in the crate (resolver floor, acceptance bar) are calibrated
//! against this formula; changing it changes search behavior.

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_SPLIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("Failed to compile token split regex"));

/// Normalize a string into its sorted-token form.
///
/// Lowercases, splits on any run of non-alphanumeric characters, sorts the
/// tokens, and joins them with single spaces. Unicode letters (e.g. Hebrew
/// city names) count as alphanumeric.
pub fn sort_tokens(s: &str) -> String {
    let lowered = s.to_lowercase();
    let mut tokens: Vec<&str> = TOKEN_SPLIT_REGEX
        .split(&lowered)
        .filter(|t| !t.is_empty())
        .collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Similarity ratio (0-100) between two already-normalized strings.
///
/// Both empty scores 100; exactly one empty scores 0.
pub fn ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() && b.is_empty() {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let distance = strsim::levenshtein(a, b);
    let max_len = a.chars().count().max(b.chars().count());
    (100.0 * (1.0 - distance as f64 / max_len as f64)).round() as u8
}

/// Token-order-insensitive similarity ratio (0-100) between two raw strings.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&sort_tokens(a), &sort_tokens(b))
}
