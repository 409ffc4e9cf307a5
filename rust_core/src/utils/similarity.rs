//! String similarity scorers.
//!
//! Both scorers return a value in [0, 1] and define the score of two empty
//! inputs as 0 so an unresolvable pair is never rewarded.

use rustc_hash::FxHashSet;
use strsim::levenshtein;

/// Normalized edit-distance similarity:
/// `1 - levenshtein(a, b) / max(len(a), len(b))`, lengths in chars.
pub fn char_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }

    let distance = levenshtein(a, b);
    (1.0 - distance as f64 / max_len as f64).clamp(0.0, 1.0)
}

/// Jaccard similarity over whitespace-delimited word sets.
pub fn token_similarity(a: &str, b: &str) -> f64 {
    let tokens_a: FxHashSet<&str> = a.split_whitespace().collect();
    let tokens_b: FxHashSet<&str> = b.split_whitespace().collect();

    let union = tokens_a.union(&tokens_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = tokens_a.intersection(&tokens_b).count();
    intersection as f64 / union as f64
}

/// Mean of both scorers for one pair.
pub fn blended_similarity(a: &str, b: &str) -> f64 {
    (char_similarity(a, b) + token_similarity(a, b)) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_char_similarity_identical() {
        assert!(approx(char_similarity("connecticut", "connecticut"), 1.0));
    }

    #[test]
    fn test_char_similarity_both_empty_is_zero() {
        assert!(approx(char_similarity("", ""), 0.0));
    }

    #[test]
    fn test_char_similarity_one_empty_is_zero() {
        assert!(approx(char_similarity("duke", ""), 0.0));
        assert!(approx(char_similarity("", "duke"), 0.0));
    }

    #[test]
    fn test_char_similarity_known_distance() {
        // kitten -> sitting: 3 edits over 7 chars
        assert!(approx(char_similarity("kitten", "sitting"), 1.0 - 3.0 / 7.0));
        // one substitution over 4 chars
        assert!(approx(char_similarity("duke", "dike"), 0.75));
    }

    #[test]
    fn test_char_similarity_counts_chars_not_bytes() {
        // "é" is two bytes but one char
        assert!(approx(char_similarity("jose", "josé"), 0.75));
    }

    #[test]
    fn test_token_similarity() {
        assert!(approx(token_similarity("louisiana state", "louisiana state"), 1.0));
        assert!(approx(token_similarity("louisiana state", "state louisiana"), 1.0));
        assert!(approx(token_similarity("ohio state", "penn state"), 1.0 / 3.0));
        assert!(approx(token_similarity("duke", "alabama"), 0.0));
    }

    #[test]
    fn test_token_similarity_uses_sets() {
        assert!(approx(token_similarity("new new york", "new york"), 1.0));
    }

    #[test]
    fn test_token_similarity_empty() {
        assert!(approx(token_similarity("", ""), 0.0));
        assert!(approx(token_similarity("   ", "duke"), 0.0));
    }

    #[test]
    fn test_blended_similarity() {
        assert!(approx(blended_similarity("duke", "duke"), 1.0));
        assert!(approx(blended_similarity("duke", "dike"), 0.375));
        assert!(approx(blended_similarity("", ""), 0.0));
    }
}
