//! Edit-distance comparison
//!
//! Distances count Unicode scalar values, so "Łukasz" has length 6.

/// Levenshtein distance between two strings
///
/// The minimum number of single-character insertions, deletions and
/// substitutions that turn `a` into `b`.
///
/// # Examples
///
/// ```
/// use kindred_matcher::distance::edit_distance;
///
/// assert_eq!(edit_distance("cat", "hat"), 1);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Similarity ratio in [0.0, 1.0] derived from edit distance
///
/// `(max - distance) / max` with `max = max(|a|, |b|)`. Two empty strings are
/// identical and score `1.0`.
///
/// # Examples
///
/// ```
/// use kindred_matcher::distance::similarity;
///
/// assert!((similarity("cat", "hat") - 2.0 / 3.0).abs() < 1e-12);
/// assert_eq!(similarity("", ""), 1.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = edit_distance(a, b).min(max_len);
    // Not strsim::normalized_levenshtein: 1 - 7/10 is not the double 0.3
    (max_len - distance) as f64 / max_len as f64
}
