//! # textsim edit-distance engine
//!
//! Alignment-based similarity between two sequences of comparable elements.
//! Elements are usually `char`s, but every routine is generic, so token
//! sequences or fingerprint hash sequences work the same way.
//!
//! | metric | distance | space |
//! |--------|----------|-------|
//! | [`levenshtein`] | insert / delete / substitute | O(min(n,m)) |
//! | [`damerau_levenshtein`] | + unrestricted adjacent transposition | O(n·m) |
//! | [`optimal_alignment`] | + restricted transposition (OSA) | O(min(n,m)) |
//! | [`longest_common_subsequence`] | LCS length | O(min(n,m)) |
//!
//! All run in O(n·m) time. Distances are turned into similarities with
//! `(max(n,m) - distance) / max(n,m)`; LCS uses `lcs / max(n,m)`. Two empty
//! sequences are identical and score exactly `1.0`.
//!
//! ## Example
//!
//! ```
//! use edit::{levenshtein_str, EditMetric};
//!
//! assert_eq!(levenshtein_str("Hello", "Hello"), 1.0);
//! assert!((levenshtein_str("Hello", "Ola") - 0.2).abs() < 1e-12);
//!
//! let a: Vec<char> = "paul".chars().collect();
//! let b: Vec<char> = "pual".chars().collect();
//! assert_eq!(EditMetric::OptimalAlignment.similarity(&a, &b), 0.75);
//! ```

mod alignment;
mod damerau;
mod lcs;
mod levenshtein;

use serde::{Deserialize, Serialize};

pub use crate::alignment::{optimal_alignment, optimal_alignment_distance, optimal_alignment_str};
pub use crate::damerau::{damerau_levenshtein, damerau_levenshtein_distance, damerau_levenshtein_str};
pub use crate::lcs::{longest_common_subsequence, longest_common_subsequence_str, lcs_length};
pub use crate::levenshtein::{levenshtein, levenshtein_distance, levenshtein_str};

/// Edit-based metric, dispatched by value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EditMetric {
    Levenshtein,
    DamerauLevenshtein,
    OptimalAlignment,
    LongestCommonSubsequence,
}

impl EditMetric {
    pub const ALL: [EditMetric; 4] = [
        EditMetric::Levenshtein,
        EditMetric::DamerauLevenshtein,
        EditMetric::OptimalAlignment,
        EditMetric::LongestCommonSubsequence,
    ];

    /// Similarity of two sequences in `[0.0, 1.0]`.
    pub fn similarity<T>(self, a: &[T], b: &[T]) -> f64
    where
        T: Eq + std::hash::Hash,
    {
        match self {
            EditMetric::Levenshtein => levenshtein(a, b),
            EditMetric::DamerauLevenshtein => damerau_levenshtein(a, b),
            EditMetric::OptimalAlignment => optimal_alignment(a, b),
            EditMetric::LongestCommonSubsequence => longest_common_subsequence(a, b),
        }
    }

    /// Similarity of two strings, compared character by character.
    pub fn similarity_str(self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        self.similarity(&a, &b)
    }

    /// Stable snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            EditMetric::Levenshtein => "levenshtein",
            EditMetric::DamerauLevenshtein => "damerau_levenshtein",
            EditMetric::OptimalAlignment => "optimal_alignment",
            EditMetric::LongestCommonSubsequence => "longest_common_subsequence",
        }
    }
}

/// Orders a pair so the second sequence is the shorter one.
///
/// The rolling-row routines allocate rows sized by the second sequence; all
/// of them are symmetric, so swapping never changes the result.
#[inline]
pub(crate) fn shorter_last<'a, T>(a: &'a [T], b: &'a [T]) -> (&'a [T], &'a [T]) {
    if b.len() > a.len() {
        (b, a)
    } else {
        (a, b)
    }
}

/// `(max(n,m) - distance) / max(n,m)`, with two empty sequences scoring 1.0.
#[inline]
pub(crate) fn similarity_from_distance(n: usize, m: usize, distance: usize) -> f64 {
    let longest = n.max(m);
    if longest == 0 {
        return 1.0;
    }
    longest.saturating_sub(distance) as f64 / longest as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIRS: [(&str, &str); 8] = [
        ("", ""),
        ("", "ab"),
        ("Hello", "Hlelo"),
        ("paul", "pual"),
        ("2007", "2008"),
        ("ABCDEFG", "ABCDEFHJKL"),
        ("public String f(String s)", "public String func(String s)"),
        ("ca", "abc"),
    ];

    #[test]
    fn every_metric_is_bounded_and_symmetric() {
        for metric in EditMetric::ALL {
            for (a, b) in PAIRS {
                let ab = metric.similarity_str(a, b);
                let ba = metric.similarity_str(b, a);
                assert!((0.0..=1.0).contains(&ab), "{} {a:?} {b:?}", metric.name());
                assert_eq!(ab, ba, "{} {a:?} {b:?}", metric.name());
            }
        }
    }

    #[test]
    fn every_metric_is_one_on_identity() {
        for metric in EditMetric::ALL {
            for (a, _) in PAIRS {
                assert_eq!(metric.similarity_str(a, a), 1.0, "{} {a:?}", metric.name());
            }
        }
    }

    #[test]
    fn metrics_work_over_tokens() {
        let a = ["int", "x", "=", "0"];
        let b = ["x", "int", "=", "0"];
        assert_eq!(EditMetric::Levenshtein.similarity(&a, &b), 0.5);
        assert_eq!(EditMetric::DamerauLevenshtein.similarity(&a, &b), 0.75);
        assert_eq!(EditMetric::OptimalAlignment.similarity(&a, &b), 0.75);
        assert_eq!(EditMetric::LongestCommonSubsequence.similarity(&a, &b), 0.75);
    }

    #[test]
    fn metric_serde_names_match() {
        for metric in EditMetric::ALL {
            let serialized = serde_json::to_string(&metric).unwrap();
            assert_eq!(serialized, format!("\"{}\"", metric.name()));
        }
    }

    #[test]
    fn similarity_from_distance_edges() {
        assert_eq!(similarity_from_distance(0, 0, 0), 1.0);
        assert_eq!(similarity_from_distance(2, 0, 2), 0.0);
        assert_eq!(similarity_from_distance(5, 3, 4), 0.2);
    }
}
