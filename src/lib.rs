//! Workspace umbrella crate for textsim.
//!
//! Scores how similar two pieces of text (usually source code) are, on a
//! `[0.0, 1.0]` scale, for near-duplicate and plagiarism detection. The
//! engines live in their own crates and are re-exported here:
//!
//! - [`canonical`]: normalization presets and tokenizers (tokens, n-grams,
//!   shingles);
//! - [`edit`]: Levenshtein, Damerau-Levenshtein, optimal string alignment,
//!   longest common subsequence;
//! - [`coefficient`]: Jaccard, Dice, Dice variant, overlap, equality;
//! - [`perceptual`]: winnowing fingerprints;
//! - [`profile`]: weighted cosine and Manhattan over term counts.
//!
//! This crate wires them together behind [`compare`]: pick a [`Metric`] (by
//! value or by name), set the parameters in a [`MetricConfig`] and score two
//! strings.
//!
//! ```
//! use textsim::{compare, compare_named, Metric, MetricConfig};
//!
//! let score = compare_named("Hallo Du", "Hallo Sie", "ngram_jaccard").unwrap();
//! assert_eq!(score, 3.0 / 8.0);
//!
//! let cfg = MetricConfig::new("winnowing_ngram_dice".parse::<Metric>().unwrap());
//! let score = compare("public Node(int n)", "public Node(int v)", &cfg).unwrap();
//! assert_eq!(score, 1.0);
//! ```
//!
//! Comparisons are pure and stateless; the only side effect is a
//! `textsim.compare` tracing span with a `compare_success` or
//! `compare_failure` event. No subscriber is installed here.

mod compare;
pub mod config;
mod error;
mod metric;

pub use crate::compare::{compare, compare_named};
pub use crate::config::{ConfigLoadError, SimilarityConfig};
pub use crate::error::{Operand, ShortInput, SimilarityError};
pub use crate::metric::{EditUnit, Metric, MetricConfig, Representation};

pub use canonical::{
    normalize, normalize_for_edit, normalize_for_ngram, normalize_for_shingle, ngram_list,
    remove_special_chars, remove_whitespaces, replace_non_word_chars, shingle_list, to_lowercase,
    tokens, unify_whitespaces, NormalizationTarget, NormalizeConfig, TokenizeError,
};
pub use coefficient::{to_set, Coefficient};
pub use edit::{
    damerau_levenshtein, levenshtein, longest_common_subsequence, optimal_alignment, EditMetric,
};
pub use perceptual::{
    fingerprint, window_size_for, winnow, Fingerprint, HashScheme, PerceptualError, WinnowConfig,
    WinnowedHash,
};
pub use profile::{cosine, manhattan, Profile, WeightingScheme};

/// Score two strings with the metric and parameters of a loaded config.
pub fn compare_with_config(
    first: &str,
    second: &str,
    config: &SimilarityConfig,
) -> Result<f64, SimilarityError> {
    let cfg = config
        .to_metric_config()
        .map_err(|err| SimilarityError::InvalidConfiguration(err.to_string()))?;
    compare(first, second, &cfg)
}
