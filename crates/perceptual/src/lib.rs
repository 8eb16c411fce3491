//! # textsim winnowing fingerprints
//!
//! Reduces a sequence of elements (n-grams, shingles, tokens) to a small set
//! of representative hashes that still detects shared substrings.
//!
//! ## Contract
//!
//! - The crate never normalizes or tokenizes text; callers hand it an
//!   element sequence.
//! - Output is a pure function of `(sequence, WinnowConfig)`.
//!
//! ## Pipeline
//!
//! 1.  **Hashing**: every element is mapped to a 32-bit hash with the
//!     configured [`HashScheme`].
//! 2.  **Winnowing**: a window of `window_size` consecutive hashes slides over
//!     the sequence; each window selects its minimum (earliest position on
//!     ties) and a hash is recorded whenever the selected position changes.
//!
//! If two sequences share a run of at least `window_size` identical
//! consecutive elements, their fingerprints share at least one hash. For
//! n-grams, [`window_size_for`] turns a guarantee threshold in characters
//! into the matching window.
//!
//! ## Example
//!
//! ```
//! use coefficient::Coefficient;
//! use perceptual::{fingerprint, similarity, WinnowConfig};
//!
//! fn grams(text: &str) -> Vec<String> {
//!     let chars: Vec<char> = text.chars().collect();
//!     chars.windows(4).map(|w| w.iter().collect()).collect()
//! }
//!
//! let cfg = WinnowConfig::new().with_window_size(4);
//! let a = fingerprint(&grams("public Node(int n)"), &cfg).unwrap();
//! let b = fingerprint(&grams("public Node(int v)"), &cfg).unwrap();
//!
//! assert_eq!(similarity(&a, &b, Coefficient::Dice), 1.0);
//! ```
pub mod config;
pub mod fingerprint;
mod hash;
mod winnow;

use coefficient::Coefficient;

pub use crate::config::{window_size_for, PerceptualError, WinnowConfig, DEFAULT_WINDOW_SIZE};
pub use crate::fingerprint::{Fingerprint, FingerprintMeta, WinnowedHash};
pub use crate::hash::{hash_sequence, polynomial_hash, ElementHash, HashScheme};
pub use crate::winnow::{fingerprint, winnow};

/// Current winnowing algorithm version.
pub const WINNOW_VERSION: u16 = 1;

/// Compare two fingerprints as sets of selected hashes.
pub fn similarity(a: &Fingerprint, b: &Fingerprint, coefficient: Coefficient) -> f64 {
    coefficient.apply(&a.hash_set(), &b.hash_set())
}
