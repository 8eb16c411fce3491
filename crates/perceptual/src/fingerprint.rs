//! Fingerprint and metadata types.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::hash::HashScheme;

/// A selected window minimum with the position of the element it came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WinnowedHash {
    pub hash: i32,
    /// Index into the hashed element sequence.
    pub position: usize,
}

/// Winnowing fingerprint of one element sequence.
///
/// Hashes are ordered by position and each one is the minimum of at least
/// one window (smallest value, earliest position on ties).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fingerprint {
    pub hashes: Vec<WinnowedHash>,
    pub meta: FingerprintMeta,
}

/// How a fingerprint was produced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FingerprintMeta {
    /// Bumped whenever selection changes in a way that affects output.
    pub algorithm_version: u16,
    pub window_size: usize,
    pub hash: HashScheme,
    /// Number of elements in the fingerprinted sequence.
    pub sequence_len: usize,
}

impl Fingerprint {
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Selected hash values in position order, duplicates kept.
    pub fn hash_values(&self) -> Vec<i32> {
        self.hashes.iter().map(|selected| selected.hash).collect()
    }

    /// Distinct selected hash values.
    pub fn hash_set(&self) -> HashSet<i32> {
        self.hashes.iter().map(|selected| selected.hash).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Fingerprint {
        Fingerprint {
            hashes: vec![
                WinnowedHash { hash: 17, position: 0 },
                WinnowedHash { hash: -3, position: 2 },
                WinnowedHash { hash: 17, position: 6 },
            ],
            meta: FingerprintMeta {
                algorithm_version: 1,
                window_size: 3,
                hash: HashScheme::Polynomial,
                sequence_len: 9,
            },
        }
    }

    #[test]
    fn views_over_selected_hashes() {
        let fp = sample();
        assert_eq!(fp.len(), 3);
        assert!(!fp.is_empty());
        assert_eq!(fp.hash_values(), vec![17, -3, 17]);
        let set = fp.hash_set();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&-3));
    }

    #[test]
    fn fingerprint_serde_roundtrip() {
        let fp = sample();
        let serialized = serde_json::to_string(&fp).unwrap();
        let deserialized: Fingerprint = serde_json::from_str(&serialized).unwrap();
        assert_eq!(fp, deserialized);
    }
}
