//! Configuration and error types for winnowing.
//!
//! Fingerprinting is a pure function of `(sequence, WinnowConfig)`; nothing
//! here reads the environment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hash::HashScheme;

/// Default window size, matching a 4-gram / 7-char guarantee threshold.
pub const DEFAULT_WINDOW_SIZE: usize = 4;

/// Configuration for [`crate::fingerprint`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WinnowConfig {
    /// Number of consecutive element hashes per window.
    ///
    /// Any run of `window_size` identical consecutive elements shared by two
    /// sequences yields at least one shared fingerprint hash.
    pub window_size: usize,
    /// How elements are hashed before winnowing.
    pub hash: HashScheme,
}

impl WinnowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_hash(mut self, hash: HashScheme) -> Self {
        self.hash = hash;
        self
    }

    /// Derive the window from an n-gram size and a guarantee threshold
    /// (minimum shared substring length that must be detected).
    pub fn with_guarantee_threshold(
        self,
        n_gram_size: usize,
        guarantee_threshold: usize,
    ) -> Result<Self, PerceptualError> {
        let window_size = window_size_for(n_gram_size, guarantee_threshold)?;
        Ok(self.with_window_size(window_size))
    }

    pub fn validate(&self) -> Result<(), PerceptualError> {
        if self.window_size < 1 {
            return Err(PerceptualError::InvalidWindow {
                window: self.window_size,
            });
        }
        Ok(())
    }
}

impl Default for WinnowConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            hash: HashScheme::default(),
        }
    }
}

/// `guarantee_threshold - n_gram_size + 1`.
///
/// A substring of `guarantee_threshold` chars contains exactly that many
/// consecutive n-grams, so this is the window that guarantees detection.
pub fn window_size_for(
    n_gram_size: usize,
    guarantee_threshold: usize,
) -> Result<usize, PerceptualError> {
    if n_gram_size == 0 || guarantee_threshold == 0 || n_gram_size > guarantee_threshold {
        return Err(PerceptualError::InvalidThreshold {
            n_gram_size,
            guarantee_threshold,
        });
    }
    Ok(guarantee_threshold - n_gram_size + 1)
}

/// Errors returned by winnowing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PerceptualError {
    #[error("input too short: {len} elements available, window of {window} required")]
    InputTooShort { len: usize, window: usize },

    #[error("invalid config: window_size must be >= 1 (got {window})")]
    InvalidWindow { window: usize },

    #[error(
        "invalid config: n_gram_size ({n_gram_size}) must be between 1 and guarantee_threshold ({guarantee_threshold})"
    )]
    InvalidThreshold {
        n_gram_size: usize,
        guarantee_threshold: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let cfg = WinnowConfig::default();
        assert_eq!(cfg.window_size, 4);
        assert_eq!(cfg.hash, HashScheme::Polynomial);
        assert_eq!(WinnowConfig::new(), cfg);
    }

    #[test]
    fn config_builder_chain() {
        let cfg = WinnowConfig::new()
            .with_window_size(6)
            .with_hash(HashScheme::Xxh3 { seed: 7 });
        assert_eq!(cfg.window_size, 6);
        assert_eq!(cfg.hash, HashScheme::Xxh3 { seed: 7 });
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_validate_zero_window() {
        let cfg = WinnowConfig::new().with_window_size(0);
        assert_eq!(
            cfg.validate(),
            Err(PerceptualError::InvalidWindow { window: 0 })
        );
    }

    #[test]
    fn window_from_threshold() {
        assert_eq!(window_size_for(4, 7), Ok(4));
        assert_eq!(window_size_for(5, 5), Ok(1));
        assert_eq!(window_size_for(1, 10), Ok(10));
        let cfg = WinnowConfig::new().with_guarantee_threshold(3, 8).unwrap();
        assert_eq!(cfg.window_size, 6);
    }

    #[test]
    fn window_from_inconsistent_threshold() {
        assert_eq!(
            window_size_for(8, 7),
            Err(PerceptualError::InvalidThreshold {
                n_gram_size: 8,
                guarantee_threshold: 7
            })
        );
        assert!(window_size_for(0, 7).is_err());
        assert!(window_size_for(4, 0).is_err());
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = WinnowConfig::new()
            .with_window_size(5)
            .with_hash(HashScheme::Xxh3 { seed: 12345 });
        let serialized = serde_json::to_string(&cfg).unwrap();
        let deserialized: WinnowConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(cfg, deserialized);
    }

    #[test]
    fn config_serde_fills_defaults() {
        let cfg: WinnowConfig = serde_json::from_str(r#"{"window_size": 9}"#).unwrap();
        assert_eq!(cfg.window_size, 9);
        assert_eq!(cfg.hash, HashScheme::Polynomial);
    }

    #[test]
    fn error_display() {
        let err = PerceptualError::InputTooShort { len: 2, window: 4 };
        assert!(err.to_string().contains("input too short"));
        assert!(err.to_string().contains("window of 4"));
        let err = PerceptualError::InvalidThreshold {
            n_gram_size: 8,
            guarantee_threshold: 7,
        };
        assert!(err.to_string().starts_with("invalid config"));
    }
}
