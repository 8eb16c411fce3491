//! Configuration for the normalization presets.
//!
//! [`NormalizeConfig`] controls the knobs shared by all three presets. The
//! defaults reproduce the classic behaviour: lowercase, strip the characters
//! in [`DEFAULT_SPECIAL_CHARS`], leave Unicode composition alone.
//!
//! # Examples
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig::default();
//! assert!(config.lowercase);
//! assert!(!config.normalize_unicode);
//!
//! let code = NormalizeConfig::new().with_special_chars("{};");
//! assert_eq!(code.special_chars, "{};");
//! ```

use serde::{Deserialize, Serialize};

/// Characters removed by [`crate::remove_special_chars`] under the default
/// configuration.
pub const DEFAULT_SPECIAL_CHARS: &str = "{},;.:";

/// Configuration for the normalization presets.
///
/// Cheap to clone and serializable, so it can live inside a YAML file next to
/// the metric selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Apply locale-free Unicode lowercasing.
    pub lowercase: bool,

    /// Characters dropped by the edit and n-gram presets.
    ///
    /// Whitespace listed here is dropped as well, which keeps every preset
    /// idempotent.
    pub special_chars: String,

    /// Apply Unicode NFKC normalization before any other transform.
    ///
    /// With this enabled, composed and decomposed forms of the same glyph
    /// (`"Caf\u{e9}"` vs `"Cafe\u{301}"`) normalize to the same text.
    pub normalize_unicode: bool,
}

impl NormalizeConfig {
    /// Create a new configuration with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable lowercasing.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Replace the set of characters removed as "special".
    pub fn with_special_chars(mut self, special_chars: impl Into<String>) -> Self {
        self.special_chars = special_chars.into();
        self
    }

    /// Enable or disable NFKC normalization.
    pub fn with_unicode_normalization(mut self, normalize_unicode: bool) -> Self {
        self.normalize_unicode = normalize_unicode;
        self
    }

    pub(crate) fn is_special(&self, ch: char) -> bool {
        self.special_chars.contains(ch)
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            special_chars: DEFAULT_SPECIAL_CHARS.to_string(),
            normalize_unicode: false,
        }
    }
}
