//! YAML configuration files.
//!
//! A config file names one metric and the parameters it runs with, so a
//! comparison setup can be versioned next to the data it scores.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "java clone detection"
//!
//! metric:
//!   name: "winnowing_ngram_dice"
//!   n_gram_size: 4
//!   shingle_size: 2
//!   padding: false
//!   separator: " "
//!
//! normalize:
//!   enabled: true
//!   lowercase: true
//!   special_chars: "{},;.:"
//!   normalize_unicode: false
//!
//! winnow:
//!   window_size: 4
//!   guarantee_threshold: 7
//!   hash: "polynomial"
//! ```

use std::fs;
use std::path::Path;

use canonical::{NormalizeConfig, DEFAULT_SEPARATOR, DEFAULT_SPECIAL_CHARS, NGRAM_SIZE, SHINGLE_SIZE};
use perceptual::{HashScheme, WinnowConfig, DEFAULT_WINDOW_SIZE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metric::{Metric, MetricConfig};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct SimilarityConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub metric: MetricYamlConfig,

    #[serde(default)]
    pub normalize: NormalizeYamlConfig,

    #[serde(default)]
    pub winnow: WinnowYamlConfig,
}

impl SimilarityConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: SimilarityConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.metric.validate()?;
        self.normalize.validate()?;
        self.winnow.validate()?;

        // Cross-section checks (e.g. n-gram size vs guarantee threshold).
        self.to_metric_config().map(|_| ())
    }

    /// Engine-level configuration for [`crate::compare`].
    pub fn to_metric_config(&self) -> Result<MetricConfig, ConfigLoadError> {
        let metric: Metric = self
            .metric
            .name
            .parse()
            .map_err(|err| ConfigLoadError::Validation(format!("metric.name: {err}")))?;

        let cfg = MetricConfig {
            metric,
            normalize: self.normalize.enabled,
            normalization: NormalizeConfig {
                lowercase: self.normalize.lowercase,
                special_chars: self.normalize.special_chars.clone(),
                normalize_unicode: self.normalize.normalize_unicode,
            },
            n_gram_size: self.metric.n_gram_size,
            shingle_size: self.metric.shingle_size,
            padding: self.metric.padding,
            separator: self.metric.separator.clone(),
            winnow: WinnowConfig::new()
                .with_window_size(self.winnow.window_size)
                .with_hash(self.winnow.hash_scheme()?),
            guarantee_threshold: self.winnow.guarantee_threshold,
        };
        cfg.validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;
        Ok(cfg)
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            metric: MetricYamlConfig::default(),
            normalize: NormalizeYamlConfig::default(),
            winnow: WinnowYamlConfig::default(),
        }
    }
}

/// Metric selection and tokenization parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricYamlConfig {
    #[serde(default = "default_metric_name")]
    pub name: String,

    #[serde(default = "default_n_gram_size")]
    pub n_gram_size: usize,

    #[serde(default = "default_shingle_size")]
    pub shingle_size: usize,

    #[serde(default)]
    pub padding: bool,

    #[serde(default = "default_separator")]
    pub separator: String,
}

impl MetricYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.n_gram_size == 0 {
            return Err(ConfigLoadError::Validation(
                "metric.n_gram_size must be >= 1".to_string(),
            ));
        }
        if self.shingle_size == 0 {
            return Err(ConfigLoadError::Validation(
                "metric.shingle_size must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MetricYamlConfig {
    fn default() -> Self {
        Self {
            name: default_metric_name(),
            n_gram_size: default_n_gram_size(),
            shingle_size: default_shingle_size(),
            padding: false,
            separator: default_separator(),
        }
    }
}

/// Normalization applied to both operands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizeYamlConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "true_value")]
    pub lowercase: bool,

    #[serde(default = "default_special_chars")]
    pub special_chars: String,

    #[serde(default)]
    pub normalize_unicode: bool,
}

impl NormalizeYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if !self.enabled && self.normalize_unicode {
            return Err(ConfigLoadError::Validation(
                "normalize.normalize_unicode requires normalize.enabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for NormalizeYamlConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            lowercase: true,
            special_chars: default_special_chars(),
            normalize_unicode: false,
        }
    }
}

/// Winnowing parameters; ignored by non-winnowing metrics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WinnowYamlConfig {
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    #[serde(default)]
    pub guarantee_threshold: Option<usize>,

    /// `"polynomial"` or `"xxh3"`.
    #[serde(default = "default_hash")]
    pub hash: String,

    /// Seed for the `xxh3` scheme.
    #[serde(default)]
    pub seed: u64,
}

impl WinnowYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.window_size == 0 {
            return Err(ConfigLoadError::Validation(
                "winnow.window_size must be >= 1".to_string(),
            ));
        }
        if self.guarantee_threshold == Some(0) {
            return Err(ConfigLoadError::Validation(
                "winnow.guarantee_threshold must be >= 1".to_string(),
            ));
        }
        self.hash_scheme().map(|_| ())
    }

    fn hash_scheme(&self) -> Result<HashScheme, ConfigLoadError> {
        match self.hash.as_str() {
            "polynomial" => Ok(HashScheme::Polynomial),
            "xxh3" => Ok(HashScheme::Xxh3 { seed: self.seed }),
            other => Err(ConfigLoadError::Validation(format!(
                "winnow.hash must be one of: polynomial, xxh3 (got {other})"
            ))),
        }
    }
}

impl Default for WinnowYamlConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            guarantee_threshold: None,
            hash: default_hash(),
            seed: 0,
        }
    }
}

fn default_metric_name() -> String {
    Metric::default().name()
}
fn default_n_gram_size() -> usize {
    NGRAM_SIZE
}
fn default_shingle_size() -> usize {
    SHINGLE_SIZE
}
fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}
fn true_value() -> bool {
    true
}
fn default_special_chars() -> String {
    DEFAULT_SPECIAL_CHARS.to_string()
}
fn default_window_size() -> usize {
    DEFAULT_WINDOW_SIZE
}
fn default_hash() -> String {
    "polynomial".to_string()
}
