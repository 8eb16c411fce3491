//! The catalog of metrics and the parameters they run with.
//!
//! Every engine × element combination is a [`Metric`] value with a stable
//! snake_case name, so a metric can be picked from a config file or a
//! command line by string:
//!
//! | name | meaning |
//! |------|---------|
//! | `levenshtein` | edit similarity over characters |
//! | `token_optimal_alignment` | OSA over tokens |
//! | `equal` | exact string equality |
//! | `ngram_jaccard` | Jaccard over character n-gram sets |
//! | `winnowing_ngram_dice` | Dice over winnowed n-gram hashes |
//! | `winnowing_token_longest_common_subsequence` | LCS over winnowed token hashes |
//! | `shingle_cosine_bool` | boolean-weighted cosine over shingle profiles |
//! | `ngram_manhattan` | normalized Manhattan over n-gram profiles |

use std::fmt;
use std::str::FromStr;

use canonical::{NormalizationTarget, NormalizeConfig, NGRAM_SIZE, SHINGLE_SIZE};
use coefficient::Coefficient;
use edit::EditMetric;
use perceptual::{window_size_for, WinnowConfig};
use profile::WeightingScheme;
use serde::{Deserialize, Serialize};

use crate::error::SimilarityError;

/// What a string is broken into before a set, profile or fingerprint engine
/// sees it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// Separator-delimited tokens.
    Tokens,
    /// Character n-grams.
    NGrams,
    /// Runs of consecutive tokens.
    Shingles,
}

impl Representation {
    pub const ALL: [Representation; 3] = [
        Representation::Tokens,
        Representation::NGrams,
        Representation::Shingles,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Representation::Tokens => "token",
            Representation::NGrams => "ngram",
            Representation::Shingles => "shingle",
        }
    }

    /// Normalization preset matching this element kind.
    pub fn normalization_target(self) -> NormalizationTarget {
        match self {
            Representation::Tokens => NormalizationTarget::Edit,
            Representation::NGrams => NormalizationTarget::NGram,
            Representation::Shingles => NormalizationTarget::Shingle,
        }
    }
}

/// Elements an edit metric aligns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EditUnit {
    Chars,
    Tokens,
}

/// A similarity metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Metric {
    Edit { edit: EditMetric, unit: EditUnit },
    /// Exact string equality.
    Equal,
    Set {
        representation: Representation,
        coefficient: Coefficient,
    },
    Winnowing {
        representation: Representation,
        coefficient: Coefficient,
    },
    /// Edit similarity between the two ordered fingerprint hash sequences.
    WinnowingEdit {
        representation: Representation,
        edit: EditMetric,
    },
    Cosine {
        representation: Representation,
        weighting: WeightingScheme,
    },
    Manhattan { representation: Representation },
}

impl Metric {
    pub const LEVENSHTEIN: Metric = Metric::Edit {
        edit: EditMetric::Levenshtein,
        unit: EditUnit::Chars,
    };

    /// Every metric in the catalog.
    pub fn all() -> Vec<Metric> {
        let mut out = Vec::new();
        for unit in [EditUnit::Chars, EditUnit::Tokens] {
            for edit in EditMetric::ALL {
                out.push(Metric::Edit { edit, unit });
            }
        }
        out.push(Metric::Equal);
        for representation in Representation::ALL {
            for coefficient in Coefficient::ALL {
                out.push(Metric::Set {
                    representation,
                    coefficient,
                });
            }
            for coefficient in Coefficient::ALL {
                out.push(Metric::Winnowing {
                    representation,
                    coefficient,
                });
            }
            for edit in [
                EditMetric::LongestCommonSubsequence,
                EditMetric::OptimalAlignment,
            ] {
                out.push(Metric::WinnowingEdit {
                    representation,
                    edit,
                });
            }
            for weighting in WeightingScheme::ALL {
                out.push(Metric::Cosine {
                    representation,
                    weighting,
                });
            }
            out.push(Metric::Manhattan { representation });
        }
        out
    }

    pub fn name(&self) -> String {
        match *self {
            Metric::Edit {
                edit,
                unit: EditUnit::Chars,
            } => edit.name().to_string(),
            Metric::Edit {
                edit,
                unit: EditUnit::Tokens,
            } => format!("token_{}", edit.name()),
            Metric::Equal => "equal".to_string(),
            Metric::Set {
                representation,
                coefficient,
            } => format!("{}_{}", representation.name(), coefficient.name()),
            Metric::Winnowing {
                representation,
                coefficient,
            } => format!("winnowing_{}_{}", representation.name(), coefficient.name()),
            Metric::WinnowingEdit {
                representation,
                edit,
            } => format!("winnowing_{}_{}", representation.name(), edit.name()),
            Metric::Cosine {
                representation,
                weighting,
            } => format!("{}_cosine_{}", representation.name(), weighting.name()),
            Metric::Manhattan { representation } => {
                format!("{}_manhattan", representation.name())
            }
        }
    }

    /// Element kind the metric tokenizes into, if any.
    pub fn representation(&self) -> Option<Representation> {
        match *self {
            Metric::Edit { .. } | Metric::Equal => None,
            Metric::Set { representation, .. }
            | Metric::Winnowing { representation, .. }
            | Metric::WinnowingEdit { representation, .. }
            | Metric::Cosine { representation, .. }
            | Metric::Manhattan { representation } => Some(representation),
        }
    }

    /// Normalization preset applied to both operands when normalization is on.
    pub fn normalization_target(&self) -> NormalizationTarget {
        self.representation()
            .map(Representation::normalization_target)
            .unwrap_or(NormalizationTarget::Edit)
    }

    pub fn is_winnowing(&self) -> bool {
        matches!(self, Metric::Winnowing { .. } | Metric::WinnowingEdit { .. })
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::LEVENSHTEIN
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Metric {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Metric::all()
            .into_iter()
            .find(|metric| metric.name() == wanted)
            .ok_or_else(|| SimilarityError::UnknownMetric(s.to_string()))
    }
}

impl TryFrom<String> for Metric {
    type Error = SimilarityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Metric> for String {
    fn from(value: Metric) -> Self {
        value.name()
    }
}

/// A metric plus every parameter a comparison may need.
///
/// Parameters a metric does not use are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MetricConfig {
    pub metric: Metric,
    /// Run the metric's normalization preset over both operands first.
    pub normalize: bool,
    pub normalization: NormalizeConfig,
    /// Characters per n-gram.
    pub n_gram_size: usize,
    /// Tokens per shingle.
    pub shingle_size: usize,
    /// Pad n-grams with U+001F so edge characters appear in `n` grams.
    pub padding: bool,
    /// Token separator.
    pub separator: String,
    pub winnow: WinnowConfig,
    /// Shortest shared run (in chars for n-grams, in tokens otherwise) that
    /// winnowing must detect. Overrides `winnow.window_size` when set.
    pub guarantee_threshold: Option<usize>,
}

impl MetricConfig {
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            ..Self::default()
        }
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_normalization(mut self, normalization: NormalizeConfig) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn with_n_gram_size(mut self, n_gram_size: usize) -> Self {
        self.n_gram_size = n_gram_size;
        self
    }

    pub fn with_shingle_size(mut self, shingle_size: usize) -> Self {
        self.shingle_size = shingle_size;
        self
    }

    pub fn with_padding(mut self, padding: bool) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_winnow(mut self, winnow: WinnowConfig) -> Self {
        self.winnow = winnow;
        self
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.winnow.window_size = window_size;
        self
    }

    pub fn with_guarantee_threshold(mut self, guarantee_threshold: usize) -> Self {
        self.guarantee_threshold = Some(guarantee_threshold);
        self
    }

    /// Elements spanned by one hashed unit of `representation`.
    fn element_span(&self, representation: Representation) -> usize {
        match representation {
            Representation::Tokens => 1,
            Representation::NGrams => self.n_gram_size,
            Representation::Shingles => self.shingle_size,
        }
    }

    /// Winnowing config with the window derived from the guarantee threshold
    /// when one is set.
    pub fn effective_winnow(&self) -> Result<WinnowConfig, SimilarityError> {
        let Some(threshold) = self.guarantee_threshold else {
            self.winnow.validate()?;
            return Ok(self.winnow);
        };
        let span = match self.metric.representation() {
            Some(representation) => self.element_span(representation),
            None => 1,
        };
        let window_size = window_size_for(span, threshold)?;
        Ok(self.winnow.with_window_size(window_size))
    }

    pub fn validate(&self) -> Result<(), SimilarityError> {
        if self.n_gram_size == 0 {
            return Err(SimilarityError::InvalidConfiguration(
                "n_gram_size must be >= 1".to_string(),
            ));
        }
        if self.shingle_size == 0 {
            return Err(SimilarityError::InvalidConfiguration(
                "shingle_size must be >= 1".to_string(),
            ));
        }
        if self.metric.is_winnowing() {
            self.effective_winnow()?;
        }
        Ok(())
    }
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self {
            metric: Metric::default(),
            normalize: false,
            normalization: NormalizeConfig::default(),
            n_gram_size: NGRAM_SIZE,
            shingle_size: SHINGLE_SIZE,
            padding: false,
            separator: canonical::DEFAULT_SEPARATOR.to_string(),
            winnow: WinnowConfig::default(),
            guarantee_threshold: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perceptual::HashScheme;

    #[test]
    fn names_are_unique_and_parse_back() {
        let all = Metric::all();
        let mut names: Vec<String> = all.iter().map(Metric::name).collect();
        for (metric, name) in all.iter().zip(&names) {
            assert_eq!(&name.parse::<Metric>().unwrap(), metric);
        }
        let before = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn well_known_names() {
        assert_eq!("levenshtein".parse::<Metric>().unwrap(), Metric::LEVENSHTEIN);
        assert_eq!(
            "ngram_jaccard".parse::<Metric>().unwrap(),
            Metric::Set {
                representation: Representation::NGrams,
                coefficient: Coefficient::Jaccard
            }
        );
        assert_eq!(
            "winnowing_ngram_dice".parse::<Metric>().unwrap(),
            Metric::Winnowing {
                representation: Representation::NGrams,
                coefficient: Coefficient::Dice
            }
        );
        assert_eq!(
            "shingle_cosine_bool".parse::<Metric>().unwrap(),
            Metric::Cosine {
                representation: Representation::Shingles,
                weighting: WeightingScheme::Boolean
            }
        );
        assert_eq!(
            "token_optimal_alignment".parse::<Metric>().unwrap(),
            Metric::Edit {
                edit: EditMetric::OptimalAlignment,
                unit: EditUnit::Tokens
            }
        );
        assert_eq!(
            "winnowing_token_longest_common_subsequence"
                .parse::<Metric>()
                .unwrap(),
            Metric::WinnowingEdit {
                representation: Representation::Tokens,
                edit: EditMetric::LongestCommonSubsequence
            }
        );
    }

    #[test]
    fn unknown_name_is_reported() {
        assert_eq!(
            "ngram_kondrak".parse::<Metric>(),
            Err(SimilarityError::UnknownMetric("ngram_kondrak".into()))
        );
    }

    #[test]
    fn normalization_target_follows_representation() {
        assert_eq!(Metric::LEVENSHTEIN.normalization_target(), NormalizationTarget::Edit);
        assert_eq!(Metric::Equal.normalization_target(), NormalizationTarget::Edit);
        let ngram: Metric = "ngram_overlap".parse().unwrap();
        assert_eq!(ngram.normalization_target(), NormalizationTarget::NGram);
        let shingle: Metric = "winnowing_shingle_jaccard".parse().unwrap();
        assert_eq!(shingle.normalization_target(), NormalizationTarget::Shingle);
        let token: Metric = "token_manhattan".parse().unwrap();
        assert_eq!(token.normalization_target(), NormalizationTarget::Edit);
    }

    #[test]
    fn config_defaults() {
        let cfg = MetricConfig::default();
        assert_eq!(cfg.metric, Metric::LEVENSHTEIN);
        assert_eq!(cfg.n_gram_size, 4);
        assert_eq!(cfg.shingle_size, 2);
        assert_eq!(cfg.winnow.window_size, 4);
        assert!(!cfg.padding);
        assert!(!cfg.normalize);
        assert_eq!(cfg.separator, " ");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn window_from_guarantee_threshold() {
        let cfg = MetricConfig::new("winnowing_ngram_jaccard".parse().unwrap())
            .with_n_gram_size(4)
            .with_guarantee_threshold(9);
        assert_eq!(cfg.effective_winnow().unwrap().window_size, 6);

        let cfg = MetricConfig::new("winnowing_shingle_jaccard".parse().unwrap())
            .with_shingle_size(3)
            .with_guarantee_threshold(5);
        assert_eq!(cfg.effective_winnow().unwrap().window_size, 3);
    }

    #[test]
    fn inconsistent_threshold_is_invalid() {
        let cfg = MetricConfig::new("winnowing_ngram_dice".parse().unwrap())
            .with_n_gram_size(5)
            .with_guarantee_threshold(4);
        assert!(matches!(
            cfg.validate(),
            Err(SimilarityError::InvalidConfiguration(_))
        ));

        // Non-winnowing metrics ignore the threshold.
        let cfg = MetricConfig::new("ngram_dice".parse().unwrap())
            .with_n_gram_size(5)
            .with_guarantee_threshold(4);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_sizes_are_invalid() {
        assert!(MetricConfig::default().with_n_gram_size(0).validate().is_err());
        assert!(MetricConfig::default().with_shingle_size(0).validate().is_err());
        let cfg = MetricConfig::new("winnowing_token_dice".parse().unwrap()).with_window_size(0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = MetricConfig::new("winnowing_ngram_overlap".parse().unwrap())
            .with_normalize(true)
            .with_padding(true)
            .with_winnow(WinnowConfig::new().with_hash(HashScheme::Xxh3 { seed: 9 }))
            .with_guarantee_threshold(8);
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"winnowing_ngram_overlap\""));
        let back: MetricConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn config_rejects_unknown_metric_name() {
        let result: Result<MetricConfig, _> = serde_json::from_str(r#"{"metric": "nope"}"#);
        assert!(result.is_err());
    }
}
