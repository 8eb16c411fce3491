use serde::{Deserialize, Serialize};

/// Saturation constant `k` of normalized term frequency.
pub const NTF_SATURATION: f64 = 1.5;

/// How a raw count turns into a vector component for cosine similarity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightingScheme {
    /// `count`
    #[default]
    TermFrequency,
    /// `(1 + k)·count / (count + k)`, saturating towards `1 + k`
    NormalizedTermFrequency,
    /// 1 for any present element
    Boolean,
}

impl WeightingScheme {
    pub const ALL: [WeightingScheme; 3] = [
        WeightingScheme::TermFrequency,
        WeightingScheme::NormalizedTermFrequency,
        WeightingScheme::Boolean,
    ];

    #[inline]
    pub fn weight(self, count: usize) -> f64 {
        let count = count as f64;
        match self {
            WeightingScheme::TermFrequency => count,
            WeightingScheme::NormalizedTermFrequency => {
                (1.0 + NTF_SATURATION) * count / (count + NTF_SATURATION)
            }
            WeightingScheme::Boolean => {
                if count > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeightingScheme::TermFrequency => "tf",
            WeightingScheme::NormalizedTermFrequency => "ntf",
            WeightingScheme::Boolean => "bool",
        }
    }
}
