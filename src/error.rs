use std::fmt;

use canonical::TokenizeError;
use perceptual::PerceptualError;
use thiserror::Error;

/// Which side of a comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    First,
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::First => f.write_str("first"),
            Operand::Second => f.write_str("second"),
        }
    }
}

/// The stage that found an operand too short.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShortInput {
    #[error(transparent)]
    Tokenize(TokenizeError),
    #[error(transparent)]
    Fingerprint(PerceptualError),
}

/// Errors that end a comparison. None of them is ever turned into a score.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    #[error("{operand} operand is too short: {source}")]
    InputTooShort {
        operand: Operand,
        #[source]
        source: ShortInput,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("unknown metric: {0}")]
    UnknownMetric(String),
}

impl SimilarityError {
    /// Attach `operand` to a tokenization failure.
    pub fn tokenize(operand: Operand, err: TokenizeError) -> Self {
        match err {
            TokenizeError::InputTooShort { .. } => SimilarityError::InputTooShort {
                operand,
                source: ShortInput::Tokenize(err),
            },
            TokenizeError::InvalidConfig(msg) => SimilarityError::InvalidConfiguration(msg),
        }
    }

    /// Attach `operand` to a fingerprinting failure.
    pub fn fingerprint(operand: Operand, err: PerceptualError) -> Self {
        match err {
            PerceptualError::InputTooShort { .. } => SimilarityError::InputTooShort {
                operand,
                source: ShortInput::Fingerprint(err),
            },
            other => SimilarityError::InvalidConfiguration(other.to_string()),
        }
    }

    /// The offending operand, for too-short inputs.
    pub fn operand(&self) -> Option<Operand> {
        match self {
            SimilarityError::InputTooShort { operand, .. } => Some(*operand),
            _ => None,
        }
    }
}

/// Configuration errors carry no operand.
impl From<PerceptualError> for SimilarityError {
    fn from(value: PerceptualError) -> Self {
        SimilarityError::InvalidConfiguration(value.to_string())
    }
}
