use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unit in which a too-short input was measured.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TokenUnit {
    /// Characters of the (possibly padded) source string.
    Chars,
    /// Tokens of a token list.
    Tokens,
}

impl fmt::Display for TokenUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenUnit::Chars => f.write_str("chars"),
            TokenUnit::Tokens => f.write_str("tokens"),
        }
    }
}

/// Errors that can occur during tokenization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("input too short: {len} {unit} available, {required} required")]
    InputTooShort {
        unit: TokenUnit,
        len: usize,
        required: usize,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
