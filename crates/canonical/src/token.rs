//! Tokens, character n-grams and token shingles.
//!
//! Lengths are measured in Unicode scalar values (`char`s), never bytes, so an
//! n-gram never splits a multi-byte character.

use crate::error::{TokenUnit, TokenizeError};

/// Separator used by [`tokens_default`] and for joining shingles.
pub const DEFAULT_SEPARATOR: &str = " ";

/// ASCII "unit separator" (U+001F), used to pad n-grams at both ends.
pub const PADDING_CHAR: char = '\u{1F}';

/// Default character n-gram size.
pub const NGRAM_SIZE: usize = 4;

/// Default shingle size in tokens.
pub const SHINGLE_SIZE: usize = 2;

/// Splits `text` on every occurrence of `separator`, dropping empty pieces.
///
/// ```rust
/// use canonical::tokens;
///
/// assert_eq!(tokens("a,,b,c", ","), vec!["a", "b", "c"]);
/// ```
pub fn tokens(text: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return if text.is_empty() {
            Vec::new()
        } else {
            vec![text.to_string()]
        };
    }
    text.split(separator)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// [`tokens`] with [`DEFAULT_SEPARATOR`].
pub fn tokens_default(text: &str) -> Vec<String> {
    tokens(text, DEFAULT_SEPARATOR)
}

/// Returns every contiguous `n`-character substring of `text`, in order.
///
/// With `padding`, `n - 1` copies of [`PADDING_CHAR`] are added to both ends
/// first, so boundary characters appear in as many n-grams as inner ones.
///
/// # Errors
///
/// - [`TokenizeError::InvalidConfig`] when `n == 0`, or when the padded
///   text cannot be allocated.
/// - [`TokenizeError::InputTooShort`] when the (padded) text has fewer than
///   `n` characters.
pub fn ngram_list(text: &str, n: usize, padding: bool) -> Result<Vec<String>, TokenizeError> {
    if n == 0 {
        return Err(TokenizeError::InvalidConfig(
            "n-gram size must be >= 1".into(),
        ));
    }

    // Checked before allocating anything sized by `n`.
    let text_len = text.chars().count();
    let pad = if padding { n - 1 } else { 0 };
    let padded_len = text_len.saturating_add(pad.saturating_mul(2));
    if padded_len < n {
        return Err(TokenizeError::InputTooShort {
            unit: TokenUnit::Chars,
            len: padded_len,
            required: n,
        });
    }

    let mut chars: Vec<char> = Vec::new();
    chars.try_reserve_exact(padded_len).map_err(|_| {
        TokenizeError::InvalidConfig(format!("n-gram size {n} is too large to pad"))
    })?;
    chars.extend(std::iter::repeat_n(PADDING_CHAR, pad));
    chars.extend(text.chars());
    chars.extend(std::iter::repeat_n(PADDING_CHAR, pad));

    Ok(chars.windows(n).map(|w| w.iter().collect()).collect())
}

/// Returns every run of `size` consecutive tokens, joined with a single space.
///
/// # Errors
///
/// - [`TokenizeError::InvalidConfig`] when `size == 0`.
/// - [`TokenizeError::InputTooShort`] when fewer than `size` tokens are given.
pub fn shingle_list<S: AsRef<str>>(
    tokens: &[S],
    size: usize,
) -> Result<Vec<String>, TokenizeError> {
    if size == 0 {
        return Err(TokenizeError::InvalidConfig(
            "shingle size must be >= 1".into(),
        ));
    }
    if tokens.len() < size {
        return Err(TokenizeError::InputTooShort {
            unit: TokenUnit::Tokens,
            len: tokens.len(),
            required: size,
        });
    }

    Ok(tokens
        .windows(size)
        .map(|window| {
            let mut shingle = String::new();
            for (idx, token) in window.iter().enumerate() {
                if idx > 0 {
                    shingle.push_str(DEFAULT_SEPARATOR);
                }
                shingle.push_str(token.as_ref());
            }
            shingle
        })
        .collect())
}
