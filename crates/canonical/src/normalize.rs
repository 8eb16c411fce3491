use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;
use crate::whitespace::{remove_whitespaces, unify_whitespaces};

/// Which element kind the normalized text is headed for.
///
/// Each target picks the preset that keeps the element boundaries meaningful:
/// edit metrics and token splitting keep single spaces, n-grams drop
/// whitespace entirely, shingles keep only word characters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationTarget {
    Edit,
    NGram,
    Shingle,
}

/// Locale-free Unicode lowercasing.
pub fn to_lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Removes every character contained in `special_chars`.
///
/// ```rust
/// use canonical::remove_special_chars;
///
/// assert_eq!(remove_special_chars("f(a, b);", "{},;.:"), "f(a b)");
/// ```
pub fn remove_special_chars(text: &str, special_chars: &str) -> String {
    text.chars().filter(|ch| !special_chars.contains(*ch)).collect()
}

/// Replaces every run of non-word characters with a single space.
///
/// Word characters are ASCII letters, ASCII digits and `_`; everything else,
/// whitespace included, counts as a separator.
pub fn replace_non_word_chars(text: &str) -> String {
    let mut replaced = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            replaced.push(ch);
            in_run = false;
        } else if !in_run {
            replaced.push(' ');
            in_run = true;
        }
    }
    replaced
}

/// Normalizes `text` for the given target under `cfg`.
///
/// - `Edit`: lowercase, drop special chars, unify whitespace.
/// - `NGram`: lowercase, drop special chars, remove whitespace.
/// - `Shingle`: lowercase, collapse non-word runs to a space, unify whitespace.
///
/// All three are idempotent for any configuration.
pub fn normalize(text: &str, target: NormalizationTarget, cfg: &NormalizeConfig) -> String {
    // Composition first: it can change which characters the later steps see.
    let composed: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(text.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(text)
    };
    let folded: Cow<str> = if cfg.lowercase {
        Cow::Owned(to_lowercase(&composed))
    } else {
        composed
    };

    match target {
        NormalizationTarget::Edit => {
            let stripped: String = folded.chars().filter(|ch| !cfg.is_special(*ch)).collect();
            unify_whitespaces(&stripped)
        }
        NormalizationTarget::NGram => {
            let stripped: String = folded.chars().filter(|ch| !cfg.is_special(*ch)).collect();
            remove_whitespaces(&stripped)
        }
        NormalizationTarget::Shingle => unify_whitespaces(&replace_non_word_chars(&folded)),
    }
}

/// Default preset for edit-based metrics and token splitting.
pub fn normalize_for_edit(text: &str) -> String {
    normalize(text, NormalizationTarget::Edit, &NormalizeConfig::default())
}

/// Default preset for character n-grams.
pub fn normalize_for_ngram(text: &str) -> String {
    normalize(text, NormalizationTarget::NGram, &NormalizeConfig::default())
}

/// Default preset for token shingles.
pub fn normalize_for_shingle(text: &str) -> String {
    normalize(text, NormalizationTarget::Shingle, &NormalizeConfig::default())
}
