//! textsim canonical text layer.
//!
//! Both operands of a comparison pass through this crate before they reach a
//! similarity engine. It owns two concerns:
//!
//! - **Normalization**: case folding, special-character removal and
//!   whitespace handling, with one preset per element kind
//!   ([`normalize_for_edit`], [`normalize_for_ngram`], [`normalize_for_shingle`]).
//! - **Tokenization**: splitting text into tokens, character n-grams and
//!   token shingles ([`tokens`], [`ngram_list`], [`shingle_list`]).
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Every normalization preset is
//! idempotent: `f(f(s)) == f(s)`.
//!
//! ## Failure
//!
//! Tokenization is the only place where a comparison can be rejected for
//! being too short. [`TokenizeError::InputTooShort`] is returned when the
//! source text (or token list) is shorter than the requested n-gram or shingle
//! size. Callers propagate it; there is no fallback score.

mod config;
mod error;
mod normalize;
mod token;
mod whitespace;

pub use crate::config::{NormalizeConfig, DEFAULT_SPECIAL_CHARS};
pub use crate::error::{TokenUnit, TokenizeError};
pub use crate::normalize::{
    normalize, normalize_for_edit, normalize_for_ngram, normalize_for_shingle,
    remove_special_chars, replace_non_word_chars, to_lowercase, NormalizationTarget,
};
pub use crate::token::{
    ngram_list, shingle_list, tokens, tokens_default, DEFAULT_SEPARATOR, NGRAM_SIZE,
    PADDING_CHAR, SHINGLE_SIZE,
};
pub use crate::whitespace::{remove_whitespaces, unify_whitespaces};

#[cfg(test)]
mod tests {
    use super::*;

    const CODE: &str = "main(String[] args)  {\n print('Test');\n\texit(0); }";

    #[test]
    fn presets_feed_tokenizers() {
        let edit = normalize_for_edit("Hallo   Du");
        assert_eq!(tokens_default(&edit), vec!["hallo", "du"]);

        let ngram = normalize_for_ngram("Hallo Du");
        let grams = ngram_list(&ngram, 4, false).expect("long enough");
        assert_eq!(grams, vec!["hall", "allo", "llod", "lodu"]);

        let shingle = normalize_for_shingle("Hello, big; World!");
        let toks = tokens_default(&shingle);
        let shingles = shingle_list(&toks, 2).expect("long enough");
        assert_eq!(shingles, vec!["hello big", "big world"]);
    }

    #[test]
    fn presets_on_code_snippet() {
        assert_eq!(
            normalize_for_edit(CODE),
            "main(string[] args) print('test') exit(0) "
        );
        assert_eq!(
            normalize_for_ngram(CODE),
            "main(string[]args)print('test')exit(0)"
        );
        assert_eq!(
            normalize_for_shingle(CODE),
            "main string args print test exit 0 "
        );
    }

    #[test]
    fn too_short_is_reported_not_swallowed() {
        let err = ngram_list("a", 4, false).unwrap_err();
        assert_eq!(
            err,
            TokenizeError::InputTooShort {
                unit: TokenUnit::Chars,
                len: 1,
                required: 4,
            }
        );
    }
}
