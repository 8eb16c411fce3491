//! Element hashing.
//!
//! The default [`HashScheme::Polynomial`] is the classic `h = 31·h + unit`
//! string hash over UTF-16 code units with 32-bit wrapping arithmetic, so
//! fingerprints line up with values produced by other tools using that hash.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// How elements are mapped to 32-bit hashes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum HashScheme {
    #[default]
    Polynomial,
    /// Seeded xxh3-64, truncated to its low 32 bits.
    Xxh3 { seed: u64 },
}

impl HashScheme {
    #[inline]
    pub fn hash<T: ElementHash + ?Sized>(self, element: &T) -> i32 {
        match self {
            HashScheme::Polynomial => element.polynomial_hash(),
            HashScheme::Xxh3 { seed } => element.xxh3_hash(seed),
        }
    }
}

/// Elements that can be fingerprinted.
pub trait ElementHash {
    fn polynomial_hash(&self) -> i32;
    fn xxh3_hash(&self, seed: u64) -> i32;
}

/// `31`-polynomial hash over the UTF-16 encoding of `text`.
#[inline]
pub fn polynomial_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

#[inline]
fn xxh3_32(bytes: &[u8], seed: u64) -> i32 {
    xxh3_64_with_seed(bytes, seed) as u32 as i32
}

impl ElementHash for str {
    fn polynomial_hash(&self) -> i32 {
        polynomial_hash(self)
    }

    fn xxh3_hash(&self, seed: u64) -> i32 {
        xxh3_32(self.as_bytes(), seed)
    }
}

impl ElementHash for String {
    fn polynomial_hash(&self) -> i32 {
        polynomial_hash(self)
    }

    fn xxh3_hash(&self, seed: u64) -> i32 {
        xxh3_32(self.as_bytes(), seed)
    }
}

impl ElementHash for char {
    fn polynomial_hash(&self) -> i32 {
        let mut buf = [0u8; 4];
        polynomial_hash(self.encode_utf8(&mut buf))
    }

    fn xxh3_hash(&self, seed: u64) -> i32 {
        let mut buf = [0u8; 4];
        xxh3_32(self.encode_utf8(&mut buf).as_bytes(), seed)
    }
}

impl<T: ElementHash + ?Sized> ElementHash for &T {
    fn polynomial_hash(&self) -> i32 {
        (**self).polynomial_hash()
    }

    fn xxh3_hash(&self, seed: u64) -> i32 {
        (**self).xxh3_hash(seed)
    }
}

/// Hash every element of `seq` in order.
pub fn hash_sequence<T: ElementHash>(seq: &[T], scheme: HashScheme) -> Vec<i32> {
    seq.iter().map(|element| scheme.hash(element)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polynomial_hash_known_values() {
        assert_eq!(polynomial_hash(""), 0);
        assert_eq!(polynomial_hash("a"), 97);
        assert_eq!(polynomial_hash("ab"), 3105);
        assert_eq!(polynomial_hash("publ"), 3_452_175);
        assert_eq!(polynomial_hash("hello world"), 1_794_106_052);
        // Wraps into the negative range like a 32-bit signed accumulator.
        assert_eq!(polynomial_hash("hello world!"), -217_287_203);
    }

    #[test]
    fn polynomial_hash_uses_utf16_units() {
        // U+1F600 is a surrogate pair in UTF-16.
        assert_eq!(polynomial_hash("\u{1F600}"), 0xD83D * 31 + 0xDE00);
        assert_eq!('é'.polynomial_hash(), 0xE9);
    }

    #[test]
    fn impls_agree() {
        let owned = String::from("Node");
        assert_eq!(owned.polynomial_hash(), "Node".polynomial_hash());
        assert_eq!((&owned).xxh3_hash(3), "Node".xxh3_hash(3));
        assert_eq!('x'.xxh3_hash(1), "x".xxh3_hash(1));
    }

    #[test]
    fn xxh3_depends_on_seed() {
        let a = HashScheme::Xxh3 { seed: 1 }.hash("public");
        let b = HashScheme::Xxh3 { seed: 2 }.hash("public");
        assert_ne!(a, b);
        assert_eq!(a, HashScheme::Xxh3 { seed: 1 }.hash("public"));
    }

    #[test]
    fn hash_sequence_preserves_order() {
        let seq = ["a", "ab", "a"];
        assert_eq!(hash_sequence(&seq, HashScheme::Polynomial), vec![97, 3105, 97]);
    }

    #[test]
    fn scheme_serde_is_tagged() {
        let json = serde_json::to_string(&HashScheme::Xxh3 { seed: 5 }).unwrap();
        assert_eq!(json, r#"{"scheme":"xxh3","seed":5}"#);
        let back: HashScheme = serde_json::from_str(r#"{"scheme":"polynomial"}"#).unwrap();
        assert_eq!(back, HashScheme::Polynomial);
    }
}
