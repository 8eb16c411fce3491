use crate::{shorter_last, similarity_from_distance};

/// Levenshtein distance: minimum number of single-element insertions,
/// deletions and substitutions turning `a` into `b`.
///
/// Keeps two rows sized by the shorter input.
pub fn levenshtein_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (long, short) = shorter_last(a, b);
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];

    for (i, x) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, y) in short.iter().enumerate() {
            let cost = usize::from(x != y);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Levenshtein similarity in `[0.0, 1.0]`.
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    similarity_from_distance(a.len(), b.len(), levenshtein_distance(a, b))
}

/// Levenshtein similarity over the characters of two strings.
pub fn levenshtein_str(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn distance_known_values() {
        assert_eq!(levenshtein_distance(&chars("kitten"), &chars("sitting")), 3);
        assert_eq!(levenshtein_distance(&chars("Hello"), &chars("Ola")), 4);
        assert_eq!(levenshtein_distance(&chars("paul"), &chars("pual")), 2);
        assert_eq!(levenshtein_distance(&chars("2007"), &chars("2008")), 1);
        assert_eq!(levenshtein_distance(&chars(""), &chars("abc")), 3);
        assert_eq!(levenshtein_distance::<char>(&[], &[]), 0);
    }

    #[test]
    fn similarity_known_values() {
        assert_eq!(levenshtein_str("Hello", "Hello"), 1.0);
        assert!((levenshtein_str("Hello", "Ola") - 0.2).abs() < 1e-12);
        assert_eq!(levenshtein_str("paul", "pual"), 0.5);
        assert_eq!(levenshtein_str("2007", "2008"), 0.75);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(levenshtein_str("", ""), 1.0);
        assert_eq!(levenshtein_str("", "abc"), 0.0);
        assert_eq!(levenshtein_str("abc", ""), 0.0);
    }

    #[test]
    fn counts_unicode_scalars() {
        assert_eq!(levenshtein_distance(&chars("héllo"), &chars("hello")), 1);
        assert_eq!(levenshtein_str("日本語", "日本人"), 2.0 / 3.0);
    }

    #[test]
    fn order_of_arguments_does_not_matter() {
        let a = chars("ABCDEFG");
        let b = chars("ABCDEFHJKL");
        assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        assert_eq!(levenshtein_distance(&a, &b), 4);
    }
}
