use crate::{shorter_last, similarity_from_distance};

/// Optimal string alignment distance (restricted Damerau-Levenshtein).
///
/// Like Levenshtein plus transposition of two adjacent elements, with the
/// restriction that no substring is edited more than once. Three rolling rows
/// sized by the shorter input are enough for the transposition lookback.
pub fn optimal_alignment_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (long, short) = shorter_last(a, b);
    let width = short.len() + 1;
    if short.is_empty() {
        return long.len();
    }

    let mut before: Vec<usize> = vec![0; width];
    let mut prev: Vec<usize> = (0..width).collect();
    let mut curr: Vec<usize> = vec![0; width];

    for i in 1..=long.len() {
        curr[0] = i;
        for j in 1..width {
            let cost = usize::from(long[i - 1] != short[j - 1]);
            let mut best = (prev[j - 1] + cost).min(prev[j] + 1).min(curr[j - 1] + 1);
            if i > 1 && j > 1 && long[i - 1] == short[j - 2] && long[i - 2] == short[j - 1] {
                best = best.min(before[j - 2] + 1);
            }
            curr[j] = best;
        }
        // before <- prev <- curr, recycling the oldest row.
        std::mem::swap(&mut before, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Optimal string alignment similarity in `[0.0, 1.0]`.
pub fn optimal_alignment<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    similarity_from_distance(a.len(), b.len(), optimal_alignment_distance(a, b))
}

/// Optimal string alignment similarity over the characters of two strings.
pub fn optimal_alignment_str(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    optimal_alignment(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        optimal_alignment_distance(&a, &b)
    }

    #[test]
    fn adjacent_transposition_costs_one() {
        assert_eq!(dist("paul", "pual"), 1);
        assert_eq!(dist("Hello", "Hlelo"), 1);
        assert_eq!(optimal_alignment_str("paul", "pual"), 0.75);
        assert_eq!(optimal_alignment_str("Hello", "Hlelo"), 0.8);
    }

    #[test]
    fn restricted_edit_cannot_revisit_transposed_pair() {
        // True Damerau gives 2 here.
        assert_eq!(dist("ca", "abc"), 3);
    }

    #[test]
    fn agrees_with_levenshtein_without_transpositions() {
        assert_eq!(dist("kitten", "sitting"), 3);
        assert_eq!(dist("2007", "2008"), 1);
        assert_eq!(dist("", "abc"), 3);
        assert_eq!(dist("", ""), 0);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(optimal_alignment_str("", ""), 1.0);
        assert_eq!(optimal_alignment_str("abc", ""), 0.0);
    }

    #[test]
    fn multiple_transpositions() {
        assert_eq!(dist("abcd", "badc"), 2);
        assert_eq!(dist("ab", "ba"), 1);
    }
}
