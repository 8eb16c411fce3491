use std::hash::Hash;

use hashbrown::HashMap;

use crate::similarity_from_distance;

/// True Damerau-Levenshtein distance with unrestricted adjacent transpositions.
///
/// Lowrance-Wagner formulation: a full `(n+2)×(m+2)` table plus a map from
/// each element to the last row where it occurred in `a`. The transposition
/// step may jump back arbitrarily far, so rows cannot be recycled.
pub fn damerau_levenshtein_distance<T: Eq + Hash>(a: &[T], b: &[T]) -> usize {
    let n = a.len();
    let m = b.len();
    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let width = m + 2;
    let max_dist = n + m;
    let mut table = vec![0usize; (n + 2) * width];
    let idx = |i: usize, j: usize| i * width + j;

    table[idx(0, 0)] = max_dist;
    for i in 0..=n {
        table[idx(i + 1, 0)] = max_dist;
        table[idx(i + 1, 1)] = i;
    }
    for j in 0..=m {
        table[idx(0, j + 1)] = max_dist;
        table[idx(1, j + 1)] = j;
    }

    let mut last_row: HashMap<&T, usize> = HashMap::with_capacity(n);

    for i in 1..=n {
        let mut last_match_col = 0usize;
        for j in 1..=m {
            let k = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let l = last_match_col;
            let cost = if a[i - 1] == b[j - 1] {
                last_match_col = j;
                0
            } else {
                1
            };

            let substitution = table[idx(i, j)] + cost;
            let insertion = table[idx(i + 1, j)] + 1;
            let deletion = table[idx(i, j + 1)] + 1;
            let transposition = table[idx(k, l)] + (i - k - 1) + 1 + (j - l - 1);

            table[idx(i + 1, j + 1)] = substitution.min(insertion).min(deletion).min(transposition);
        }
        last_row.insert(&a[i - 1], i);
    }

    table[idx(n + 1, m + 1)]
}

/// Damerau-Levenshtein similarity in `[0.0, 1.0]`.
pub fn damerau_levenshtein<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    similarity_from_distance(a.len(), b.len(), damerau_levenshtein_distance(a, b))
}

/// Damerau-Levenshtein similarity over the characters of two strings.
pub fn damerau_levenshtein_str(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    damerau_levenshtein(&a, &b)
}
