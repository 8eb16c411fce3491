use crate::shorter_last;

/// Length of the longest common (not necessarily contiguous) subsequence.
pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (long, short) = shorter_last(a, b);
    if short.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; short.len() + 1];
    let mut curr = vec![0usize; short.len() + 1];

    for x in long {
        for (j, y) in short.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// LCS similarity `lcs / max(n, m)`; two empty sequences score 1.0.
pub fn longest_common_subsequence<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }
    lcs_length(a, b) as f64 / longest as f64
}

/// LCS similarity over the characters of two strings.
pub fn longest_common_subsequence_str(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    longest_common_subsequence(&a, &b)
}
