use std::hash::Hash;

use hashbrown::HashSet;

/// `|A ∩ B|`, probing the larger set with each element of the smaller one.
#[inline]
pub fn intersection_size<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> usize {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().filter(|item| large.contains(*item)).count()
}

/// Resolves the empty cases shared by every coefficient.
#[inline]
fn empty_case<T>(a: &HashSet<T>, b: &HashSet<T>) -> Option<f64> {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Some(1.0),
        (true, false) | (false, true) => Some(0.0),
        (false, false) => None,
    }
}

pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if let Some(score) = empty_case(a, b) {
        return score;
    }
    let common = intersection_size(a, b);
    let union = a.len() + b.len() - common;
    common as f64 / union as f64
}

pub fn dice<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if let Some(score) = empty_case(a, b) {
        return score;
    }
    let common = intersection_size(a, b);
    (2 * common) as f64 / (a.len() + b.len()) as f64
}

/// `2|A ∩ B| / min(|A|, |B|)`.
///
/// The raw ratio reaches 2.0 when one set contains the other, so it is capped
/// at 1.0 to stay a similarity score.
pub fn dice_variant<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if let Some(score) = empty_case(a, b) {
        return score;
    }
    let common = intersection_size(a, b);
    let smallest = a.len().min(b.len());
    ((2 * common) as f64 / smallest as f64).min(1.0)
}

pub fn overlap<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if let Some(score) = empty_case(a, b) {
        return score;
    }
    let common = intersection_size(a, b);
    common as f64 / a.len().min(b.len()) as f64
}

pub fn equal<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if a == b {
        1.0
    } else {
        0.0
    }
}
