//! # textsim profile engine
//!
//! A [`Profile`] counts how often each element occurs. Two profiles are
//! compared with a weighted [`cosine`] or with a normalized [`manhattan`]
//! distance.
//!
//! ```
//! use profile::{cosine, manhattan, Profile, WeightingScheme};
//!
//! let a: Profile<&str> = ["int", "x", "int"].into_iter().collect();
//! let b: Profile<&str> = ["int", "y"].into_iter().collect();
//!
//! assert!(cosine(&a, &b, WeightingScheme::TermFrequency) > 0.6);
//! assert_eq!(manhattan(&a, &b), 0.4);
//! ```

mod weighting;

use std::hash::Hash;

use hashbrown::HashMap;

pub use crate::weighting::{WeightingScheme, NTF_SATURATION};

/// Element → occurrence count. Present keys always have a count of at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile<T: Eq + Hash> {
    counts: HashMap<T, usize>,
    total: usize,
}

impl<T: Eq + Hash> Profile<T> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }

    pub fn add(&mut self, element: T) {
        *self.counts.entry(element).or_insert(0) += 1;
        self.total += 1;
    }

    /// Count for `element`; 0 when absent.
    pub fn count(&self, element: &T) -> usize {
        self.counts.get(element).copied().unwrap_or(0)
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.counts.iter().map(|(element, &count)| (element, count))
    }
}

impl<T: Eq + Hash> Default for Profile<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Profile<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut profile = Profile::new();
        profile.extend(iter);
        profile
    }
}

impl<T: Eq + Hash> Extend<T> for Profile<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

/// Weighted cosine similarity over the union of both profiles' elements.
///
/// Identical count vectors score exactly 1.0; otherwise a zero norm on either
/// side scores 0.0.
pub fn cosine<T: Eq + Hash>(a: &Profile<T>, b: &Profile<T>, weighting: WeightingScheme) -> f64 {
    if a.counts == b.counts {
        return 1.0;
    }

    let mut products = Vec::with_capacity(a.len().min(b.len()));
    for (element, count_a) in a.iter() {
        let count_b = b.count(element);
        if count_b > 0 {
            products.push(weighting.weight(count_a) * weighting.weight(count_b));
        }
    }
    let dot = ordered_sum(products);
    let norm_a = squared_norm(a, weighting);
    let norm_b = squared_norm(b, weighting);

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
}

fn squared_norm<T: Eq + Hash>(profile: &Profile<T>, weighting: WeightingScheme) -> f64 {
    ordered_sum(
        profile
            .iter()
            .map(|(_, count)| {
                let w = weighting.weight(count);
                w * w
            })
            .collect(),
    )
}

/// Sums in ascending order so the result does not depend on map iteration
/// order; `cosine(a, b)` and `cosine(b, a)` add identical terms.
fn ordered_sum(mut terms: Vec<f64>) -> f64 {
    terms.sort_unstable_by(f64::total_cmp);
    terms.into_iter().sum()
}

/// `1 - Σ|ca - cb| / (Σca + Σcb)`; two empty profiles score 1.0.
pub fn manhattan<T: Eq + Hash>(a: &Profile<T>, b: &Profile<T>) -> f64 {
    let total = a.total + b.total;
    if total == 0 {
        return 1.0;
    }

    let mut distance = 0usize;
    for (element, count_a) in a.iter() {
        distance += count_a.abs_diff(b.count(element));
    }
    for (element, count_b) in b.iter() {
        if a.count(element) == 0 {
            distance += count_b;
        }
    }

    1.0 - distance as f64 / total as f64
}
