//! # textsim set-coefficient engine
//!
//! Normalized overlap measures between two sets of hashable elements. The
//! sets usually hold n-grams, shingles, tokens or winnowing hashes, but every
//! coefficient is generic over `T: Eq + Hash`.
//!
//! Conventions shared by all coefficients:
//! - two empty sets are identical and score `1.0`;
//! - exactly one empty set scores `0.0`;
//! - every score lies in `[0.0, 1.0]`.
//!
//! ```
//! use coefficient::{to_set, Coefficient};
//!
//! let a = to_set(["Hall", "allo", "llo ", "lo D", "o Du"]);
//! let b = to_set(["Hall", "allo", "llo ", "lo S", "o Si", " Sie"]);
//! assert_eq!(Coefficient::Jaccard.apply(&a, &b), 3.0 / 8.0);
//! ```

mod set;

use std::hash::Hash;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

pub use crate::set::{dice, dice_variant, equal, intersection_size, jaccard, overlap};

/// Set coefficient, dispatched by value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Coefficient {
    /// `|A ∩ B| / |A ∪ B|`
    #[default]
    Jaccard,
    /// `2|A ∩ B| / (|A| + |B|)`
    Dice,
    /// `2|A ∩ B| / min(|A|, |B|)`, capped at 1.0
    DiceVariant,
    /// `|A ∩ B| / min(|A|, |B|)`
    Overlap,
    /// 1.0 when the sets are equal, else 0.0
    Equal,
}

impl Coefficient {
    pub const ALL: [Coefficient; 5] = [
        Coefficient::Jaccard,
        Coefficient::Dice,
        Coefficient::DiceVariant,
        Coefficient::Overlap,
        Coefficient::Equal,
    ];

    pub fn apply<T: Eq + Hash>(self, a: &HashSet<T>, b: &HashSet<T>) -> f64 {
        match self {
            Coefficient::Jaccard => jaccard(a, b),
            Coefficient::Dice => dice(a, b),
            Coefficient::DiceVariant => dice_variant(a, b),
            Coefficient::Overlap => overlap(a, b),
            Coefficient::Equal => equal(a, b),
        }
    }

    /// Stable snake_case name, also used by serde.
    pub fn name(self) -> &'static str {
        match self {
            Coefficient::Jaccard => "jaccard",
            Coefficient::Dice => "dice",
            Coefficient::DiceVariant => "dice_variant",
            Coefficient::Overlap => "overlap",
            Coefficient::Equal => "equal",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Collects elements into a deduplicated set.
pub fn to_set<T, I>(items: I) -> HashSet<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    items.into_iter().collect()
}
