//! Trait bounds for node identifiers and edge weights.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Sub};

use num_traits::{Bounded, ToPrimitive, Zero};

/// A caller-chosen node identifier.
///
/// Identifiers are hashed for slot lookup and totally ordered so results can
/// be reported deterministically. Implemented for every type that satisfies
/// the bounds.
pub trait NodeKey: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> NodeKey for T {}

/// A caller-chosen edge weight.
///
/// `Zero` seeds path costs, `Add` accumulates them and `ToPrimitive` lets
/// numeric algorithms read a weight as `f64`. `Bounded` and `Sub` back the
/// overflow check in [`EdgeWeight::checked_add`]. Implemented for all
/// primitive integer and float types.
pub trait EdgeWeight:
    Copy
    + PartialOrd
    + Debug
    + Zero
    + Bounded
    + Add<Output = Self>
    + Sub<Output = Self>
    + ToPrimitive
{
    /// Whether the weight orders against itself. False only for NaN-like values.
    fn is_comparable(&self) -> bool {
        self.partial_cmp(self).is_some()
    }

    /// `self + rhs`, or `None` if the sum falls outside the type's range or
    /// is not comparable (opposite float infinities).
    fn checked_add(self, rhs: Self) -> Option<Self> {
        let out_of_range = if rhs >= Self::zero() {
            self > Self::max_value() - rhs
        } else {
            self < Self::min_value() - rhs
        };
        if out_of_range {
            return None;
        }
        let sum = self + rhs;
        sum.is_comparable().then_some(sum)
    }

    /// `self + rhs`, clamped to the type's range.
    fn saturating_add(self, rhs: Self) -> Self {
        match EdgeWeight::checked_add(self, rhs) {
            Some(sum) => sum,
            None if rhs >= Self::zero() => Self::max_value(),
            None => Self::min_value(),
        }
    }
}

impl<T> EdgeWeight for T where
    T: Copy
        + PartialOrd
        + Debug
        + Zero
        + Bounded
        + Add<Output = T>
        + Sub<Output = T>
        + ToPrimitive
{
}
