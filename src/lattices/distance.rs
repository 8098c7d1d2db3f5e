use std::cmp::Ordering;
use std::fmt;

use crate::graphs::weight::Weight;
use crate::lattices::lattice::{BoundedLattice, JoinSemiLattice, MeetSemiLattice};

/// Length of the best known path to a vertex.
///
/// `Infinite` marks a vertex that has not been reached and compares greater
/// than every finite distance. The derived ordering relies on the variant
/// order, so `Finite` must stay first.
///
/// Under `min` and `max` distances form a bounded lattice: `⊥` is the empty
/// path `Finite(zero)` and `⊤` is `Infinite`. The bottom is only a true lower
/// bound because weights are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Weight> Distance<W> {
    /// Distance of a vertex to itself.
    #[inline]
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite value, or `None` for an unreached vertex.
    #[inline]
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(weight) => Some(weight),
            Distance::Infinite => None,
        }
    }

    /// Extends a path of this length by one edge of the given weight.
    ///
    /// An infinite distance stays infinite. Returns `None` when the finite
    /// sum does not fit in `W`.
    #[inline]
    pub fn extend(self, weight: W) -> Option<Self> {
        match self {
            Distance::Finite(distance) => distance.checked_add(weight).map(Distance::Finite),
            Distance::Infinite => Some(Distance::Infinite),
        }
    }
}

impl<W: Weight> From<W> for Distance<W> {
    fn from(weight: W) -> Self {
        Distance::Finite(weight)
    }
}

impl<W: Weight> MeetSemiLattice for Distance<W> {
    #[inline]
    fn meet(&self, other: &Self) -> Self {
        match self.partial_cmp(other) {
            Some(Ordering::Greater) => *other,
            _ => *self,
        }
    }
}

/// `max`, the dual of `meet`.
impl<W: Weight> JoinSemiLattice for Distance<W> {
    #[inline]
    fn join(&self, other: &Self) -> Self {
        match self.partial_cmp(other) {
            Some(Ordering::Less) => *other,
            _ => *self,
        }
    }
}

impl<W: Weight> BoundedLattice for Distance<W> {
    fn bottom() -> Self {
        Self::zero()
    }

    fn top() -> Self {
        Distance::Infinite
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(weight) => write!(f, "{weight}"),
            Distance::Infinite => f.write_str("inf"),
        }
    }
}
