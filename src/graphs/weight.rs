use std::fmt::Debug;
use std::ops::Add;

/// Numeric type usable as an edge weight.
///
/// Dijkstra's algorithm is only correct for non-negative weights, so every
/// weight is checked with [`Weight::is_valid`] before it enters a graph.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + Debug {
    /// Weight of the empty path.
    fn zero() -> Self;

    /// Returns true for weights a graph may store.
    fn is_valid(&self) -> bool;

    /// Sum of two weights, or `None` when it is not representable.
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! unsigned_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn is_valid(&self) -> bool {
                    true
                }

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    <$ty>::checked_add(self, other)
                }
            }
        )*
    };
}

macro_rules! signed_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn is_valid(&self) -> bool {
                    *self >= 0
                }

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    <$ty>::checked_add(self, other)
                }
            }
        )*
    };
}

macro_rules! float_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                // NaN fails both comparisons.
                #[inline]
                fn is_valid(&self) -> bool {
                    self.is_finite() && *self >= 0.0
                }

                // Finite operands only overflow to infinity.
                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.is_finite().then_some(sum)
                }
            }
        )*
    };
}

unsigned_weight!(u8, u16, u32, u64, usize);
signed_weight!(i32, i64);
float_weight!(f32, f64);
