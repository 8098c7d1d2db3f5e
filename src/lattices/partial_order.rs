/// A marker trait for types whose [`PartialOrd`] is a partial order `⊑`.
///
/// * **Reflexivity**:    `x ⊑ x`
/// * **Antisymmetry**:   if `x ⊑ y` and `y ⊑ x` then `x == y`
/// * **Transitivity**:   if `x ⊑ y` and `y ⊑ z` then `x ⊑ z`
///
/// No methods are added. The lattice traits in this crate use it to require
/// poset-like behaviour without redefining the comparison operators, so
/// `<` on a [`Distance`](crate::lattices::distance::Distance) means "shorter".
///
/// Floating point weights are only a partial order because of NaN. Graphs
/// reject NaN weights on insertion, so every distance that reaches an
/// algorithm is comparable.
pub trait PartialOrder: PartialEq + PartialOrd {}

impl<T: PartialEq + PartialOrd + ?Sized> PartialOrder for T {}
