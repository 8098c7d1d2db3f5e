use crate::lattices::partial_order::PartialOrder;

/// A join-semilattice: every pair of elements has a least upper bound.
///
/// # Laws
///
/// For all `a, b, c`:
///
/// * **Associativity**: `a.join(&b).join(&c) == a.join(&b.join(&c))`
/// * **Commutativity**: `a.join(&b) == b.join(&a)`
/// * **Idempotence**:   `a.join(&a) == a`
///
/// Implementors are responsible for ensuring these laws hold.
pub trait JoinSemiLattice: PartialOrder + Sized {
    /// Returns the least upper bound of `self` and `other`.
    fn join(&self, other: &Self) -> Self;
}

/// A meet-semilattice: every pair of elements has a greatest lower bound.
///
/// # Laws
///
/// For all `a, b, c`:
///
/// * **Associativity**: `a.meet(&b).meet(&c) == a.meet(&b.meet(&c))`
/// * **Commutativity**: `a.meet(&b) == b.meet(&a)`
/// * **Idempotence**:   `a.meet(&a) == a`
///
/// And in terms of the partial order `⊑` given by [`PartialOrder`]:
///
/// * `a.meet(&b) ⊑ a` and `a.meet(&b) ⊑ b`
/// * If `c ⊑ a` and `c ⊑ b` then `c ⊑ a.meet(&b)`
///
/// Edge relaxation in shortest path search is a meet: the tentative distance
/// of a vertex only ever moves down.
pub trait MeetSemiLattice: PartialOrder + Sized {
    /// Returns the greatest lower bound of `self` and `other`.
    fn meet(&self, other: &Self) -> Self;
}

/// A type that is both a join-semilattice and a meet-semilattice.
pub trait Lattice: JoinSemiLattice + MeetSemiLattice {}

impl<T: JoinSemiLattice + MeetSemiLattice> Lattice for T {}

/// A lattice with both a bottom and a top element.
///
/// # Laws
///
/// For all `x`:
///
/// * `bottom().leq(&x)`
/// * `x.leq(&top())`
pub trait BoundedLattice: Lattice {
    /// Returns the least element (⊥).
    fn bottom() -> Self;

    /// Returns the greatest element (⊤).
    fn top() -> Self;
}
