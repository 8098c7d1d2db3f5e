use bit_vec::BitVec;
use std::hash::Hash;

use crate::lattices::set::Set;

/// Record of vertices that have been settled during a search.
pub trait Visited<V>: Default {
    /// Marks `value` as visited. Returns true when it was not visited before.
    fn visit(&mut self, value: V) -> bool;

    fn is_visited(&self, value: &V) -> bool;
}

impl<V> Visited<V> for Set<V>
where
    V: Eq + Hash,
{
    #[inline]
    fn visit(&mut self, value: V) -> bool {
        self.insert(value)
    }

    #[inline]
    fn is_visited(&self, value: &V) -> bool {
        self.contains(value)
    }
}

/// Dense visited set over vertex indices, sized up front to the vertex count.
impl Visited<usize> for BitVec {
    #[inline]
    fn visit(&mut self, value: usize) -> bool {
        debug_assert!(value < self.len(), "vertex index {value} out of range");
        let fresh = !self[value];
        self.set(value, true);
        fresh
    }

    #[inline]
    fn is_visited(&self, value: &usize) -> bool {
        self.get(*value).unwrap_or(false)
    }
}
