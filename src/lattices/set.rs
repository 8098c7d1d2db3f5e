use std::{
    collections::hash_set::{IntoIter, Iter},
    hash::Hash,
    iter::FromIterator,
};

use rustc_hash::{FxBuildHasher, FxHashSet};

/// Hash set keyed with the Fx hasher.
///
/// Used for the vertex store of a graph and as a visited set for walks over
/// arbitrary vertex types. Iteration order is unspecified; callers that need
/// a stable order sort.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Set<T: Eq + Hash>(FxHashSet<T>);

impl<T: Eq + Hash> Set<T> {
    pub fn new() -> Self {
        Self(FxHashSet::with_hasher(FxBuildHasher))
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(FxHashSet::with_capacity_and_hasher(capacity, FxBuildHasher))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.0.iter()
    }

    /// Returns true when the value was not present before.
    pub fn insert(&mut self, value: T) -> bool {
        self.0.insert(value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(FxHashSet::from_iter(iter))
    }
}
