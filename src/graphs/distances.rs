use std::{collections::hash_map::Iter, hash::Hash, iter::FromIterator};

use rustc_hash::FxHashMap;

use crate::graphs::weight::Weight;
use crate::lattices::distance::Distance;

/// Distance from the start vertex of a query to every vertex of the graph.
///
/// Vertices that cannot be reached hold [`Distance::Infinite`].
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMap<V: Eq + Hash, W>(FxHashMap<V, Distance<W>>);

impl<V: Eq + Hash, W: Weight> DistanceMap<V, W> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(FxHashMap::with_capacity_and_hasher(capacity, Default::default()))
    }

    pub(crate) fn insert(&mut self, vertex: V, distance: Distance<W>) {
        self.0.insert(vertex, distance);
    }

    /// Distance to `vertex`, or `None` when the vertex was not part of the
    /// graph at query time.
    pub fn get(&self, vertex: &V) -> Option<Distance<W>> {
        self.0.get(vertex).copied()
    }

    /// Returns true when `vertex` has a finite distance.
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.get(vertex).is_some_and(|distance| distance.is_finite())
    }

    /// Number of reachable vertices, the start vertex included.
    pub fn reachable_count(&self) -> usize {
        self.0.values().filter(|distance| distance.is_finite()).count()
    }

    pub fn iter(&self) -> Iter<'_, V, Distance<W>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V: Eq + Hash, W> FromIterator<(V, Distance<W>)> for DistanceMap<V, W> {
    fn from_iter<I: IntoIterator<Item = (V, Distance<W>)>>(iter: I) -> Self {
        Self(FxHashMap::from_iter(iter))
    }
}

/// Predecessor of every vertex on its shortest known path.
///
/// The start vertex and unreachable vertices have no predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap<V: Eq + Hash>(FxHashMap<V, Option<V>>);

impl<V: Eq + Hash> PredecessorMap<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(FxHashMap::with_capacity_and_hasher(capacity, Default::default()))
    }

    pub(crate) fn insert(&mut self, vertex: V, predecessor: Option<V>) {
        self.0.insert(vertex, predecessor);
    }

    /// Vertex immediately before `vertex` on its path.
    ///
    /// `None` both for vertices without a predecessor and for vertices the
    /// map does not cover; use [`PredecessorMap::contains`] to tell them
    /// apart.
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.0.get(vertex).and_then(Option::as_ref)
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.0.contains_key(vertex)
    }

    pub fn iter(&self) -> Iter<'_, V, Option<V>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V: Eq + Hash> FromIterator<(V, Option<V>)> for PredecessorMap<V> {
    fn from_iter<I: IntoIterator<Item = (V, Option<V>)>>(iter: I) -> Self {
        Self(FxHashMap::from_iter(iter))
    }
}
