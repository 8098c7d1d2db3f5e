use std::{fmt::Debug, hash::Hash};

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graphs::{
    distances::PredecessorMap, edges::WeightedEdges, visited::Visited, weight::Weight,
};
use crate::lattices::set::Set;

/// Ordered sequence of vertices from a start vertex to an end vertex,
/// both included.
pub type Path<V> = Vec<V>;

/// Rebuilds the path from `start` to `end` by walking predecessors back from
/// `end`.
///
/// Fails with [`GraphError::UnknownVertex`] when `start` or `end` is not
/// covered by the map, and with [`GraphError::NoPathExists`] when the walk
/// stops anywhere but at `start`. A walk that revisits a vertex also fails
/// with `NoPathExists`; maps produced by a search never contain cycles, but
/// hand-built ones may.
///
/// For `start == end` the path is `[start]`.
pub fn reconstruct<V>(predecessors: &PredecessorMap<V>, start: &V, end: &V) -> Result<Path<V>>
where
    V: Eq + Hash + Clone + Debug,
{
    if !predecessors.contains(start) {
        return Err(GraphError::unknown_vertex(start));
    }
    if !predecessors.contains(end) {
        return Err(GraphError::unknown_vertex(end));
    }
    if start == end {
        return Ok(vec![start.clone()]);
    }

    let mut path = vec![end.clone()];
    let mut seen: Set<&V> = Set::default();
    seen.visit(end);

    let mut current = end;
    while let Some(previous) = predecessors.predecessor(current) {
        if !seen.visit(previous) {
            debug!(?start, ?end, cycle_at = ?previous, "predecessor walk revisited a vertex");
            return Err(GraphError::no_path(start, end));
        }
        path.push(previous.clone());
        current = previous;
    }

    if current != start {
        debug!(?start, ?end, stopped_at = ?current, "predecessor walk did not reach start");
        return Err(GraphError::no_path(start, end));
    }

    path.reverse();
    Ok(path)
}

/// Sum of the edge weights along `path`.
///
/// Paths with fewer than two vertices weigh zero. Fails with
/// [`GraphError::EdgeNotFound`] when two consecutive vertices are not joined
/// by an edge, and with [`GraphError::WeightOverflow`] when the sum does not
/// fit in the weight type.
pub fn path_weight<G>(graph: &G, path: &[G::Vertex]) -> Result<G::Weight>
where
    G: WeightedEdges,
{
    path.windows(2).try_fold(G::Weight::zero(), |total, step| {
        total
            .checked_add(graph.weight(&step[0], &step[1])?)
            .ok_or_else(|| GraphError::weight_overflow(&step[0], &step[1]))
    })
}
