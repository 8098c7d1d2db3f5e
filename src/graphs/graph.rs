use crate::graphs::{edges::WeightedEdges, forward::Forward};

/// A finite weighted directed graph.
///
/// Shortest path search is written against this trait rather than a concrete
/// graph type. It is implemented for every type that provides the vertex
/// store, successor access, and weight lookup.
pub trait Graph: Forward + WeightedEdges {
    /// Size measure for the whole graph: vertices plus edges.
    fn size(&self) -> usize {
        self.vertex_count() + self.edge_count()
    }

    /// Returns true when the graph has neither vertices nor edges.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<T> Graph for T where T: Forward + WeightedEdges {}
