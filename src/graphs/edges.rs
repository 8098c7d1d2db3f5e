use crate::error::Result;
use crate::graphs::{vertices::Vertices, weight::Weight};

/// Read access to the weighted directed edges of a graph.
///
/// Each edge is identified by its ordered pair of endpoints. Parallel edges
/// between the same pair may exist, but they share one weight: the one
/// recorded last for that pair.
pub trait WeightedEdges: Vertices {
    /// Type of edge weights.
    type Weight: Weight;

    /// Iterator over all edges in the graph.
    ///
    /// Each item is a triple with source, weight, and destination.
    /// Parallel edges are yielded once per insertion.
    type Edges<'a>: Iterator<Item = (&'a Self::Vertex, Self::Weight, &'a Self::Vertex)>
    where
        Self: 'a;

    /// Returns an iterator over all edges in the graph.
    fn edges(&self) -> Self::Edges<'_>;

    /// Returns the number of edges, counting parallel edges separately.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Returns the weight recorded for the ordered pair `(from, to)`.
    ///
    /// Fails with [`GraphError::EdgeNotFound`](crate::GraphError::EdgeNotFound)
    /// when no edge from `from` to `to` was ever inserted.
    fn weight(&self, from: &Self::Vertex, to: &Self::Vertex) -> Result<Self::Weight>;
}

/// A graph that supports insertion of weighted edges.
pub trait InsertEdge: WeightedEdges {
    /// Inserts a directed edge from `endpoints.0` to `endpoints.1`.
    ///
    /// Implementations reject self-loops and invalid weights, and leave the
    /// graph untouched when they do.
    fn insert_edge(
        &mut self,
        endpoints: (Self::Vertex, Self::Vertex),
        weight: Self::Weight,
    ) -> Result<()>;
}
