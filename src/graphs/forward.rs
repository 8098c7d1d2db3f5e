use crate::graphs::vertices::Vertices;

/// Ordered access to the out-neighbours of a vertex.
pub trait Forward: Vertices {
    type Successors<'a>: Iterator<Item = &'a Self::Vertex>
    where
        Self: 'a;

    /// Returns the destinations of all edges leaving `vertex`, in insertion
    /// order. Unknown vertices and sinks have no successors.
    fn successors(&self, vertex: &Self::Vertex) -> Self::Successors<'_>;

    /// Returns the number of edges leaving `vertex`.
    fn outgoing_degree(&self, vertex: &Self::Vertex) -> usize {
        self.successors(vertex).count()
    }
}
