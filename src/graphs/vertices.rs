use std::fmt::Debug;
use std::hash::Hash;

/// Read access to the vertex set of a graph.
pub trait Vertices {
    /// Type used to identify vertices.
    ///
    /// Vertices are opaque: only equality, hashing and cloning are assumed.
    /// `Debug` is required so errors can name the offending vertex.
    type Vertex: Eq + Hash + Clone + Debug;

    /// Iterator over all vertices in the graph.
    ///
    /// The order of vertices depends on the implementation. Algorithms that
    /// need a reproducible order sort the vertices themselves.
    type Vertices<'a>: Iterator<Item = &'a Self::Vertex>
    where
        Self: 'a;

    /// Returns an iterator over all vertices in the graph.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Returns true when the vertex is part of the graph.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool {
        self.vertices().any(|candidate| candidate == vertex)
    }
}
