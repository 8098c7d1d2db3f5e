use std::{
    collections::{hash_map, hash_set},
    fmt::{self, Debug},
    hash::Hash,
    slice,
};

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::error::{GraphError, Result};
use crate::graphs::{
    edges::{InsertEdge, WeightedEdges},
    forward::Forward,
    vertices::Vertices,
    weight::Weight,
};
use crate::lattices::set::Set;

/// Adjacency list representation of a weighted directed graph.
///
/// * `vertices` holds every vertex, including isolated ones and every edge
///   endpoint.
/// * `adjacency` maps a vertex to its out-neighbours in insertion order.
///   Inserting the same edge twice appends the destination twice.
/// * `weights` maps the ordered pair `(source, destination)` to the weight
///   recorded last for that pair.
///
/// Self-loops are rejected, as are negative or non-finite weights.
/// A graph is populated up front and then only read by queries, which
/// borrow it immutably.
#[derive(Debug, Clone, PartialEq)]
pub struct DiGraph<V: Eq + Hash, W> {
    vertices: Set<V>,
    adjacency: FxHashMap<V, Vec<V>>,
    weights: FxHashMap<V, FxHashMap<V, W>>,
}

impl<V: Eq + Hash, W> Default for DiGraph<V, W> {
    /// Empty graph with no vertices and no edges.
    fn default() -> Self {
        Self {
            vertices: Set::new(),
            adjacency: FxHashMap::default(),
            weights: FxHashMap::default(),
        }
    }
}

impl<V, W> DiGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Set::with_capacity(vertices),
            adjacency: FxHashMap::with_capacity_and_hasher(vertices, Default::default()),
            weights: FxHashMap::with_capacity_and_hasher(vertices, Default::default()),
        }
    }

    /// Builds a graph from `(source, destination, weight)` triples.
    ///
    /// Stops at the first rejected edge.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::new();
        for (source, destination, weight) in edges {
            graph.add_edge(source, destination, weight)?;
        }
        Ok(graph)
    }

    /// Registers a vertex.
    ///
    /// Adding a vertex twice is a no-op. Returns true when the vertex is new.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.vertices.insert(vertex)
    }

    /// Records a directed edge from `start` to `end`.
    ///
    /// Both endpoints are registered as vertices. `end` is appended to the
    /// out-neighbours of `start`, and the weight for `(start, end)` is stored,
    /// replacing any earlier weight for the same pair.
    ///
    /// Fails with [`GraphError::InvalidEdge`] when `start == end` and with
    /// [`GraphError::InvalidWeight`] for a negative or non-finite weight.
    /// A rejected edge leaves the graph unchanged.
    pub fn add_edge(&mut self, start: V, end: V, weight: W) -> Result<()> {
        if start == end {
            warn!(vertex = ?start, "rejected self-loop");
            return Err(GraphError::self_loop(&start));
        }

        if !weight.is_valid() {
            warn!(from = ?start, to = ?end, ?weight, "rejected invalid edge weight");
            return Err(GraphError::invalid_weight(&start, &end, &weight));
        }

        self.add_vertex(start.clone());
        self.add_vertex(end.clone());

        self.weights
            .entry(start.clone())
            .or_default()
            .insert(end.clone(), weight);
        self.adjacency.entry(start).or_default().push(end);

        Ok(())
    }

    /// Out-neighbours of `vertex` in insertion order.
    ///
    /// Empty for sinks and for vertices the graph does not know.
    pub fn neighbors(&self, vertex: &V) -> &[V] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }

    fn adjacency_len(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl<V, W> Vertices for DiGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    type Vertex = V;

    type Vertices<'a>
        = hash_set::Iter<'a, V>
    where
        Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_> {
        self.vertices.iter()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }
}

impl<V, W> Forward for DiGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    type Successors<'a>
        = slice::Iter<'a, V>
    where
        Self: 'a;

    fn successors(&self, vertex: &V) -> Self::Successors<'_> {
        self.neighbors(vertex).iter()
    }

    fn outgoing_degree(&self, vertex: &V) -> usize {
        self.neighbors(vertex).len()
    }
}

impl<V, W> WeightedEdges for DiGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    type Weight = W;

    type Edges<'a>
        = DiGraphEdges<'a, V, W>
    where
        Self: 'a;

    fn edges(&self) -> Self::Edges<'_> {
        DiGraphEdges::new(self)
    }

    fn edge_count(&self) -> usize {
        self.adjacency_len()
    }

    fn weight(&self, from: &V, to: &V) -> Result<W> {
        self.weights
            .get(from)
            .and_then(|outgoing| outgoing.get(to))
            .copied()
            .ok_or_else(|| GraphError::edge_not_found(from, to))
    }
}

impl<V, W> InsertEdge for DiGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    fn insert_edge(&mut self, endpoints: (V, V), weight: W) -> Result<()> {
        let (start, end) = endpoints;
        self.add_edge(start, end, weight)
    }
}

/// Iterator over the edges of a [`DiGraph`].
///
/// Walks the adjacency lists source by source and yields
/// `(source, weight, destination)` triples.
pub struct DiGraphEdges<'a, V: Eq + Hash, W> {
    graph: &'a DiGraph<V, W>,
    sources: hash_map::Iter<'a, V, Vec<V>>,
    /// Source currently being walked and its remaining destinations.
    current: Option<(&'a V, slice::Iter<'a, V>)>,
}

impl<'a, V: Eq + Hash, W> DiGraphEdges<'a, V, W> {
    fn new(graph: &'a DiGraph<V, W>) -> Self {
        Self {
            graph,
            sources: graph.adjacency.iter(),
            current: None,
        }
    }
}

impl<'a, V, W> Iterator for DiGraphEdges<'a, V, W>
where
    V: Eq + Hash,
    W: Copy,
{
    type Item = (&'a V, W, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((source, destinations)) = &mut self.current {
                if let Some(destination) = destinations.next() {
                    let weight = self
                        .graph
                        .weights
                        .get(*source)
                        .and_then(|outgoing| outgoing.get(destination));
                    // Every adjacency entry has a weight by construction.
                    debug_assert!(weight.is_some());
                    if let Some(&weight) = weight {
                        return Some((*source, weight, destination));
                    }
                    continue;
                }
            }

            let (source, destinations) = self.sources.next()?;
            self.current = Some((source, destinations.iter()));
        }
    }
}

impl<V, W> fmt::Display for DiGraph<V, W>
where
    V: Eq + Hash + Ord + fmt::Display,
    W: fmt::Display,
{
    /// One line per vertex in ascending order, listing its out-neighbours
    /// with their weights.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge_count: usize = self.adjacency.values().map(Vec::len).sum();
        writeln!(
            f,
            "DiGraph with {} vertices and {} edges",
            self.vertices.len(),
            edge_count
        )?;

        let mut vertices: Vec<&V> = self.vertices.iter().collect();
        vertices.sort_unstable();

        for vertex in vertices {
            write!(f, "  {vertex}")?;

            if let Some(destinations) = self.adjacency.get(vertex) {
                let outgoing = self.weights.get(vertex);
                for (position, destination) in destinations.iter().enumerate() {
                    let separator = if position == 0 { " -> " } else { ", " };
                    match outgoing.and_then(|weights| weights.get(destination)) {
                        Some(weight) => write!(f, "{separator}{destination} ({weight})")?,
                        None => write!(f, "{separator}{destination}")?,
                    }
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
