//! Single-source shortest paths over weighted directed graphs.
//!
//! A [`DiGraph`] is populated with vertices and non-negative weighted edges,
//! then queried with [`compute`] (or [`shortest_paths`]) for the distance and
//! predecessor of every vertex as seen from a start vertex. [`reconstruct`]
//! turns the predecessors into the path to a chosen end vertex.
//!
//! The search is Dijkstra's algorithm with a linear scan for the next vertex
//! to settle, O(V²) overall, intended for small graphs.
//!
//! ```
//! use dijkstra_naive::{compute, reconstruct, DiGraph, Distance};
//!
//! let graph = DiGraph::from_edges([("a", "b", 2_u32), ("b", "c", 2), ("a", "c", 5)])?;
//! let (distances, predecessors) = compute(&graph, &"a")?;
//!
//! assert_eq!(distances.get(&"c"), Some(Distance::Finite(4)));
//! assert_eq!(reconstruct(&predecessors, &"a", &"c")?, vec!["a", "b", "c"]);
//! # Ok::<(), dijkstra_naive::GraphError>(())
//! ```

pub mod error;
pub mod graphs;
pub mod lattices;

pub use error::{GraphError, Result};
pub use graphs::{
    digraph::DiGraph,
    dijkstra::{compute, shortest_paths, Dijkstra, ShortestPaths},
    distances::{DistanceMap, PredecessorMap},
    graph::Graph,
    path::{path_weight, reconstruct, Path},
    weight::Weight,
};
pub use lattices::distance::Distance;
