//! Error type shared by graph construction, shortest path search and path
//! reconstruction.

use std::fmt::Debug;

use thiserror::Error;

/// Errors reported by graph operations.
///
/// Vertices are carried as their `Debug` rendering so the error type does not
/// depend on the vertex type of the graph that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A query referenced a vertex that is not part of the graph.
    #[error("unknown vertex {0}")]
    UnknownVertex(String),

    /// A weight lookup for an ordered pair that was never recorded.
    #[error("no edge from {from} to {to}")]
    EdgeNotFound { from: String, to: String },

    /// The end vertex cannot be reached from the start vertex.
    #[error("no path from {start} to {end}")]
    NoPathExists { start: String, end: String },

    /// An edge whose endpoints are the same vertex.
    #[error("self-loop on {0} is not allowed")]
    InvalidEdge(String),

    /// A negative or non-finite edge weight.
    #[error("invalid weight {weight} on edge from {from} to {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: String,
    },

    /// A path length that does not fit in the weight type.
    #[error("path length overflows the weight type on edge from {from} to {to}")]
    WeightOverflow { from: String, to: String },
}

impl GraphError {
    pub(crate) fn unknown_vertex<V: Debug>(vertex: &V) -> Self {
        GraphError::UnknownVertex(format!("{vertex:?}"))
    }

    pub(crate) fn edge_not_found<V: Debug>(from: &V, to: &V) -> Self {
        GraphError::EdgeNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn no_path<V: Debug>(start: &V, end: &V) -> Self {
        GraphError::NoPathExists {
            start: format!("{start:?}"),
            end: format!("{end:?}"),
        }
    }

    pub(crate) fn self_loop<V: Debug>(vertex: &V) -> Self {
        GraphError::InvalidEdge(format!("{vertex:?}"))
    }

    pub(crate) fn weight_overflow<V: Debug>(from: &V, to: &V) -> Self {
        GraphError::WeightOverflow {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn invalid_weight<V: Debug, W: Debug>(from: &V, to: &V, weight: &W) -> Self {
        GraphError::InvalidWeight {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            weight: format!("{weight:?}"),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
