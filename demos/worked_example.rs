//! Shortest paths from `a` in the eight-vertex example graph.
//!
//! Run with `RUST_LOG=dijkstra_naive=trace` to watch vertices settle.

use dijkstra_naive::{shortest_paths, DiGraph, GraphError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GraphError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut graph = DiGraph::from_edges([
        ('a', 'b', 1_u32),
        ('a', 'c', 4),
        ('a', 'd', 3),
        ('b', 'e', 4),
        ('c', 'e', 2),
        ('d', 'f', 1),
        ('e', 'f', 2),
        ('e', 'g', 3),
        ('f', 'h', 1),
        ('g', 'h', 4),
    ])?;

    if let Err(err) = graph.add_edge('h', 'h', 1) {
        println!("rejected: {err}");
    }

    println!("{graph}");

    let paths = shortest_paths(&graph, &'a')?;

    let mut distances: Vec<_> = paths.distances().iter().collect();
    distances.sort_unstable_by_key(|(vertex, _)| **vertex);
    for (vertex, distance) in distances {
        println!("a -> {vertex}: {distance}");
    }

    let path = paths.path_to(&'h')?;
    let rendered: Vec<String> = path.iter().map(char::to_string).collect();
    println!("shortest path: {}", rendered.join(" -> "));

    Ok(())
}
