pub mod digraph;
pub mod dijkstra;
pub mod distances;
pub mod edges;
pub mod forward;
pub mod graph;
pub mod path;
pub mod vertices;
pub mod visited;
pub mod weight;
