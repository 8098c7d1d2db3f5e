use std::{fmt::Debug, hash::Hash};

use bit_vec::BitVec;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::graphs::{
    distances::{DistanceMap, PredecessorMap},
    graph::Graph,
    path::{reconstruct, Path},
    visited::Visited,
    weight::Weight,
};
use crate::lattices::{
    distance::Distance,
    lattice::{BoundedLattice, MeetSemiLattice},
};

/// Single-source shortest path search with linear-scan minimum selection.
///
/// Every step settles one vertex: the unvisited vertex with the smallest
/// finite distance, ties going to the smallest vertex in `Ord` order. The
/// settled vertex's edges to unvisited vertices are then relaxed. Selection
/// scans all vertices, so a full search is O(V²) plus O(E) relaxations.
///
/// The search is an iterator over `(vertex, distance)` pairs in settle order.
/// It ends once no unvisited vertex has a finite distance. The remaining
/// vertices are unreachable, and settling them could not change any distance.
///
/// Vertices are numbered by their position in sorted order, so distances,
/// predecessors and the visited set are dense vectors for the duration of
/// the search.
///
/// A relaxation whose sum does not fit in the weight type is dropped: it is
/// longer than every representable distance. If such a vertex is never
/// reached by a representable path, the search fails with
/// [`GraphError::WeightOverflow`] instead of reporting it unreachable.
pub struct Dijkstra<'g, G>
where
    G: Graph,
    G::Vertex: Ord,
{
    graph: &'g G,
    /// Vertices in ascending order; a vertex's index is its position here.
    vertices: Vec<&'g G::Vertex>,
    index: FxHashMap<&'g G::Vertex, usize>,
    distances: Vec<Distance<G::Weight>>,
    predecessors: Vec<Option<usize>>,
    visited: BitVec,
    /// Settled vertex whose edge to this vertex overflowed, first one only.
    overflowed: Vec<Option<usize>>,
    start: usize,
    /// Set once a step has failed; the iterator is fused from then on.
    failed: bool,
}

impl<'g, G> Dijkstra<'g, G>
where
    G: Graph,
    G::Vertex: Ord,
{
    /// Prepares a search from `start`.
    ///
    /// Fails with [`GraphError::UnknownVertex`] when `start` is not a vertex
    /// of `graph`.
    pub fn new(graph: &'g G, start: &G::Vertex) -> Result<Self> {
        let mut vertices: Vec<&'g G::Vertex> = graph.vertices().collect();
        vertices.sort_unstable();

        let index: FxHashMap<&'g G::Vertex, usize> = vertices
            .iter()
            .enumerate()
            .map(|(position, &vertex)| (vertex, position))
            .collect();

        let start = *index
            .get(start)
            .ok_or_else(|| GraphError::unknown_vertex(start))?;

        let count = vertices.len();
        let mut distances = vec![Distance::top(); count];
        distances[start] = Distance::bottom();

        Ok(Self {
            graph,
            vertices,
            index,
            distances,
            predecessors: vec![None; count],
            visited: BitVec::from_elem(count, false),
            overflowed: vec![None; count],
            start,
            failed: false,
        })
    }

    /// Current distance of `vertex`: final once the vertex is settled,
    /// tentative before.
    pub fn distance(&self, vertex: &G::Vertex) -> Option<Distance<G::Weight>> {
        self.index
            .get(vertex)
            .map(|&position| self.distances[position])
    }

    pub fn is_settled(&self, vertex: &G::Vertex) -> bool {
        self.index
            .get(vertex)
            .is_some_and(|position| self.visited.is_visited(position))
    }

    /// Index of the unvisited vertex with the smallest finite distance.
    fn select(&self) -> Option<usize> {
        let mut best: Option<usize> = None;

        for (candidate, distance) in self.distances.iter().enumerate() {
            if self.visited.is_visited(&candidate) || !distance.is_finite() {
                continue;
            }
            // Strictly smaller only, so the lowest index wins a tie.
            match best {
                Some(current) if self.distances[current] <= *distance => {}
                _ => best = Some(candidate),
            }
        }

        best
    }

    /// First unsettled vertex that is reachable only through paths too long
    /// for the weight type.
    fn unrepresentable(&self) -> Option<(usize, usize)> {
        self.overflowed
            .iter()
            .enumerate()
            .find_map(|(position, &from)| match from {
                Some(from)
                    if !self.visited.is_visited(&position)
                        && !self.distances[position].is_finite() =>
                {
                    Some((from, position))
                }
                _ => None,
            })
    }

    /// Settles one vertex and relaxes its outgoing edges.
    fn settle(&mut self) -> Result<Option<usize>> {
        let Some(vertex) = self.select() else {
            return match self.unrepresentable() {
                Some((from, to)) => {
                    let (from, to) = (self.vertices[from], self.vertices[to]);
                    debug!(?from, ?to, "distance overflows the weight type");
                    Err(GraphError::weight_overflow(from, to))
                }
                None => Ok(None),
            };
        };

        let graph = self.graph;
        let from = self.vertices[vertex];
        let base = self.distances[vertex];
        trace!(vertex = ?from, distance = ?base, "settling vertex");

        for successor in graph.successors(from) {
            let Some(&next) = self.index.get(successor) else {
                return Err(GraphError::unknown_vertex(successor));
            };
            if self.visited.is_visited(&next) {
                continue;
            }

            let Some(candidate) = base.extend(graph.weight(from, successor)?) else {
                if self.overflowed[next].is_none() {
                    trace!(vertex = ?successor, via = ?from, "relaxation overflowed");
                    self.overflowed[next] = Some(vertex);
                }
                continue;
            };
            let relaxed = self.distances[next].meet(&candidate);
            if relaxed != self.distances[next] {
                trace!(vertex = ?successor, via = ?from, distance = ?relaxed, "relaxed edge");
                self.distances[next] = relaxed;
                self.predecessors[next] = Some(vertex);
            }
        }

        self.visited.visit(vertex);
        Ok(Some(vertex))
    }

    /// Converts the search state into owned result maps covering every
    /// vertex of the graph.
    ///
    /// Distances of vertices that are not settled yet are tentative, so this
    /// is normally called once the iterator is exhausted.
    pub fn into_shortest_paths(self) -> ShortestPaths<G::Vertex, G::Weight> {
        let count = self.vertices.len();
        let mut distances = DistanceMap::with_capacity(count);
        let mut predecessors = PredecessorMap::with_capacity(count);

        for (position, &vertex) in self.vertices.iter().enumerate() {
            distances.insert(vertex.clone(), self.distances[position]);
            predecessors.insert(
                vertex.clone(),
                self.predecessors[position].map(|previous| self.vertices[previous].clone()),
            );
        }

        ShortestPaths {
            start: self.vertices[self.start].clone(),
            distances,
            predecessors,
        }
    }
}

impl<'g, G> Iterator for Dijkstra<'g, G>
where
    G: Graph,
    G::Vertex: Ord,
{
    type Item = Result<(&'g G::Vertex, Distance<G::Weight>)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.settle() {
            Ok(Some(vertex)) => Some(Ok((self.vertices[vertex], self.distances[vertex]))),
            Ok(None) => None,
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Outcome of a completed search from one start vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<V: Eq + Hash, W> {
    start: V,
    distances: DistanceMap<V, W>,
    predecessors: PredecessorMap<V>,
}

impl<V, W> ShortestPaths<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    pub fn start(&self) -> &V {
        &self.start
    }

    pub fn distance(&self, vertex: &V) -> Option<Distance<W>> {
        self.distances.get(vertex)
    }

    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.predecessor(vertex)
    }

    pub fn distances(&self) -> &DistanceMap<V, W> {
        &self.distances
    }

    pub fn predecessors(&self) -> &PredecessorMap<V> {
        &self.predecessors
    }

    /// Shortest path from the start vertex to `end`.
    pub fn path_to(&self, end: &V) -> Result<Path<V>> {
        reconstruct(&self.predecessors, &self.start, end)
    }

    pub fn into_parts(self) -> (DistanceMap<V, W>, PredecessorMap<V>) {
        (self.distances, self.predecessors)
    }
}

/// Runs a search from `start` to completion.
///
/// Each call owns its visited set and result maps; the graph is only read.
pub fn shortest_paths<G>(
    graph: &G,
    start: &G::Vertex,
) -> Result<ShortestPaths<G::Vertex, G::Weight>>
where
    G: Graph,
    G::Vertex: Ord,
{
    let mut search = Dijkstra::new(graph, start)?;
    debug!(?start, vertices = graph.vertex_count(), "computing shortest paths");

    let mut reached = 0usize;
    for step in search.by_ref() {
        step?;
        reached += 1;
    }

    debug!(?start, reached, "shortest paths computed");
    Ok(search.into_shortest_paths())
}

/// Distance and predecessor of every vertex of `graph` on the shortest path
/// from `start`.
///
/// Fails with [`GraphError::UnknownVertex`] when `start` is not in the graph.
pub fn compute<G>(
    graph: &G,
    start: &G::Vertex,
) -> Result<(DistanceMap<G::Vertex, G::Weight>, PredecessorMap<G::Vertex>)>
where
    G: Graph,
    G::Vertex: Ord,
{
    shortest_paths(graph, start).map(ShortestPaths::into_parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeSet;

    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::graphs::{
        digraph::DiGraph, edges::WeightedEdges, path::path_weight, vertices::Vertices,
    };

    fn worked_example() -> DiGraph<char, u32> {
        DiGraph::from_edges([
            ('a', 'b', 1),
            ('a', 'c', 4),
            ('a', 'd', 3),
            ('b', 'e', 4),
            ('c', 'e', 2),
            ('d', 'f', 1),
            ('e', 'f', 2),
            ('e', 'g', 3),
            ('f', 'h', 1),
            ('g', 'h', 4),
        ])
        .expect("valid edges")
    }

    #[test]
    fn worked_example_distances_and_path() {
        let graph = worked_example();
        let (distances, predecessors) = compute(&graph, &'a').unwrap();

        let expected = [
            ('a', 0),
            ('b', 1),
            ('c', 4),
            ('d', 3),
            ('e', 6),
            ('f', 4),
            ('g', 9),
            ('h', 5),
        ];
        assert_eq!(distances.len(), expected.len());
        for (vertex, distance) in expected {
            assert_eq!(
                distances.get(&vertex),
                Some(Distance::Finite(distance)),
                "distance to {vertex}"
            );
        }

        assert_eq!(predecessors.predecessor(&'a'), None);
        assert_eq!(
            reconstruct(&predecessors, &'a', &'h'),
            Ok(vec!['a', 'd', 'f', 'h'])
        );
    }

    #[test]
    fn unknown_start_is_rejected() {
        let graph = worked_example();
        assert_eq!(
            compute(&graph, &'z').unwrap_err(),
            GraphError::UnknownVertex("'z'".to_string())
        );
        assert!(Dijkstra::new(&graph, &'z').is_err());
    }

    #[test]
    fn start_is_at_distance_zero_with_single_vertex_path() {
        let graph = worked_example();
        let paths = shortest_paths(&graph, &'e').unwrap();

        assert_eq!(paths.start(), &'e');
        assert_eq!(paths.distance(&'e'), Some(Distance::Finite(0)));
        assert_eq!(paths.predecessor(&'e'), None);
        assert_eq!(paths.path_to(&'e'), Ok(vec!['e']));
    }

    #[test]
    fn unconnected_vertex_is_infinite_and_has_no_path() {
        let mut graph = DiGraph::<&str, u32>::new();
        graph.add_vertex("x");
        graph.add_vertex("y");

        let paths = shortest_paths(&graph, &"x").unwrap();
        assert_eq!(paths.distance(&"y"), Some(Distance::Infinite));
        assert_eq!(paths.predecessor(&"y"), None);
        assert!(!paths.distances().is_reachable(&"y"));
        assert!(matches!(
            paths.path_to(&"y"),
            Err(GraphError::NoPathExists { .. })
        ));
    }

    #[test]
    fn edges_point_forward_only() {
        // Everything upstream of the start stays unreachable.
        let graph = worked_example();
        let paths = shortest_paths(&graph, &'f').unwrap();

        assert_eq!(paths.distance(&'h'), Some(Distance::Finite(1)));
        for vertex in ['a', 'b', 'c', 'd', 'e', 'g'] {
            assert_eq!(paths.distance(&vertex), Some(Distance::Infinite));
            assert!(paths.path_to(&vertex).is_err());
        }
        assert_eq!(paths.distances().reachable_count(), 2);
    }

    #[test]
    fn repeated_computation_is_identical() {
        let graph = worked_example();
        let first = compute(&graph, &'a').unwrap();
        let second = compute(&graph, &'a').unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn ties_settle_the_smaller_vertex_first() {
        // Two equal-cost routes to d; b is settled before c and claims d.
        let graph =
            DiGraph::from_edges([("a", "c", 1_u32), ("a", "b", 1), ("c", "d", 1), ("b", "d", 1)])
                .unwrap();

        let order: Vec<_> = Dijkstra::new(&graph, &"a")
            .unwrap()
            .map(|step| step.map(|(vertex, _)| *vertex))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(order, vec!["a", "b", "c", "d"]);

        let paths = shortest_paths(&graph, &"a").unwrap();
        assert_eq!(paths.predecessor(&"d"), Some(&"b"));
        assert_eq!(paths.path_to(&"d"), Ok(vec!["a", "b", "d"]));
    }

    #[test]
    fn settle_order_is_non_decreasing_and_skips_unreachable() {
        let mut graph = worked_example();
        graph.add_vertex('z');

        let mut search = Dijkstra::new(&graph, &'a').unwrap();
        assert_eq!(search.distance(&'h'), Some(Distance::Infinite));
        assert!(!search.is_settled(&'a'));

        let settled: Vec<_> = search.by_ref().collect::<Result<_>>().unwrap();
        assert_eq!(settled.len(), 8, "z is never settled");
        assert!(settled.windows(2).all(|pair| pair[0].1 <= pair[1].1));
        assert_eq!(settled[0], (&'a', Distance::Finite(0)));

        assert!(search.is_settled(&'h'));
        assert!(!search.is_settled(&'z'));
        assert_eq!(search.distance(&'h'), Some(Distance::Finite(5)));
        assert!(search.next().is_none());

        let paths = search.into_shortest_paths();
        assert_eq!(paths.distance(&'z'), Some(Distance::Infinite));
        assert_eq!(paths.distances().len(), 9);
        assert_eq!(paths.predecessors().len(), 9);
    }

    #[test]
    fn parallel_edges_use_last_recorded_weight() {
        let mut graph = DiGraph::new();
        graph.add_edge(0_u32, 1, 5_u32).unwrap();
        graph.add_edge(0, 2, 1).unwrap();
        graph.add_edge(2, 1, 1).unwrap();
        graph.add_edge(0, 1, 1).unwrap();

        let paths = shortest_paths(&graph, &0).unwrap();
        assert_eq!(paths.distance(&1), Some(Distance::Finite(1)));
        assert_eq!(paths.path_to(&1), Ok(vec![0, 1]));
    }

    #[test]
    fn zero_weights_and_float_weights() {
        let graph = DiGraph::from_edges([
            ("s", "t", 0.5_f64),
            ("t", "u", 0.0),
            ("s", "u", 0.75),
        ])
        .unwrap();

        let paths = shortest_paths(&graph, &"s").unwrap();
        assert_eq!(paths.distance(&"u"), Some(Distance::Finite(0.5)));
        assert_eq!(paths.path_to(&"u"), Ok(vec!["s", "t", "u"]));
    }

    #[test]
    fn overflowing_route_does_not_beat_a_direct_edge() {
        // a -> b -> c weighs 300, past u8::MAX; the direct edge wins.
        let graph =
            DiGraph::from_edges([('a', 'b', 200_u8), ('b', 'c', 100), ('a', 'c', 250)]).unwrap();

        let paths = shortest_paths(&graph, &'a').unwrap();
        assert_eq!(paths.distance(&'c'), Some(Distance::Finite(250)));
        assert_eq!(paths.predecessor(&'c'), Some(&'a'));
        assert_eq!(paths.path_to(&'c'), Ok(vec!['a', 'c']));
    }

    #[test]
    fn overflowed_vertex_is_still_reached_by_a_shorter_route() {
        // b -> c overflows while c is unreached; d -> c later fits.
        let graph = DiGraph::from_edges([
            ('a', 'b', 200_u8),
            ('b', 'c', 100),
            ('a', 'd', 201),
            ('d', 'c', 10),
        ])
        .unwrap();

        let paths = shortest_paths(&graph, &'a').unwrap();
        assert_eq!(paths.distance(&'c'), Some(Distance::Finite(211)));
        assert_eq!(paths.path_to(&'c'), Ok(vec!['a', 'd', 'c']));
    }

    #[test]
    fn unrepresentable_distance_is_an_error() {
        let graph = DiGraph::from_edges([('a', 'b', 200_u8), ('b', 'c', 100)]).unwrap();

        let overflow = GraphError::WeightOverflow {
            from: "'b'".to_string(),
            to: "'c'".to_string(),
        };
        assert_eq!(compute(&graph, &'a').unwrap_err(), overflow);

        let mut search = Dijkstra::new(&graph, &'a').unwrap();
        assert_eq!(search.next(), Some(Ok((&'a', Distance::Finite(0)))));
        assert_eq!(search.next(), Some(Ok((&'b', Distance::Finite(200)))));
        assert_eq!(search.next(), Some(Err(overflow)));
        assert_eq!(search.next(), None);
    }

    #[test]
    fn distances_up_to_the_top_of_u64() {
        let graph = DiGraph::from_edges([
            ('a', 'b', u64::MAX - 1),
            ('b', 'c', 1),
            ('b', 'd', 2),
            ('a', 'd', 3),
        ])
        .unwrap();

        let paths = shortest_paths(&graph, &'a').unwrap();
        assert_eq!(paths.distance(&'c'), Some(Distance::Finite(u64::MAX)));
        assert_eq!(paths.distance(&'d'), Some(Distance::Finite(3)));
        assert_eq!(path_weight(&graph, &paths.path_to(&'c').unwrap()), Ok(u64::MAX));

        let graph = DiGraph::from_edges([('a', 'b', u64::MAX - 1), ('b', 'c', 2)]).unwrap();
        assert!(matches!(
            compute(&graph, &'a'),
            Err(GraphError::WeightOverflow { .. })
        ));
    }

    /// Shortest distance to every reachable vertex by enumerating all simple
    /// paths from `start`.
    fn brute_force(graph: &DiGraph<u8, u32>, start: u8) -> FxHashMap<u8, u32> {
        fn walk(
            graph: &DiGraph<u8, u32>,
            vertex: u8,
            cost: u32,
            on_path: &mut Vec<u8>,
            best: &mut FxHashMap<u8, u32>,
        ) {
            let entry = best.entry(vertex).or_insert(cost);
            if cost < *entry {
                *entry = cost;
            }

            let distinct: BTreeSet<u8> = graph.neighbors(&vertex).iter().copied().collect();
            for next in distinct {
                if on_path.contains(&next) {
                    continue;
                }
                let weight = graph.weight(&vertex, &next).unwrap();
                on_path.push(next);
                walk(graph, next, cost + weight, on_path, best);
                on_path.pop();
            }
        }

        let mut best = FxHashMap::default();
        walk(graph, start, 0, &mut vec![start], &mut best);
        best
    }

    fn build<W: Weight>(edges: &[(u8, u8, W)], start: u8) -> DiGraph<u8, W> {
        let mut graph = DiGraph::new();
        graph.add_vertex(start);
        for &(from, to, weight) in edges {
            if from != to {
                graph.add_edge(from, to, weight).unwrap();
            }
        }
        graph
    }

    prop_compose! {
        fn random_weighted_edges()
            (edges in prop::collection::vec((0u8..7, 0u8..7, 0u32..20), 0..=24))
            -> Vec<(u8, u8, u32)>
        {
            edges
        }
    }

    prop_compose! {
        fn heavy_weighted_edges()
            (edges in prop::collection::vec((0u8..6, 0u8..6, 100u8..=255), 0..=16))
            -> Vec<(u8, u8, u8)>
        {
            edges
        }
    }

    proptest! {
        // Distances match exhaustive enumeration, and every reconstructed
        // path starts at the start, ends at the target, and weighs exactly
        // the reported distance.
        #[test]
        fn prop_distances_match_brute_force(
            edges in random_weighted_edges(),
            start in 0u8..7,
        ) {
            let graph = build(&edges, start);
            let paths = shortest_paths(&graph, &start).unwrap();
            let reference = brute_force(&graph, start);

            prop_assert_eq!(paths.distances().len(), graph.vertex_count());

            for &vertex in graph.vertices() {
                match reference.get(&vertex) {
                    Some(&expected) => {
                        prop_assert_eq!(paths.distance(&vertex), Some(Distance::Finite(expected)));

                        let path = paths.path_to(&vertex).unwrap();
                        prop_assert_eq!(path.first(), Some(&start));
                        prop_assert_eq!(path.last(), Some(&vertex));
                        prop_assert_eq!(path_weight(&graph, &path).unwrap(), expected);
                    }
                    None => {
                        prop_assert_eq!(paths.distance(&vertex), Some(Distance::Infinite));
                        let is_no_path = matches!(
                            paths.path_to(&vertex),
                            Err(GraphError::NoPathExists { .. })
                        );
                        prop_assert!(is_no_path, "unreachable {} must have no path", vertex);
                    }
                }
            }
        }

        #[test]
        fn prop_compute_is_deterministic(
            edges in random_weighted_edges(),
            start in 0u8..7,
        ) {
            let graph = build(&edges, start);
            prop_assert_eq!(compute(&graph, &start).unwrap(), compute(&graph, &start).unwrap());
        }

        // With u8 weights the search fails exactly when some reachable
        // vertex lies further than u8::MAX, and is exact otherwise.
        #[test]
        fn prop_u8_search_fails_only_past_the_weight_range(
            edges in heavy_weighted_edges(),
            start in 0u8..6,
        ) {
            let graph = build(&edges, start);
            let wide: Vec<(u8, u8, u32)> = edges
                .iter()
                .map(|&(from, to, weight)| (from, to, u32::from(weight)))
                .collect();
            let reference = brute_force(&build(&wide, start), start);
            let too_far = reference.values().any(|&distance| distance > u32::from(u8::MAX));

            match shortest_paths(&graph, &start) {
                Ok(paths) => {
                    prop_assert!(!too_far, "a distance past u8::MAX went unreported");
                    for (&vertex, &expected) in &reference {
                        let expected = u8::try_from(expected).unwrap();
                        prop_assert_eq!(paths.distance(&vertex), Some(Distance::Finite(expected)));
                    }
                }
                Err(err) => {
                    let is_overflow = matches!(err, GraphError::WeightOverflow { .. });
                    prop_assert!(is_overflow, "unexpected error {:?}", err);
                    prop_assert!(too_far, "overflow reported with every distance in range");
                }
            }
        }
    }

    #[test]
    fn random_stress_matches_bellman_ford() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x_4449_4A4B_5354_5241);

        for _case in 0..50 {
            let vertex_count: u32 = rng.random_range(1..=40);
            let edge_count = rng.random_range(0..=160usize);

            let mut graph = DiGraph::new();
            for vertex in 0..vertex_count {
                graph.add_vertex(vertex);
            }
            for _ in 0..edge_count {
                let from = rng.random_range(0..vertex_count);
                let to = rng.random_range(0..vertex_count);
                if from != to {
                    graph.add_edge(from, to, rng.random_range(0..100u64)).unwrap();
                }
            }

            let start = rng.random_range(0..vertex_count);
            let paths = shortest_paths(&graph, &start).unwrap();

            // Reference Bellman-Ford relaxation over the recorded edges.
            let mut reference: Vec<Option<u64>> = vec![None; vertex_count as usize];
            reference[start as usize] = Some(0);
            for _round in 0..vertex_count {
                for (&from, weight, &to) in graph.edges() {
                    if let Some(base) = reference[from as usize] {
                        let candidate = base + weight;
                        if reference[to as usize].is_none_or(|current| candidate < current) {
                            reference[to as usize] = Some(candidate);
                        }
                    }
                }
            }

            for vertex in 0..vertex_count {
                let expected = reference[vertex as usize]
                    .map_or(Distance::Infinite, Distance::Finite);
                assert_eq!(paths.distance(&vertex), Some(expected), "vertex {vertex}");

                if let Some(distance) = expected.finite() {
                    let path = paths.path_to(&vertex).unwrap();
                    assert_eq!(path_weight(&graph, &path).unwrap(), distance);
                }
            }
        }
    }
}
