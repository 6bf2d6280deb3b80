use crate::graph::{DirectedGraph, MutableGraph};
use rand::prelude::*;

/// Generates a random directed graph with `n` vertices and roughly
/// `edges_per_vertex` outgoing edges per vertex, with integer weights in
/// `1..=max_weight`.
///
/// Intended for tests and benchmarks; the same seed yields the same graph.
pub fn generate_random_graph(
    n: usize,
    edges_per_vertex: usize,
    max_weight: u64,
    seed: u64,
) -> DirectedGraph<u64> {
    assert!(n > 1, "need at least two vertices");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = DirectedGraph::with_vertices(n);

    for v in 0..n {
        for _ in 0..edges_per_vertex {
            let mut target = rng.gen_range(0..n);
            if target == v {
                target = (target + 1) % n;
            }

            let weight = rng.gen_range(1..=max_weight);
            graph.add_edge(v, target, weight);
        }
    }

    graph
}

/// Generates a layered graph where vertex `i` connects forward to the next
/// `width` vertices. Every vertex can reach every later vertex, which makes
/// the graph dense in distinct simple paths - useful for exercising deep
/// K-shortest-path queries.
pub fn generate_layered_graph(n: usize, width: usize, max_weight: u64, seed: u64) -> DirectedGraph<u64> {
    assert!(n > 1, "need at least two vertices");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = DirectedGraph::with_vertices(n);

    for v in 0..n - 1 {
        for offset in 1..=width.min(n - 1 - v) {
            let weight = rng.gen_range(1..=max_weight);
            graph.add_edge(v, v + offset, weight);
        }
    }

    graph
}
