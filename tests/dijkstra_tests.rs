use yen_ksp::algorithm::{Dijkstra, ShortestPathAlgorithm};
use yen_ksp::graph::DirectedGraph;
use yen_ksp::Error;

// The 5-vertex reference graph used throughout the test suite
fn reference_graph() -> DirectedGraph<u64> {
    DirectedGraph::from_adjacency(vec![
        vec![(1, 10), (2, 3)],
        vec![(2, 1), (3, 2)],
        vec![(1, 4), (3, 8), (4, 2)],
        vec![(4, 7)],
        vec![(3, 9)],
    ])
}

#[test]
fn computes_known_distances() {
    let graph = reference_graph();
    let dijkstra = Dijkstra::new();

    let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances[0], Some(0));
    assert_eq!(result.distances[1], Some(7)); // 0 -> 2 -> 1
    assert_eq!(result.distances[2], Some(3));
    assert_eq!(result.distances[3], Some(9)); // 0 -> 2 -> 1 -> 3
    assert_eq!(result.distances[4], Some(5)); // 0 -> 2 -> 4
}

#[test]
fn invalid_source_is_rejected() {
    let graph = reference_graph();
    let dijkstra = Dijkstra::new();

    match dijkstra.compute_shortest_paths(&graph, 99) {
        Err(Error::InvalidVertex(99)) => {}
        other => panic!("expected InvalidVertex(99), got {:?}", other),
    }
}

#[test]
fn unreachable_vertices_have_no_distance_or_predecessor() {
    // 0 -> 1, vertex 2 is isolated
    let graph: DirectedGraph<u64> =
        DirectedGraph::from_adjacency(vec![vec![(1, 4)], vec![], vec![]]);
    let dijkstra = Dijkstra::new();

    let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances[2], None);
    assert_eq!(result.predecessors[2], None);
    assert!(result.path_to(2).is_none());
}

#[test]
fn filter_skips_edges_entirely() {
    let graph = reference_graph();
    let dijkstra = Dijkstra::new();

    // Rejecting 0 -> 2 forces the direct edge to vertex 1
    let result = dijkstra
        .compute_filtered(&graph, 0, |u, v| !(u == 0 && v == 2))
        .unwrap();

    assert_eq!(result.distances[1], Some(10));
    assert_eq!(result.predecessors[1], Some(0));
    // Vertex 2 is now reached through 1
    assert_eq!(result.distances[2], Some(11));
}

#[test]
fn filter_can_disconnect_the_target() {
    let graph: DirectedGraph<u64> = DirectedGraph::from_adjacency(vec![vec![(1, 4)], vec![]]);
    let dijkstra = Dijkstra::new();

    let result = dijkstra.compute_filtered(&graph, 0, |_, _| false).unwrap();

    assert_eq!(result.distances[0], Some(0));
    assert_eq!(result.distances[1], None);
}

#[test]
fn reconstruction_yields_vertices_and_cumulative_costs() {
    let graph = reference_graph();
    let dijkstra = Dijkstra::new();

    let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();
    let path = result.path_to(3).unwrap();

    assert_eq!(path.vertices, vec![0, 2, 1, 3]);
    assert_eq!(path.cumulative_costs, vec![0, 3, 7, 9]);
    assert_eq!(path.total_cost(), 9);
}

#[test]
fn reconstruction_of_the_source_is_a_single_vertex() {
    let graph = reference_graph();
    let dijkstra = Dijkstra::new();

    let result = dijkstra.compute_shortest_paths(&graph, 2).unwrap();
    let path = result.path_to(2).unwrap();

    assert_eq!(path.vertices, vec![2]);
    assert_eq!(path.cumulative_costs, vec![0]);
    assert_eq!(path.total_cost(), 0);
}

#[test]
fn determinism_for_fixed_inputs() {
    let graph = reference_graph();
    let dijkstra = Dijkstra::new();

    let a = dijkstra.compute_shortest_paths(&graph, 0).unwrap();
    let b = dijkstra.compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(a.distances, b.distances);
    assert_eq!(a.predecessors, b.predecessors);
}
