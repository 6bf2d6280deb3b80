use crate::graph::traits::{Graph, MutableGraph, Weight};

/// A directed graph implementation using adjacency lists.
///
/// Vertices are indexed `0..N-1`; each adjacency list is an ordered sequence
/// of `(neighbor, weight)` pairs. Edge iteration order is the insertion order,
/// which keeps searches deterministic for a fixed graph.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex: indexed by vertex ID
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph { adjacency: Vec::new() }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Builds a graph directly from per-vertex `(neighbor, weight)` lists.
    ///
    /// Used by the wire decoder, which receives the graph in exactly this
    /// shape. Neighbor indices are not range-checked here; `Dijkstra` and the
    /// engine validate the vertices they are asked to search from, and the
    /// decoder rejects out-of-range neighbors before constructing the graph.
    pub fn from_adjacency(adjacency: Vec<Vec<(usize, W)>>) -> Self {
        DirectedGraph { adjacency }
    }

    /// Per-vertex adjacency view, used by the client to re-derive path costs
    pub fn adjacency(&self) -> &[Vec<(usize, W)>] {
        &self.adjacency
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.adjacency.len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|edges| edges.iter().any(|(target, _)| *target == to))
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.adjacency.get(from).and_then(|edges| {
            edges
                .iter()
                .find(|(target, _)| *target == to)
                .map(|(_, weight)| *weight)
        })
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }

        self.adjacency[from].push((to, weight));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_and_query_edges() {
        let mut graph: DirectedGraph<u64> = DirectedGraph::with_vertices(3);
        assert!(graph.add_edge(0, 1, 5));
        assert!(graph.add_edge(1, 2, 7));
        assert!(!graph.add_edge(0, 9, 1));

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert_eq!(graph.edge_weight(1, 2), Some(7));
        assert_eq!(graph.edge_weight(2, 1), None);
    }

    #[test]
    fn from_adjacency_preserves_order() {
        let graph: DirectedGraph<u64> =
            DirectedGraph::from_adjacency(vec![vec![(1, 10), (2, 3)], vec![], vec![]]);
        let edges: Vec<_> = graph.outgoing_edges(0).collect();
        assert_eq!(edges, vec![(1, 10), (2, 3)]);
    }
}
