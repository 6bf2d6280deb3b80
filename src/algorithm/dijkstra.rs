use crate::algorithm::traits::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with an optional edge filter.
///
/// The filtered variant drives the deviation searches of Yen's algorithm: an
/// edge rejected by the filter is skipped entirely - never relaxed, never
/// counted toward the result.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Compute shortest paths from `source`, skipping every edge `(u, v)` for
    /// which `filter(u, v)` returns false.
    ///
    /// Deterministic for a fixed (graph, source, filter); no tie-break among
    /// equal-cost predecessors is guaranteed beyond that.
    pub fn compute_filtered<W, G, F>(
        &self,
        graph: &G,
        source: usize,
        filter: F,
    ) -> Result<ShortestPathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
        F: Fn(usize, usize) -> bool,
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();

        // Unreached vertices keep None distance and None predecessor
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];

        distances[source] = Some(W::zero());

        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Skip stale queue entries for which a shorter path is known
            if let Some(current_dist) = distances[u] {
                if current_dist < dist_u {
                    continue;
                }
            }

            for (v, weight) in graph.outgoing_edges(u) {
                if !filter(u, v) {
                    continue;
                }

                let new_dist = dist_u + weight;

                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                }
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.compute_filtered(graph, source, |_, _| true)
    }
}
