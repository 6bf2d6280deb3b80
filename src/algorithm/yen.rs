//! Yen's algorithm with a thread-parallel deviation search.
//!
//! Each iteration takes the most recently accepted path and, for every prefix
//! length, searches for the cheapest deviation that leaves the prefix at that
//! point. The searches are independent of each other, so they fan out across
//! a worker pool; the iteration ends with a barrier because the banned-edge
//! sets of the next iteration depend on the path accepted in this one.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::path::PathWithCost;
use crate::algorithm::traits::ShortestPathAlgorithm;
use crate::data_structures::{CandidatePool, WorkerPool};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// The K-shortest-loopless-paths engine.
///
/// One instance drives one query at a time; the worker pool it spawns is
/// owned exclusively by that query for its full duration. There is no
/// cancellation or timeout inside the engine - a query runs to completion or
/// to candidate exhaustion.
#[derive(Debug)]
pub struct KShortestPaths {
    worker_count: usize,
}

impl KShortestPaths {
    /// Creates an engine that fans deviation searches across `worker_count`
    /// threads. Fails with [`Error::InvalidWorkerCount`] if the count is zero.
    pub fn new(worker_count: usize) -> Result<Self> {
        if worker_count == 0 {
            return Err(Error::InvalidWorkerCount);
        }

        Ok(KShortestPaths { worker_count })
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Computes up to `k` shortest loopless paths from `start` to `end`,
    /// ascending by total cost.
    ///
    /// An unreachable `end` yields an empty sequence - a valid, non-error
    /// outcome even for `k > 0`. If fewer than `k` distinct simple paths
    /// exist, exactly that many are returned. Equal-cost candidates are
    /// ranked by lexicographically smallest vertex sequence, so results are
    /// deterministic for a fixed (graph, start, end, k) and any worker count.
    pub fn compute<W, G>(
        &self,
        graph: &G,
        start: usize,
        end: usize,
        k: usize,
    ) -> Result<Vec<PathWithCost<W>>>
    where
        W: Weight,
        G: Graph<W> + Sync,
    {
        // All validation happens here, before any parallel work is dispatched
        if !graph.has_vertex(start) {
            return Err(Error::InvalidVertex(start));
        }

        if !graph.has_vertex(end) {
            return Err(Error::InvalidVertex(end));
        }

        if k == 0 {
            return Err(Error::InvalidK);
        }

        let dijkstra = Dijkstra::new();

        let first = dijkstra
            .compute_shortest_paths(graph, start)?
            .path_to(end);

        let mut accepted = match first {
            Some(path) => vec![path],
            None => return Ok(Vec::new()),
        };

        if k == 1 {
            return Ok(accepted);
        }

        let candidates: CandidatePool<W> = CandidatePool::new();

        thread::scope(|scope| {
            let pool = WorkerPool::new(scope, self.worker_count);

            for c in 1..k {
                let prev = Arc::new(accepted[c - 1].clone());
                let banned_edges = Arc::new(banned_edges_per_index(&accepted, &prev.vertices));

                for i in 0..prev.len() - 1 {
                    let prev = Arc::clone(&prev);
                    let banned_edges = Arc::clone(&banned_edges);
                    let candidates = &candidates;
                    let dijkstra = &dijkstra;

                    pool.execute(move || {
                        deviation_search(graph, dijkstra, &prev, &banned_edges, i, end, candidates);
                    });
                }

                // Mandatory barrier: the next iteration's banned-edge sets
                // depend on the path accepted here
                pool.wait_idle();

                match candidates.pop_min() {
                    Some(path) => accepted.push(path),
                    // Fewer than k distinct simple paths exist
                    None => break,
                }
            }
        });

        Ok(accepted)
    }
}

/// For each deviation index `i` along `prev`, the set of edges taken at
/// position `i` by every accepted path sharing the first `i` vertices with
/// `prev`.
///
/// The scan covers *all* accepted paths, not only the most recent one;
/// omitting any of them would allow a deviation search to regenerate an
/// already-accepted path.
fn banned_edges_per_index<W>(
    accepted: &[PathWithCost<W>],
    prev: &[usize],
) -> Vec<HashSet<(usize, usize)>>
where
    W: Weight,
{
    let mut banned = vec![HashSet::new(); prev.len() - 1];

    for path in accepted {
        let shared_max = path.len().min(prev.len()) - 1;

        for i in 0..shared_max {
            if path.vertices[i] != prev[i] {
                break;
            }

            banned[i].insert((path.vertices[i], path.vertices[i + 1]));
        }
    }

    banned
}

/// One deviation task: search for the cheapest path to `end` that leaves
/// `prev` at index `i`, and offer it to the shared candidate pool.
///
/// Contributes nothing when the spur target is unreachable or the spliced
/// path duplicates an existing candidate; either outcome is local and never
/// affects sibling tasks.
fn deviation_search<W, G>(
    graph: &G,
    dijkstra: &Dijkstra,
    prev: &PathWithCost<W>,
    banned_edges: &[HashSet<(usize, usize)>],
    i: usize,
    end: usize,
    candidates: &CandidatePool<W>,
) where
    W: Weight,
    G: Graph<W>,
{
    let banned_vertices: HashSet<usize> = prev.vertices[..i].iter().copied().collect();
    let spur_start = prev.vertices[i];

    let filter = |u: usize, v: usize| {
        !banned_edges[i].contains(&(u, v))
            && !banned_vertices.contains(&u)
            && !banned_vertices.contains(&v)
    };

    // The spur start is a vertex of an accepted path, so the search cannot
    // reject it
    let Ok(search) = dijkstra.compute_filtered(graph, spur_start, filter) else {
        return;
    };

    let Some(spur) = search.path_to(end) else {
        return;
    };

    // Splice the root prefix with the spur path
    let mut vertices = Vec::with_capacity(i + spur.len());
    vertices.extend_from_slice(&prev.vertices[..i]);
    vertices.extend_from_slice(&spur.vertices);

    if !candidates.try_reserve(&vertices) {
        return;
    }

    // Reuse the accepted path's cumulative costs for the shared prefix and
    // offset the spur's costs by the cost up to the junction
    let junction_cost = prev.cumulative_costs[i];
    let cumulative_costs = (0..vertices.len())
        .map(|j| {
            if j <= i {
                prev.cumulative_costs[j]
            } else {
                junction_cost + spur.cumulative_costs[j - i]
            }
        })
        .collect();

    candidates.push(PathWithCost {
        vertices,
        cumulative_costs,
    });
}
