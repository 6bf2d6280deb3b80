use crate::algorithm::traits::ShortestPathResult;
use crate::graph::Weight;

/// An ordered vertex sequence together with its aligned cumulative costs.
///
/// Entry `i` of `cumulative_costs` is the cost from the path's start to its
/// `i`-th vertex; the total cost is the last entry. Paths are loopless and
/// have length >= 1 (a single-vertex path has cost zero).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathWithCost<W>
where
    W: Weight,
{
    /// The vertices along the path, in order
    pub vertices: Vec<usize>,

    /// Cumulative cost from the start to each vertex
    pub cumulative_costs: Vec<W>,
}

impl<W> PathWithCost<W>
where
    W: Weight,
{
    /// Total cost from start to end of the path
    pub fn total_cost(&self) -> W {
        *self
            .cumulative_costs
            .last()
            .expect("a path has at least one vertex")
    }

    /// Number of vertices on the path
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Reconstructs the shortest path from the source to `target`.
    ///
    /// Walks the predecessor chain from `target` back to the source, reverses
    /// it, and reads each vertex's cumulative cost from the distance table.
    /// Returns `None` when `target` is unreachable; callers must check before
    /// trusting the path content - an unreachable target never yields a
    /// partial or zero-cost path.
    pub fn path_to(&self, target: usize) -> Option<PathWithCost<W>> {
        if target >= self.distances.len() || self.distances[target].is_none() {
            return None;
        }

        let mut vertices = Vec::new();
        let mut current = target;
        vertices.push(current);

        while current != self.source {
            // Reachable non-source vertices always have a predecessor in the
            // shortest path tree
            current = self.predecessors[current]?;
            vertices.push(current);
        }

        vertices.reverse();

        let cumulative_costs = vertices
            .iter()
            .map(|&v| self.distances[v].expect("vertex on a reconstructed path is reachable"))
            .collect();

        Some(PathWithCost { vertices, cumulative_costs })
    }
}
