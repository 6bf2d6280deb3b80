use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::sync::Mutex;

use crate::algorithm::PathWithCost;
use crate::graph::Weight;

/// Heap entry ordered so that `BinaryHeap::pop` yields the best candidate:
/// smallest total cost first, ties broken by lexicographically smallest
/// vertex sequence.
#[derive(Debug)]
struct RankedCandidate<W>(PathWithCost<W>)
where
    W: Weight;

impl<W> PartialEq for RankedCandidate<W>
where
    W: Weight,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W> Eq for RankedCandidate<W> where W: Weight {}

impl<W> Ord for RankedCandidate<W>
where
    W: Weight,
{
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: a max-heap of this ordering pops the minimum cost
        other
            .0
            .total_cost()
            .cmp(&self.0.total_cost())
            .then_with(|| other.0.vertices.cmp(&self.0.vertices))
    }
}

impl<W> PartialOrd for RankedCandidate<W>
where
    W: Weight,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct Inner<W>
where
    W: Weight,
{
    /// Vertex sequences of every not-yet-accepted candidate, for dedup
    seen: HashSet<Vec<usize>>,
    /// Cost-ranked pool over the same candidates
    ranked: BinaryHeap<RankedCandidate<W>>,
}

/// The shared candidate structures of one K-shortest-paths query: a
/// deduplicating set over vertex sequences plus a cost-ranked pool, both
/// behind a single mutex.
///
/// All deviation tasks of an iteration insert through [`try_reserve`] /
/// [`push`]; the orchestrator extracts through [`pop_min`] only after the
/// end-of-iteration barrier, so set and pool are always mutually consistent
/// when observed by the orchestrator.
///
/// [`try_reserve`]: CandidatePool::try_reserve
/// [`push`]: CandidatePool::push
/// [`pop_min`]: CandidatePool::pop_min
pub struct CandidatePool<W>
where
    W: Weight,
{
    inner: Mutex<Inner<W>>,
}

impl<W> CandidatePool<W>
where
    W: Weight,
{
    pub fn new() -> Self {
        CandidatePool {
            inner: Mutex::new(Inner {
                seen: HashSet::new(),
                ranked: BinaryHeap::new(),
            }),
        }
    }

    /// Check-and-insert a candidate's vertex sequence into the dedup set.
    ///
    /// Returns false if the sequence is already present (a duplicate, to be
    /// discarded silently). A true return reserves the sequence; the caller
    /// then computes the cumulative costs and calls [`push`].
    ///
    /// [`push`]: CandidatePool::push
    pub fn try_reserve(&self, vertices: &[usize]) -> bool {
        let mut inner = self.inner.lock().unwrap();

        if inner.seen.contains(vertices) {
            return false;
        }

        inner.seen.insert(vertices.to_vec());
        true
    }

    /// Inserts a reserved candidate into the cost-ranked pool
    pub fn push(&self, path: PathWithCost<W>) {
        let mut inner = self.inner.lock().unwrap();
        inner.ranked.push(RankedCandidate(path));
    }

    /// Extracts the minimum-total-cost candidate and removes it from the
    /// dedup set, or returns `None` if no candidates remain.
    pub fn pop_min(&self) -> Option<PathWithCost<W>> {
        let mut inner = self.inner.lock().unwrap();

        let RankedCandidate(path) = inner.ranked.pop()?;
        inner.seen.remove(&path.vertices);
        Some(path)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().ranked.is_empty()
    }
}

impl<W> Default for CandidatePool<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(vertices: Vec<usize>, costs: Vec<u64>) -> PathWithCost<u64> {
        PathWithCost {
            vertices,
            cumulative_costs: costs,
        }
    }

    #[test]
    fn reserve_rejects_duplicates() {
        let pool: CandidatePool<u64> = CandidatePool::new();

        assert!(pool.try_reserve(&[0, 1, 2]));
        assert!(!pool.try_reserve(&[0, 1, 2]));
        assert!(pool.try_reserve(&[0, 2]));
    }

    #[test]
    fn pop_min_orders_by_cost_then_vertices() {
        let pool = CandidatePool::new();

        for p in [
            path(vec![0, 3], vec![0, 7]),
            path(vec![0, 1, 3], vec![0, 2, 5]),
            path(vec![0, 2, 3], vec![0, 1, 5]),
        ] {
            assert!(pool.try_reserve(&p.vertices));
            pool.push(p);
        }

        // Equal costs: lexicographically smaller vertex sequence wins
        assert_eq!(pool.pop_min().unwrap().vertices, vec![0, 1, 3]);
        assert_eq!(pool.pop_min().unwrap().vertices, vec![0, 2, 3]);
        assert_eq!(pool.pop_min().unwrap().vertices, vec![0, 3]);
        assert!(pool.pop_min().is_none());
    }

    #[test]
    fn pop_min_releases_the_sequence_from_dedup() {
        let pool = CandidatePool::new();
        let p = path(vec![0, 1], vec![0, 4]);

        assert!(pool.try_reserve(&p.vertices));
        pool.push(p);
        assert!(pool.pop_min().is_some());

        // Accepted paths are kept out by banned-edge filtering, not by the
        // dedup set, so the sequence is free again
        assert!(pool.try_reserve(&[0, 1]));
    }
}
