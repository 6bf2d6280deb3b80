use num_traits::Zero;
use std::fmt::Debug;
use std::ops::Add;

/// Bound for edge weights and accumulated path costs.
///
/// Weights are non-negative by contract; `u32` and `u64` are the primary
/// instantiations. `Ord` keeps the priority queues total, `Zero` gives the
/// distance of a source to itself.
pub trait Weight: Copy + Ord + Zero + Add<Output = Self> + Debug + Send + Sync {}

impl<W> Weight for W where W: Copy + Ord + Zero + Add<Output = W> + Debug + Send + Sync {}

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// Trait for building a graph before a query.
///
/// The engine only ever sees a `&G`; a graph is immutable for the duration of
/// a query.
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge; returns false if either endpoint is missing
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;
}
