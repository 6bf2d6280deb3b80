//! Yen KSP - Parallel K-Shortest Loopless Paths
//!
//! This library computes the K shortest loopless paths between two vertices of
//! a weighted directed graph using Yen's algorithm. The per-iteration deviation
//! searches are fanned out across a fixed pool of worker threads; candidates
//! are collected into a shared deduplicating, cost-ranked pool, and an
//! end-of-iteration barrier preserves the sequential structure Yen's algorithm
//! requires for correctness.
//!
//! The `net` module exposes the engine over TCP with a length-prefixed,
//! big-endian binary protocol.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod net;

pub use algorithm::{
    dijkstra::Dijkstra, yen::KShortestPaths, PathWithCost, ShortestPathAlgorithm,
    ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("K must be at least 1")]
    InvalidK,

    #[error("Worker count must be at least 1")]
    InvalidWorkerCount,

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
