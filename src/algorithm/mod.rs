pub mod dijkstra;
pub mod path;
pub mod traits;
pub mod yen;

pub use dijkstra::Dijkstra;
pub use path::PathWithCost;
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
pub use yen::KShortestPaths;
