pub mod candidates;
pub mod priority_queue;
pub mod worker_pool;

pub use candidates::CandidatePool;
pub use priority_queue::BinaryHeapWrapper;
pub use worker_pool::WorkerPool;
