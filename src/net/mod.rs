pub mod server;
pub mod wire;

pub use server::{run_server, ServerConfig};
