use std::env;
use yen_ksp::net::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let port = if args.len() > 1 {
        args[1].parse().unwrap_or(4095)
    } else {
        4095
    };

    let config = ServerConfig {
        port,
        ..Default::default()
    };

    println!("Starting K-shortest-paths server...");
    println!("  Port: {}", config.port);
    println!("  Max clients: {}", config.max_clients);
    println!("  Worker ceiling: {}", config.effective_worker_ceiling());
    println!("  Max vertices: {}", config.max_vertices);

    run_server(config).await?;

    Ok(())
}
