//! TCP query server around the K-shortest-paths engine.
//!
//! One request per connection: the server greets the client with its
//! worker-count ceiling, decodes a graph and query parameters, validates
//! them, runs the engine on a blocking thread, and answers with the paths and
//! the wall-clock time the computation took.

use std::sync::Arc;
use std::time::Instant;

use log::{error, info, warn};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{watch, Semaphore};

use crate::algorithm::yen::KShortestPaths;
use crate::graph::Graph;
use crate::net::wire;
use crate::Result;

/// Configuration for the query server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Maximum number of concurrently served clients
    pub max_clients: usize,
    /// Per-query worker-count ceiling; `None` derives it from the host's
    /// available parallelism divided across `max_clients`
    pub worker_ceiling: Option<usize>,
    /// Largest accepted graph, in vertices
    pub max_vertices: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4095,
            max_clients: 4,
            worker_ceiling: None,
            max_vertices: 1_000_000,
        }
    }
}

impl ServerConfig {
    /// The advertised per-query worker-count ceiling
    pub fn effective_worker_ceiling(&self) -> usize {
        match self.worker_ceiling {
            Some(ceiling) => ceiling.max(1),
            None => {
                let parallelism = std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1);
                (parallelism / self.max_clients.max(1)).max(1)
            }
        }
    }
}

/// Runs the accept loop until ctrl-c.
///
/// Shutdown is a watch-channel cancellation token observed between accepts;
/// in-flight handlers run to completion.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let ceiling = config.effective_worker_ceiling();
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    let clients = Arc::new(Semaphore::new(config.max_clients));

    info!(
        "listening on port {} (max {} clients, worker ceiling {})",
        config.port, config.max_clients, ceiling
    );

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown requested");
            let _ = shutdown_tx.send(true);
        }
    });

    loop {
        // Cap concurrency before accepting the next connection
        let permit = tokio::select! {
            _ = shutdown_rx.changed() => break,
            permit = Arc::clone(&clients).acquire_owned() => match permit {
                Ok(permit) => permit,
                Err(_) => break,
            },
        };

        tokio::select! {
            _ = shutdown_rx.changed() => break,
            accepted = listener.accept() => {
                let (stream, addr) = match accepted {
                    Ok(pair) => pair,
                    Err(e) => {
                        warn!("accept failed: {}", e);
                        continue;
                    }
                };

                info!("client connected: {}", addr);
                let max_vertices = config.max_vertices;

                tokio::spawn(async move {
                    if let Err(e) = handle_client(stream, ceiling, max_vertices).await {
                        warn!("client {} failed: {}", addr, e);
                    }
                    drop(permit);
                });
            }
        }
    }

    info!("server stopped");
    Ok(())
}

/// Serves one request on one connection
async fn handle_client(mut stream: TcpStream, ceiling: usize, max_vertices: usize) -> Result<()> {
    use tokio::io::AsyncWriteExt;

    // Greeting: advertise the worker-count ceiling
    stream.write_u32(ceiling as u32).await?;

    let graph = wire::read_graph(&mut stream, max_vertices).await?;
    let params = wire::read_params(&mut stream).await?;

    let n = graph.vertex_count();

    // The engine re-validates, but answering before dispatch keeps the error
    // out-of-band instead of a dropped connection
    if params.start >= n || params.end >= n {
        return wire::write_error(&mut stream, "Start or end is not a valid vertex!").await;
    }

    if params.k == 0 {
        return wire::write_error(&mut stream, "K must be at least 1!").await;
    }

    if params.workers == 0 || params.workers > ceiling {
        return wire::write_error(&mut stream, "Invalid thread count!").await;
    }

    let engine = match KShortestPaths::new(params.workers) {
        Ok(engine) => engine,
        Err(e) => return wire::write_error(&mut stream, &e.to_string()).await,
    };

    // The engine is blocking and thread-heavy; keep it off the runtime
    let outcome = tokio::task::spawn_blocking(move || {
        let started = Instant::now();
        let result = engine.compute(&graph, params.start, params.end, params.k);
        (result, started.elapsed().as_secs_f32() * 1000.0)
    })
    .await;

    let (result, elapsed_ms) = match outcome {
        Ok(pair) => pair,
        Err(e) => {
            error!("query task panicked: {}", e);
            return wire::write_error(&mut stream, "Internal server error!").await;
        }
    };

    match result {
        Ok(paths) => {
            info!(
                "query ({} vertices, k={}, {} workers) -> {} paths in {:.2}ms",
                n,
                params.k,
                params.workers,
                paths.len(),
                elapsed_ms
            );
            wire::write_paths(&mut stream, &paths, elapsed_ms).await
        }
        Err(e) => wire::write_error(&mut stream, &e.to_string()).await,
    }
}
