//! Interactive query client.
//!
//! Prompts for a graph and query parameters on stdin (prompts are suppressed
//! when stdin is not a terminal, so requests can be piped in), sends the
//! request to the server, and prints the returned paths with their costs
//! recomputed from the entered graph.

use std::io::{BufRead, IsTerminal, Write};

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use yen_ksp::graph::{DirectedGraph, Graph, MutableGraph};
use yen_ksp::net::wire::{self, QueryParams, Response};

struct Prompter {
    interactive: bool,
}

impl Prompter {
    fn new() -> Self {
        Prompter {
            interactive: std::io::stdin().is_terminal(),
        }
    }

    /// Reads a number in `[min, max]`, re-prompting on invalid input
    fn number(&self, prompt: &str, min: u64, max: u64) -> u64 {
        let stdin = std::io::stdin();

        loop {
            if self.interactive {
                print!("{}", prompt);
                let _ = std::io::stdout().flush();
            }

            let mut line = String::new();
            if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
                eprintln!("Unexpected end of input.");
                std::process::exit(1);
            }

            match line.trim().parse::<u64>() {
                Ok(value) if (min..=max).contains(&value) => return value,
                _ => {
                    if max == u64::MAX {
                        println!("Invalid input, must be at least {}. Try again.", min);
                    } else {
                        println!("Invalid input, must be between {} and {}. Try again.", min, max);
                    }
                }
            }
        }
    }

    fn graph(&self) -> DirectedGraph<u64> {
        let n = self.number("How many vertices does the graph have? ", 1, u32::MAX as u64);
        let mut graph = DirectedGraph::with_vertices(n as usize);

        for i in 0..n {
            let degree = self.number(
                &format!("Enter number of edges from vertex {}: ", i),
                0,
                u32::MAX as u64,
            );

            for j in 0..degree {
                let target = self.number(&format!("{}) vertex: ", j + 1), 0, n - 1);
                let weight = self.number(&format!("{}) weight: ", j + 1), 0, u32::MAX as u64);
                graph.add_edge(i as usize, target as usize, weight);
            }
        }

        graph
    }
}

/// Sum of edge weights along consecutive vertex pairs of `path`
fn path_cost(graph: &DirectedGraph<u64>, path: &[usize]) -> u64 {
    path.windows(2)
        .map(|pair| graph.edge_weight(pair[0], pair[1]).unwrap_or(0))
        .sum()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let address = if args.len() > 1 {
        args[1].clone()
    } else {
        "127.0.0.1:4095".to_string()
    };

    let mut stream = TcpStream::connect(&address).await?;

    let prompter = Prompter::new();
    let graph = prompter.graph();
    let n = graph.vertex_count() as u64;

    let start = prompter.number("Enter start vertex: ", 0, n - 1);
    let end = prompter.number("Enter end vertex: ", 0, n - 1);
    let k = prompter.number("Enter K: ", 1, u32::MAX as u64);

    let max_workers = stream.read_u32().await? as u64;
    let workers = prompter.number(
        &format!("Enter worker count (1-{}): ", max_workers),
        1,
        max_workers,
    );

    wire::write_graph(&mut stream, &graph).await?;
    wire::write_params(
        &mut stream,
        QueryParams {
            start: start as usize,
            end: end as usize,
            k: k as usize,
            workers: workers as usize,
        },
    )
    .await?;

    match wire::read_response(&mut stream).await? {
        Response::Error(message) => {
            eprintln!("Server error: {}", message.trim_end());
            std::process::exit(1);
        }
        Response::Paths { paths, elapsed_ms } => {
            if paths.is_empty() {
                println!("No path found!");
                return Ok(());
            }

            if (paths.len() as u64) < k {
                println!("Only {} path/s found.", paths.len());
            }

            println!("Top {} shortest paths:", paths.len());

            for (i, path) in paths.iter().enumerate() {
                let vertices: Vec<String> = path.iter().map(|v| v.to_string()).collect();
                println!(
                    "Path {}: {} (cost = {})",
                    i + 1,
                    vertices.join(" "),
                    path_cost(&graph, path)
                );
            }

            println!("The algorithm took {}ms.", elapsed_ms);
        }
    }

    Ok(())
}
