//! Binary wire codec for query requests and results.
//!
//! Every value is a 32-bit big-endian integer; sequences are length-prefixed
//! at every nesting level. A request is a graph (vertex count, then per
//! vertex its degree followed by `(neighbor, weight)` pairs) followed by
//! start, end, K and worker count. A response is a signed path count -
//! negative signals an error followed by a human-readable message - then per
//! path a length and that many vertex ids, then the elapsed time as a
//! big-endian `f32` in milliseconds.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::algorithm::PathWithCost;
use crate::graph::{DirectedGraph, Graph};
use crate::{Error, Result};

/// The request fields following the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParams {
    pub start: usize,
    pub end: usize,
    pub k: usize,
    pub workers: usize,
}

/// A decoded server response
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Path vertex sequences plus the server-side elapsed milliseconds
    Paths {
        paths: Vec<Vec<usize>>,
        elapsed_ms: f32,
    },
    /// Out-of-band error with a human-readable message
    Error(String),
}

/// Reads a length-prefixed graph, rejecting vertex counts above
/// `max_vertices` and neighbor ids outside the declared vertex range.
pub async fn read_graph<R>(reader: &mut R, max_vertices: usize) -> Result<DirectedGraph<u64>>
where
    R: AsyncRead + Unpin,
{
    let n = reader.read_u32().await? as usize;

    if n > max_vertices {
        return Err(Error::Protocol(format!(
            "graph has {} vertices, limit is {}",
            n, max_vertices
        )));
    }

    let mut adjacency = Vec::with_capacity(n);

    for vertex in 0..n {
        let degree = reader.read_u32().await? as usize;
        // Grown edge by edge so memory stays bounded by bytes received
        let mut edges = Vec::new();

        for _ in 0..degree {
            let neighbor = reader.read_u32().await? as usize;
            let weight = reader.read_u32().await? as u64;

            if neighbor >= n {
                return Err(Error::Protocol(format!(
                    "vertex {} has edge to {}, outside 0..{}",
                    vertex, neighbor, n
                )));
            }

            edges.push((neighbor, weight));
        }

        adjacency.push(edges);
    }

    Ok(DirectedGraph::from_adjacency(adjacency))
}

/// Writes a graph in the mirror encoding of [`read_graph`]
pub async fn write_graph<W>(writer: &mut W, graph: &DirectedGraph<u64>) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_u32(encode_u32(graph.vertex_count())?).await?;

    for edges in graph.adjacency() {
        writer.write_u32(encode_u32(edges.len())?).await?;

        for &(neighbor, weight) in edges {
            writer.write_u32(encode_u32(neighbor)?).await?;
            writer
                .write_u32(u32::try_from(weight).map_err(|_| {
                    Error::Protocol(format!("weight {} does not fit in 32 bits", weight))
                })?)
                .await?;
        }
    }

    Ok(())
}

/// Reads the request fields that follow the graph
pub async fn read_params<R>(reader: &mut R) -> Result<QueryParams>
where
    R: AsyncRead + Unpin,
{
    Ok(QueryParams {
        start: reader.read_u32().await? as usize,
        end: reader.read_u32().await? as usize,
        k: reader.read_u32().await? as usize,
        workers: reader.read_u32().await? as usize,
    })
}

pub async fn write_params<W>(writer: &mut W, params: QueryParams) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_u32(encode_u32(params.start)?).await?;
    writer.write_u32(encode_u32(params.end)?).await?;
    writer.write_u32(encode_u32(params.k)?).await?;
    writer.write_u32(encode_u32(params.workers)?).await?;
    Ok(())
}

/// Writes a successful response: path count, each path, then the elapsed time
pub async fn write_paths<W>(
    writer: &mut W,
    paths: &[PathWithCost<u64>],
    elapsed_ms: f32,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer
        .write_i32(i32::try_from(paths.len()).map_err(|_| {
            Error::Protocol(format!("path count {} does not fit in 31 bits", paths.len()))
        })?)
        .await?;

    for path in paths {
        writer.write_u32(encode_u32(path.len())?).await?;

        for &vertex in &path.vertices {
            writer.write_u32(encode_u32(vertex)?).await?;
        }
    }

    writer.write_u32(elapsed_ms.to_bits()).await?;
    Ok(())
}

/// Writes an out-of-band error: a negative count followed by the message
pub async fn write_error<W>(writer: &mut W, message: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_i32(-1).await?;
    writer.write_all(message.as_bytes()).await?;
    Ok(())
}

/// Reads a full server response (client side)
pub async fn read_response<R>(reader: &mut R) -> Result<Response>
where
    R: AsyncRead + Unpin,
{
    let count = reader.read_i32().await?;

    if count < 0 {
        // The message is the remainder of the stream
        let mut message = Vec::new();
        reader.read_to_end(&mut message).await?;
        return Ok(Response::Error(String::from_utf8_lossy(&message).into_owned()));
    }

    let mut paths = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let len = reader.read_u32().await? as usize;
        let mut path = Vec::new();

        for _ in 0..len {
            path.push(reader.read_u32().await? as usize);
        }

        paths.push(path);
    }

    let elapsed_ms = f32::from_bits(reader.read_u32().await?);

    Ok(Response::Paths { paths, elapsed_ms })
}

fn encode_u32(value: usize) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| Error::Protocol(format!("value {} does not fit in 32 bits", value)))
}
