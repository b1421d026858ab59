mod dot;
mod edge_list;

pub use dot::Dot;
pub use edge_list::EdgeList;

use crate::graph::{Edge, Result, SimpleGraph};

/// An exporter for simple graphs.
pub trait Export {
    /// Returns a String representation of the graph according to the export format used.
    fn from_graph(graph: &dyn SimpleGraph, name: &str) -> Result<String>;
}

/// Collects every undirected edge once, as `(u, v)` with `u <= v`.
fn undirected_edges(graph: &dyn SimpleGraph) -> Result<Vec<Edge>> {
    let mut edges = Vec::with_capacity(graph.size());
    for u in graph.iter_nodes() {
        edges.extend(graph.iter_neighbors(u)?.filter(|&v| u <= v).map(|v| (u, v)));
    }
    Ok(edges)
}
