use std::io::Write;

use csv::Writer;
use serde::Serialize;

use super::{undirected_edges, Export};
use crate::graph::{GraphError, Node, Result, SimpleGraph};

#[derive(Serialize)]
struct EdgeRecord {
    source: Node,
    target: Node,
}

#[derive(Serialize)]
struct NodeRecord {
    node: Node,
}

/// Writes graphs as CSV edge lists with the header `source,target`.
pub struct EdgeList {}

impl EdgeList {
    /// Writes one row per undirected edge.
    pub fn write<W: Write>(graph: &dyn SimpleGraph, writer: W) -> Result<()> {
        let mut writer = Writer::from_writer(writer);
        for (source, target) in undirected_edges(graph)? {
            writer
                .serialize(EdgeRecord { source, target })
                .map_err(export_error)?;
        }
        writer.flush().map_err(|err| GraphError::Export(err.to_string()))
    }

    /// Writes one row per node, isolated nodes included.
    pub fn write_nodes<W: Write>(graph: &dyn SimpleGraph, writer: W) -> Result<()> {
        let mut writer = Writer::from_writer(writer);
        for node in graph.iter_nodes() {
            writer.serialize(NodeRecord { node }).map_err(export_error)?;
        }
        writer.flush().map_err(|err| GraphError::Export(err.to_string()))
    }
}

impl Export for EdgeList {
    /// Returns the edge list as a string. The name is not part of the format.
    fn from_graph(graph: &dyn SimpleGraph, _name: &str) -> Result<String> {
        let mut buffer = Vec::new();
        Self::write(graph, &mut buffer)?;
        String::from_utf8(buffer).map_err(|err| GraphError::Export(err.to_string()))
    }
}

fn export_error(err: csv::Error) -> GraphError {
    GraphError::Export(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn every_edge_once() {
        let graph = Graph::from_parts(0..3, vec![(0, 1), (2, 0), (1, 2)]);

        assert_eq!(
            EdgeList::from_graph(&graph, "triangle").unwrap(),
            "source,target\n0,1\n0,2\n1,2\n"
        );
    }

    #[test]
    fn edgeless_graph_has_no_rows() {
        let graph = Graph::from_parts(0..3, Vec::new());

        // csv only writes the header together with the first record.
        assert_eq!(EdgeList::from_graph(&graph, "g").unwrap(), "");
    }

    #[test]
    fn nodes_include_isolates() {
        let graph = Graph::from_parts(0..3, vec![(0, 1)]);
        let mut buffer = Vec::new();
        EdgeList::write_nodes(&graph, &mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "node\n0\n1\n2\n");
    }
}
