use super::{undirected_edges, Export};
use crate::graph::{Result, SimpleGraph};

/// Empty struct. Only implements Export trait functionalities.
pub struct Dot {}

impl Export for Dot {
    /// Returns a string representing the graph in Graphviz dot format.
    /// Nodes are listed first so isolated nodes are drawn too.
    fn from_graph(graph: &dyn SimpleGraph, name: &str) -> Result<String> {
        let mut out = format!("graph {} {{\n", name);

        for node in graph.iter_nodes() {
            out.push_str(&format!("\t{}\n", node));
        }

        for (u, v) in undirected_edges(graph)? {
            out.push_str(&format!("\t{} -- {}\n", u, v));
        }

        out.push('}');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn lists_nodes_then_edges() {
        let graph = Graph::from_parts(0..4, vec![(1, 0), (2, 1)]);

        assert_eq!(
            Dot::from_graph(&graph, "path").unwrap(),
            "graph path {\n\t0\n\t1\n\t2\n\t3\n\t0 -- 1\n\t1 -- 2\n}"
        );
    }

    #[test]
    fn empty_graph_is_valid_dot() {
        assert_eq!(Dot::from_graph(&Graph::new(), "g").unwrap(), "graph g {\n}");
    }
}
