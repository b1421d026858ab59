use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{empty_graph, node_count, uniform_node, AdjacencyLists, Generate};
use crate::graph::{Graph, Node, Result};
use crate::rng::RandomEngine;
use crate::util::assert_probability;

/// Returns the most hops a surfer entering a graph of `existing` nodes makes:
/// `⌈log2(existing + 1)⌉`, which is the bit length of `existing`.
fn max_hops(existing: Node) -> u32 {
    Node::BITS - existing.leading_zeros()
}

/// The random surfer model.
///
/// Each new node enters at a uniformly chosen node and walks the graph. At
/// every step it settles with probability `connection_proba`, linking to the
/// node it stands on, and otherwise moves to a uniformly chosen neighbor.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Surfer {
    pub n: usize,
    pub connection_proba: f64,
}

impl Surfer {
    pub fn new(n: usize, connection_proba: f64) -> Self {
        Surfer { n, connection_proba }
    }

    /// Walks from a random entry point and returns the node to connect to.
    ///
    /// The walk ends on a node without neighbors or after
    /// [`max_hops`]`(existing)` hops, so it terminates even when
    /// `connection_proba` is zero.
    fn surf(&self, lists: &AdjacencyLists, engine: &mut RandomEngine, existing: Node) -> Node {
        let mut current = uniform_node(engine, existing);
        for _ in 0..max_hops(existing) {
            if engine.gen_bool(self.connection_proba) {
                break;
            }
            match lists.random_neighbor(engine, current) {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }
}

impl Generate for Surfer {
    fn validate(&self) -> Result<()> {
        node_count(self.n)?;
        assert_probability("connection_proba", self.connection_proba)
    }

    #[instrument(level = "debug", skip(engine))]
    fn sample(&self, engine: &mut RandomEngine) -> Result<Graph> {
        let n = node_count(self.n)?;
        let mut graph = empty_graph(self.n.min(1))?;
        let mut lists = AdjacencyLists::with_nodes(self.n);
        for v in 1..n {
            let target = self.surf(&lists, engine, v);
            graph.add_edge(v, target);
            lists.add_edge(v, target);
        }
        Ok(graph)
    }
}

/// Returns a random surfer graph on the nodes `0..n`.
///
/// Every new node gets exactly one edge, so the result is a tree.
pub fn surfer_graph(
    n: usize,
    connection_proba: f64,
    random_engine: Option<&mut RandomEngine>,
) -> Result<Graph> {
    Surfer::new(n, connection_proba).generate(random_engine)
}
