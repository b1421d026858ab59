mod duplication;
mod duplication_complementation;
mod duplication_mutation;
mod erdos_renyi;
mod redirection;
mod surfer;

pub use duplication_complementation::{
    duplication_complementation_graph, DuplicationComplementation,
};
pub use duplication_mutation::{duplication_mutation_graph, DuplicationMutation};
pub use erdos_renyi::{gnp_random_graph, ErdosRenyi};
pub use redirection::{redirection_graph, Redirection};
pub use surfer::{surfer_graph, Surfer};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::graph::{assert_normalized_node_labels, Graph, GraphError, Node, Result};
use crate::rng::{get_random_engine, RandomEngine};

/// A random graph model.
///
/// Implementors only describe how a graph grows from an engine; parameter
/// checks and engine resolution are shared.
pub trait Generate {
    /// Checks every parameter. Called before any graph state exists.
    fn validate(&self) -> Result<()>;

    /// Grows a graph from valid parameters using `engine`.
    fn sample(&self, engine: &mut RandomEngine) -> Result<Graph>;

    /// Generates a graph with node set `0..n`.
    ///
    /// Without an engine the default seed policy applies; with one, the
    /// engine's stream is advanced.
    fn generate(&self, random_engine: Option<&mut RandomEngine>) -> Result<Graph> {
        self.validate()?;
        let mut engine = get_random_engine(random_engine)?;
        let graph = self.sample(&mut engine)?;
        tracing::debug!(
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "generated graph"
        );
        Ok(graph)
    }
}

/// Returns the label of the last node plus one, i.e. `n` as a node id.
pub(crate) fn node_count(n: usize) -> Result<Node> {
    Node::try_from(n).map_err(|_| GraphError::TooManyNodes(n))
}

/// Returns a graph with the isolated nodes `0..n`.
fn empty_graph(n: usize) -> Result<Graph> {
    let graph = Graph::from_parts(0..node_count(n)?, std::iter::empty());
    assert_normalized_node_labels(&graph)?;
    Ok(graph)
}

/// Picks a node uniformly among `0..count`. `count` must be positive.
fn uniform_node(engine: &mut RandomEngine, count: Node) -> Node {
    engine.gen_range(0..count)
}

/// Returns the number of failures before the next success of a Bernoulli
/// trial, where `log_q = ln(1 - p)` for a success probability `0 < p < 1`.
fn geometric_skip(engine: &mut RandomEngine, log_q: f64) -> Node {
    // 1 - u lies in (0, 1], so the logarithm is finite and non-positive.
    let log_r = (1.0 - engine.gen::<f64>()).ln();
    let skip = (log_r / log_q).floor();
    if skip >= Node::MAX as f64 {
        Node::MAX
    } else {
        skip as Node
    }
}

/// Calls `visit` for every index in `0..len` that succeeds a Bernoulli trial
/// with probability `p`.
///
/// Jumps between successes with geometric gaps, so the expected cost is
/// `O(1 + p * len)` rather than `O(len)`.
fn bernoulli_indices<F: FnMut(Node)>(engine: &mut RandomEngine, len: Node, p: f64, mut visit: F) {
    if p <= 0.0 {
        return;
    }
    if p >= 1.0 {
        (0..len).for_each(visit);
        return;
    }

    let log_q = (1.0 - p).ln();
    let mut index: Node = -1;
    loop {
        index = index
            .saturating_add(1)
            .saturating_add(geometric_skip(engine, log_q));
        if index >= len {
            return;
        }
        visit(index);
    }
}

/// Adjacency lists of a growing graph on `0..n`, kept next to the [`Graph`]
/// so that a uniformly random neighbor costs `O(1)`.
#[derive(Clone, Debug, Default)]
struct AdjacencyLists {
    lists: Vec<Vec<Node>>,
}

impl AdjacencyLists {
    fn with_nodes(n: usize) -> Self {
        AdjacencyLists {
            lists: vec![Vec::new(); n],
        }
    }

    /// Records the edge `(u, v)`. Callers never record an edge twice.
    fn add_edge(&mut self, u: Node, v: Node) {
        // Nodes are labels 0..n, so they are valid positions.
        self.lists[u as usize].push(v);
        self.lists[v as usize].push(u);
    }

    fn random_neighbor(&self, engine: &mut RandomEngine, node: Node) -> Option<Node> {
        self.lists[node as usize].choose(engine).copied()
    }
}
