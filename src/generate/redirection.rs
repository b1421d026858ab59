use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{empty_graph, node_count, uniform_node, AdjacencyLists, Generate};
use crate::graph::{Graph, Node, Result};
use crate::rng::RandomEngine;
use crate::util::{assert_interval, assert_probability};

fn one_connection() -> usize {
    1
}

/// The redirection model.
///
/// Each new node makes `max_num_connections` attachment attempts. An attempt
/// picks a uniformly chosen node and, with probability `redirection_proba`,
/// attaches to one of its neighbors instead. Attempts that hit the same node
/// collapse into a single edge.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Redirection {
    pub n: usize,
    pub redirection_proba: f64,
    #[serde(default = "one_connection")]
    pub max_num_connections: usize,
}

impl Redirection {
    pub fn new(n: usize, redirection_proba: f64, max_num_connections: usize) -> Self {
        Redirection {
            n,
            redirection_proba,
            max_num_connections,
        }
    }

    fn attachment_target(
        &self,
        lists: &AdjacencyLists,
        engine: &mut RandomEngine,
        existing: Node,
    ) -> Node {
        let target = uniform_node(engine, existing);
        if !engine.gen_bool(self.redirection_proba) {
            return target;
        }
        lists.random_neighbor(engine, target).unwrap_or(target)
    }
}

impl Generate for Redirection {
    fn validate(&self) -> Result<()> {
        node_count(self.n)?;
        assert_probability("redirection_proba", self.redirection_proba)?;
        assert_interval(
            "max_num_connections",
            self.max_num_connections,
            Some(1),
            None,
            true,
            true,
        )
    }

    #[instrument(level = "debug", skip(engine))]
    fn sample(&self, engine: &mut RandomEngine) -> Result<Graph> {
        let n = node_count(self.n)?;
        let mut graph = empty_graph(self.n.min(1))?;
        let mut lists = AdjacencyLists::with_nodes(self.n);
        let mut targets = Vec::with_capacity(self.max_num_connections);
        for v in 1..n {
            targets.clear();
            for _ in 0..self.max_num_connections {
                targets.push(self.attachment_target(&lists, engine, v));
            }
            targets.sort_unstable();
            targets.dedup();

            graph.add_node(v);
            for &target in &targets {
                graph.add_edge(v, target);
                lists.add_edge(v, target);
            }
        }
        Ok(graph)
    }
}

/// Returns a redirection graph on the nodes `0..n`.
pub fn redirection_graph(
    n: usize,
    redirection_proba: f64,
    max_num_connections: usize,
    random_engine: Option<&mut RandomEngine>,
) -> Result<Graph> {
    Redirection::new(n, redirection_proba, max_num_connections).generate(random_engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{ErrorKind, GraphError};

    #[test]
    fn single_connection_builds_a_tree() {
        let mut engine = RandomEngine::new(4);
        for &p in &[0.0, 0.5, 1.0] {
            let graph = redirection_graph(50, p, 1, Some(&mut engine)).unwrap();

            assert_eq!(graph.number_of_nodes(), 50);
            assert_eq!(graph.number_of_edges(), 49);
        }
    }

    #[test]
    fn repeated_targets_collapse() {
        let mut engine = RandomEngine::new(7);
        let graph = redirection_graph(40, 0.3, 5, Some(&mut engine)).unwrap();

        for (node, degree) in graph.degree() {
            assert!(degree >= 1, "Node {} is isolated.", node);
        }
        // Node v can gain at most min(v, 5) edges when it is added.
        assert!(graph.number_of_edges() <= (1..40).map(|v: usize| v.min(5)).sum());
    }

    #[test]
    fn second_node_always_links_to_first() {
        let graph = redirection_graph(2, 1.0, 3, Some(&mut RandomEngine::new(0))).unwrap();

        assert_eq!(graph.edges().iter().collect::<Vec<_>>(), vec![(0, 1)]);
    }

    #[test]
    fn zero_connections_error() {
        let err = redirection_graph(10, 0.5, 0, None).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            err.to_string(),
            "max_num_connections must belong to the interval [1, inf] but got 0"
        );
    }

    #[test]
    fn invalid_probability_errors() {
        let err = redirection_graph(10, 1.01, 1, None).unwrap_err();

        assert!(
            matches!(err, GraphError::OutOfInterval { ref name, .. } if name == "redirection_proba")
        );
    }
}
