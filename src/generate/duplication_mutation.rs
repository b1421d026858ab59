use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::duplication::Divergence;
use super::{empty_graph, node_count, uniform_node, Generate};
use crate::graph::{assert_normalized_node_labels, Graph, Result};
use crate::rng::RandomEngine;
use crate::util::assert_probability;

/// The duplication-mutation model.
///
/// Starting from a single edge, every new node duplicates a uniformly chosen
/// node, drops each inherited edge with probability `deletion_proba` and links
/// to each non-neighbor of the original with probability `mutation_proba`.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DuplicationMutation {
    pub n: usize,
    pub deletion_proba: f64,
    pub mutation_proba: f64,
    /// Keep one inherited edge whenever a new node would end up isolated.
    #[serde(default)]
    pub drop_isolates: bool,
}

impl DuplicationMutation {
    pub fn new(n: usize, deletion_proba: f64, mutation_proba: f64, drop_isolates: bool) -> Self {
        DuplicationMutation {
            n,
            deletion_proba,
            mutation_proba,
            drop_isolates,
        }
    }
}

impl Generate for DuplicationMutation {
    fn validate(&self) -> Result<()> {
        node_count(self.n)?;
        assert_probability("deletion_proba", self.deletion_proba)?;
        assert_probability("mutation_proba", self.mutation_proba)
    }

    #[instrument(level = "debug", skip(engine))]
    fn sample(&self, engine: &mut RandomEngine) -> Result<Graph> {
        let n = node_count(self.n)?;
        if n < 2 {
            return empty_graph(self.n);
        }

        let step = Divergence {
            deletion_proba: self.deletion_proba,
            innovation_proba: self.mutation_proba,
            retain_edge: self.drop_isolates,
        };
        let mut graph = Graph::from_parts(0..2, vec![(0, 1)]);
        for v in 2..n {
            let original = uniform_node(engine, v);
            step.duplicate(&mut graph, engine, original, v)?;
        }

        assert_normalized_node_labels(&graph)?;
        Ok(graph)
    }
}

/// Returns a duplication-mutation graph on the nodes `0..n`.
pub fn duplication_mutation_graph(
    n: usize,
    deletion_proba: f64,
    mutation_proba: f64,
    drop_isolates: bool,
    random_engine: Option<&mut RandomEngine>,
) -> Result<Graph> {
    DuplicationMutation::new(n, deletion_proba, mutation_proba, drop_isolates)
        .generate(random_engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{ErrorKind, GraphError};

    #[test]
    fn small_sizes_have_no_edges() {
        for n in 0..2 {
            let graph = duplication_mutation_graph(n, 0.5, 0.5, false, None).unwrap();

            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.number_of_edges(), 0);
        }
    }

    #[test]
    fn seed_edge_is_present() {
        let mut engine = RandomEngine::new(0);
        let graph = duplication_mutation_graph(2, 0.5, 0.5, false, Some(&mut engine)).unwrap();

        assert_eq!(graph.edges().iter().collect::<Vec<_>>(), vec![(0, 1)]);
    }

    #[test]
    fn drop_isolates_keeps_every_node_attached() {
        let mut engine = RandomEngine::new(11);
        for _ in 0..10 {
            let graph = duplication_mutation_graph(60, 1.0, 0.0, true, Some(&mut engine)).unwrap();

            assert_eq!(graph.number_of_nodes(), 60);
            for (node, degree) in graph.degree() {
                assert!(degree >= 1, "Node {} is isolated.", node);
            }
        }
    }

    #[test]
    fn isolates_appear_without_retention() {
        let mut engine = RandomEngine::new(2);
        let graph = duplication_mutation_graph(30, 1.0, 0.0, false, Some(&mut engine)).unwrap();

        // Every duplicate loses all inherited edges and gains none.
        assert_eq!(graph.number_of_nodes(), 30);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn same_seed_same_graph() {
        let generate = || {
            duplication_mutation_graph(80, 0.4, 0.1, true, Some(&mut RandomEngine::new(6))).unwrap()
        };
        let first = generate();
        let second = generate();

        assert_eq!(first, second);
    }

    #[test]
    fn invalid_probabilities_error() {
        let deletion = duplication_mutation_graph(10, -0.1, 0.5, false, None).unwrap_err();
        let mutation = duplication_mutation_graph(10, 0.5, f64::NAN, false, None).unwrap_err();

        assert_eq!(deletion.kind(), ErrorKind::InvalidArgument);
        assert!(matches!(
            deletion,
            GraphError::OutOfInterval { ref name, .. } if name == "deletion_proba"
        ));
        assert!(matches!(
            mutation,
            GraphError::OutOfInterval { ref name, .. } if name == "mutation_proba"
        ));
    }
}
