use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::duplication::Divergence;
use super::{empty_graph, node_count, uniform_node, Generate};
use crate::graph::{assert_normalized_node_labels, Graph, Result};
use crate::rng::RandomEngine;
use crate::util::assert_probability;

/// The duplication-complementation model.
///
/// Like [`DuplicationMutation`](super::DuplicationMutation), but the new node
/// complements the original: it interacts with each of the original's
/// non-neighbors with probability `interaction_proba`. No node is protected
/// from becoming isolated.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DuplicationComplementation {
    pub n: usize,
    pub deletion_proba: f64,
    pub interaction_proba: f64,
}

impl DuplicationComplementation {
    pub fn new(n: usize, deletion_proba: f64, interaction_proba: f64) -> Self {
        DuplicationComplementation {
            n,
            deletion_proba,
            interaction_proba,
        }
    }
}

impl Generate for DuplicationComplementation {
    fn validate(&self) -> Result<()> {
        node_count(self.n)?;
        assert_probability("deletion_proba", self.deletion_proba)?;
        assert_probability("interaction_proba", self.interaction_proba)
    }

    #[instrument(level = "debug", skip(engine))]
    fn sample(&self, engine: &mut RandomEngine) -> Result<Graph> {
        let n = node_count(self.n)?;
        if n < 2 {
            return empty_graph(self.n);
        }

        let step = Divergence {
            deletion_proba: self.deletion_proba,
            innovation_proba: self.interaction_proba,
            retain_edge: false,
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

/// Returns a duplication-complementation graph on the nodes `0..n`.
pub fn duplication_complementation_graph(
    n: usize,
    deletion_proba: f64,
    interaction_proba: f64,
    random_engine: Option<&mut RandomEngine>,
) -> Result<Graph> {
    DuplicationComplementation::new(n, deletion_proba, interaction_proba).generate(random_engine)
}
