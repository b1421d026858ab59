use rand::seq::SliceRandom;
use rand::Rng;

use super::bernoulli_indices;
use crate::graph::{Graph, Node, Result};
use crate::rng::RandomEngine;

/// One duplication-divergence step: a new node copies the neighborhood of an
/// existing one, loses some inherited edges and gains some new ones.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(super) struct Divergence {
    /// Probability of dropping each inherited edge.
    pub deletion_proba: f64,
    /// Probability of linking the copy to each non-neighbor of the original.
    pub innovation_proba: f64,
    /// Keep one inherited edge when the copy would otherwise be isolated.
    pub retain_edge: bool,
}

impl Divergence {
    /// Adds `copy` to `graph` as a diverged duplicate of `original`.
    ///
    /// `copy` must be the next free label, so the existing nodes are
    /// `0..copy`. The original itself counts as a non-neighbor and may be
    /// linked to its copy.
    pub fn duplicate(
        &self,
        graph: &mut Graph,
        engine: &mut RandomEngine,
        original: Node,
        copy: Node,
    ) -> Result<()> {
        let neighbors: Vec<Node> = graph.neighbors(original)?.iter().collect();

        let mut targets: Vec<Node> = neighbors
            .iter()
            .copied()
            .filter(|_| !engine.gen_bool(self.deletion_proba))
            .collect();

        // Hits on neighbors are discarded: those edges were decided above.
        bernoulli_indices(engine, copy, self.innovation_proba, |candidate| {
            if neighbors.binary_search(&candidate).is_err() {
                targets.push(candidate);
            }
        });

        if self.retain_edge && targets.is_empty() {
            targets.extend(neighbors.choose(engine));
        }

        graph.add_node(copy);
        graph.add_edges_from(targets.into_iter().map(|target| (copy, target)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> Graph {
        Graph::from_parts(0..4, vec![(0, 1), (0, 2), (0, 3)])
    }

    #[test]
    fn exact_copy_without_divergence() {
        let mut graph = star();
        let step = Divergence {
            deletion_proba: 0.0,
            innovation_proba: 0.0,
            retain_edge: false,
        };
        step.duplicate(&mut graph, &mut RandomEngine::new(1), 0, 4).unwrap();

        let copied: Vec<_> = graph.neighbors(4).unwrap().iter().collect();
        assert_eq!(copied, vec![1, 2, 3], "The copy should inherit every edge.");
        assert!(!graph.has_edge(0, 4));
    }

    #[test]
    fn full_innovation_links_everything() {
        let mut graph = star();
        let step = Divergence {
            deletion_proba: 1.0,
            innovation_proba: 1.0,
            retain_edge: false,
        };
        step.duplicate(&mut graph, &mut RandomEngine::new(1), 1, 4).unwrap();

        // Node 1 only neighbors node 0, which was deleted; everything else is new.
        let linked: Vec<_> = graph.neighbors(4).unwrap().iter().collect();
        assert_eq!(linked, vec![1, 2, 3]);
        assert!(graph.has_edge(4, 1), "The original itself is a non-neighbor.");
    }

    #[test]
    fn retained_edge_prevents_isolation() {
        let mut engine = RandomEngine::new(5);
        let step = Divergence {
            deletion_proba: 1.0,
            innovation_proba: 0.0,
            retain_edge: true,
        };

        for _ in 0..20 {
            let mut graph = star();
            step.duplicate(&mut graph, &mut engine, 0, 4).unwrap();

            assert_eq!(
                graph.degree().get(4).unwrap(),
                1,
                "Exactly one inherited edge should survive."
            );
            let kept = graph.neighbors(4).unwrap().nth(0).unwrap();
            assert!(graph.has_edge(0, kept));
        }
    }

    #[test]
    fn isolation_without_retention() {
        let mut graph = star();
        let step = Divergence {
            deletion_proba: 1.0,
            innovation_proba: 0.0,
            retain_edge: false,
        };
        step.duplicate(&mut graph, &mut RandomEngine::new(1), 0, 4).unwrap();

        assert!(graph.has_node(4));
        assert_eq!(graph.degree().get(4).unwrap(), 0);
    }

    #[test]
    fn missing_original_errors() {
        let mut graph = star();
        let step = Divergence {
            deletion_proba: 0.5,
            innovation_proba: 0.5,
            retain_edge: false,
        };

        assert!(step.duplicate(&mut graph, &mut RandomEngine::new(1), 9, 4).is_err());
        assert!(!graph.has_node(4), "A failed step must not add the copy.");
    }
}
