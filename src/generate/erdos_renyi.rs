use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{bernoulli_indices, empty_graph, node_count, Generate};
use crate::graph::{Graph, GraphError, Result};
use crate::rng::RandomEngine;
use crate::util::assert_probability;

/// The Erdős–Rényi model `G(n, p)`: every pair of distinct nodes is connected
/// independently with probability `p`.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ErdosRenyi {
    pub n: usize,
    pub p: f64,
}

impl ErdosRenyi {
    pub fn new(n: usize, p: f64) -> Self {
        ErdosRenyi { n, p }
    }
}

impl Generate for ErdosRenyi {
    fn validate(&self) -> Result<()> {
        node_count(self.n)?;
        assert_probability("p", self.p)
    }

    /// Walks the pairs `(v, w)` with `w < v` in the order `(1, 0), (2, 0),
    /// (2, 1), (3, 0), …` and jumps geometrically distributed gaps between
    /// included pairs, so sparse graphs cost `O(n + m)` instead of `O(n²)`.
    #[instrument(level = "debug", skip(engine))]
    fn sample(&self, engine: &mut RandomEngine) -> Result<Graph> {
        let mut graph = empty_graph(self.n)?;
        let n = node_count(self.n)?;
        if n < 2 {
            return Ok(graph);
        }

        // Number of pairs before row v is v * (v - 1) / 2; track the row
        // incrementally instead of inverting that formula.
        let pairs = n
            .checked_mul(n - 1)
            .map(|twice| twice / 2)
            .ok_or(GraphError::TooManyNodes(self.n))?;
        let mut v = 1;
        let mut row_start = 0;
        let mut edges = Vec::new();
        bernoulli_indices(engine, pairs, self.p, |pair| {
            while pair >= row_start + v {
                row_start += v;
                v += 1;
            }
            edges.push((v, pair - row_start));
        });
        graph.add_edges_from(edges);

        Ok(graph)
    }
}

/// Returns a `G(n, p)` random graph on the nodes `0..n`.
pub fn gnp_random_graph(
    n: usize,
    p: f64,
    random_engine: Option<&mut RandomEngine>,
) -> Result<Graph> {
    ErdosRenyi::new(n, p).generate(random_engine)
}
