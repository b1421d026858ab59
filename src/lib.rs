//! Random graph generators on top of an integer labeled, undirected simple
//! graph container.
//!
//! Every generator takes an optional [`RandomEngine`]; runs with a freshly
//! seeded engine are reproducible.

pub mod config;
pub mod generate;
pub mod graph;
pub mod rng;
pub mod util;

pub use generate::{
    duplication_complementation_graph, duplication_mutation_graph, gnp_random_graph,
    redirection_graph, surfer_graph, Generate,
};
pub use graph::{ErrorKind, Graph, GraphError, Node, Result, SimpleGraph};
pub use rng::{get_random_engine, RandomEngine};
