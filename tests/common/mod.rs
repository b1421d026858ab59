#![allow(dead_code)]

use std::collections::{BTreeSet, VecDeque};

use gengraph::{Node, SimpleGraph};

/// Installs a test writer subscriber so `RUST_LOG`-style debug output shows up
/// next to failing tests. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Returns the connected components of `graph`, found by breadth-first search.
pub fn connected_components<G: SimpleGraph>(graph: &G) -> Vec<BTreeSet<Node>> {
    let mut seen = BTreeSet::new();
    let mut components = Vec::new();

    for start in graph.iter_nodes() {
        if !seen.insert(start) {
            continue;
        }

        let mut component = BTreeSet::new();
        let mut queue = VecDeque::from(vec![start]);
        while let Some(node) = queue.pop_front() {
            component.insert(node);
            let neighbors = graph
                .iter_neighbors(node)
                .expect("BFS only visits nodes of the graph");
            for neighbor in neighbors {
                if seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        components.push(component);
    }

    components
}

pub fn is_connected<G: SimpleGraph>(graph: &G) -> bool {
    connected_components(graph).len() <= 1
}
