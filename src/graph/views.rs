//! Borrowed projections over a [`Graph`].
//!
//! Views hold a shared borrow and compute everything on access, so they always
//! describe the graph as it is when they are used.

use std::collections::{btree_map, btree_set, BTreeSet};
use std::iter::FusedIterator;

use super::{Edge, Graph, GraphError, Node, Result};

/// The node set of a graph, in ascending order.
#[derive(Clone, Copy, Debug)]
pub struct NodeView<'a> {
    graph: &'a Graph,
}

impl<'a> NodeView<'a> {
    pub(super) fn new(graph: &'a Graph) -> Self {
        NodeView { graph }
    }

    pub fn len(&self) -> usize {
        self.graph.number_of_nodes()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, node: Node) -> bool {
        self.graph.has_node(node)
    }

    pub fn iter(&self) -> Nodes<'a> {
        Nodes {
            inner: self.graph.adjacency().keys(),
        }
    }
}

impl<'a> IntoIterator for NodeView<'a> {
    type Item = Node;
    type IntoIter = Nodes<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct Nodes<'a> {
    inner: btree_map::Keys<'a, Node, BTreeSet<Node>>,
}

impl Iterator for Nodes<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Nodes<'_> {}
impl FusedIterator for Nodes<'_> {}

/// The undirected edge set of a graph.
///
/// Every edge is reported once as `(u, v)` with `u <= v`, in ascending order.
#[derive(Clone, Copy, Debug)]
pub struct EdgeView<'a> {
    graph: &'a Graph,
}

impl<'a> EdgeView<'a> {
    pub(super) fn new(graph: &'a Graph) -> Self {
        EdgeView { graph }
    }

    pub fn len(&self) -> usize {
        self.graph.number_of_edges()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, edge: Edge) -> bool {
        self.graph.has_edge(edge.0, edge.1)
    }

    pub fn iter(&self) -> Edges<'a> {
        Edges {
            nodes: self.graph.adjacency().iter(),
            current: None,
            remaining: self.len(),
        }
    }
}

impl<'a> IntoIterator for EdgeView<'a> {
    type Item = Edge;
    type IntoIter = Edges<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct Edges<'a> {
    nodes: btree_map::Iter<'a, Node, BTreeSet<Node>>,
    current: Option<(Node, btree_set::Range<'a, Node>)>,
    remaining: usize,
}

impl Iterator for Edges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        loop {
            if let Some((u, upper)) = self.current.as_mut() {
                if let Some(&v) = upper.next() {
                    self.remaining -= 1;
                    return Some((*u, v));
                }
            }
            let (&u, neighbors) = self.nodes.next()?;
            // Only the half of the adjacency with v >= u, so each edge shows up once.
            self.current = Some((u, neighbors.range(u..)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Edges<'_> {}
impl FusedIterator for Edges<'_> {}

/// Neighbor counts, keyed by node.
#[derive(Clone, Copy, Debug)]
pub struct DegreeView<'a> {
    graph: &'a Graph,
}

impl<'a> DegreeView<'a> {
    pub(super) fn new(graph: &'a Graph) -> Self {
        DegreeView { graph }
    }

    /// Returns the degree of `node`, or an error if it is not in the graph.
    pub fn get(&self, node: Node) -> Result<usize> {
        self.graph
            .adjacency()
            .get(&node)
            .map(BTreeSet::len)
            .ok_or(GraphError::MissingNode(node))
    }

    pub fn len(&self) -> usize {
        self.graph.number_of_nodes()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Degrees<'a> {
        Degrees {
            inner: self.graph.adjacency().iter(),
        }
    }
}

impl<'a> IntoIterator for DegreeView<'a> {
    type Item = (Node, usize);
    type IntoIter = Degrees<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct Degrees<'a> {
    inner: btree_map::Iter<'a, Node, BTreeSet<Node>>,
}

impl Iterator for Degrees<'_> {
    type Item = (Node, usize);

    fn next(&mut self) -> Option<(Node, usize)> {
        self.inner
            .next()
            .map(|(&node, neighbors)| (node, neighbors.len()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Degrees<'_> {}
impl FusedIterator for Degrees<'_> {}

/// The neighbors of a single node, in ascending order.
#[derive(Clone, Copy, Debug)]
pub struct NeighborView<'a> {
    neighbors: &'a BTreeSet<Node>,
}

impl<'a> NeighborView<'a> {
    pub(super) fn new(neighbors: &'a BTreeSet<Node>) -> Self {
        NeighborView { neighbors }
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn contains(&self, node: Node) -> bool {
        self.neighbors.contains(&node)
    }

    /// Returns the neighbor at position `index` of the ascending order.
    pub fn nth(&self, index: usize) -> Option<Node> {
        self.neighbors.iter().nth(index).copied()
    }

    pub fn iter(&self) -> Neighbors<'a> {
        Neighbors {
            inner: self.neighbors.iter(),
        }
    }
}

impl<'a> IntoIterator for NeighborView<'a> {
    type Item = Node;
    type IntoIter = Neighbors<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    inner: btree_set::Iter<'a, Node>,
}

impl Iterator for Neighbors<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Neighbors<'_> {
    fn next_back(&mut self) -> Option<Node> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
impl FusedIterator for Neighbors<'_> {}
