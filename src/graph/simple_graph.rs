use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use super::{
    DegreeView, Edge, EdgeView, GraphError, GraphEvent, GraphObserver, NeighborView, Node,
    NodeView, Nodes, Result, SimpleGraph,
};

/// Implements an undirected simple graph using ordered adjacency sets.
///
/// Adjacency is kept symmetric: `v` is a neighbor of `u` exactly when `u` is a
/// neighbor of `v`. Nodes and neighbors are ordered, so every iteration, and
/// therefore every seeded generator run, is deterministic.
#[derive(Clone, Default)]
pub struct Graph {
    adjacency: BTreeMap<Node, BTreeSet<Node>>,
    size: usize,
    name: String,
    observer: Option<Arc<dyn GraphObserver>>,
}

/// Options for [`Graph::edges_with`].
///
/// Only the unfiltered, attribute free edge set is available; anything else is
/// reported as unsupported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeQuery {
    pub nbunch: Option<Vec<Node>>,
    pub data: bool,
}

impl Graph {
    /// Constructs an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a graph from a node set and an edge set.
    /// Nodes are inserted first, then edges, so endpoints missing from `nodes`
    /// are created on the fly.
    pub fn from_parts<N, E>(nodes: N, edges: E) -> Self
    where
        N: IntoIterator<Item = Node>,
        E: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new();
        graph.add_nodes_from(nodes);
        graph.add_edges_from(edges);
        graph
    }

    /// Attaches an observer that receives every subsequent mutation.
    pub fn with_observer(mut self, observer: Arc<dyn GraphObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Replaces the current observer. `None` detaches it.
    pub fn set_observer(&mut self, observer: Option<Arc<dyn GraphObserver>>) {
        self.observer = observer;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    pub(super) fn adjacency(&self) -> &BTreeMap<Node, BTreeSet<Node>> {
        &self.adjacency
    }

    #[inline]
    fn emit(&self, event: GraphEvent) {
        if let Some(observer) = &self.observer {
            observer.observe(&event);
        }
    }

    /// Adds a node. Adding a node that is already present does nothing.
    pub fn add_node(&mut self, node: Node) {
        if !self.adjacency.contains_key(&node) {
            self.adjacency.insert(node, BTreeSet::new());
            self.emit(GraphEvent::AddedNode(node));
        }
    }

    pub fn add_nodes_from<I: IntoIterator<Item = Node>>(&mut self, nodes: I) {
        for node in nodes {
            self.add_node(node);
        }
    }

    /// Removes a node and all edges from or to it.
    /// Returns an error if the node is not in the graph.
    pub fn remove_node(&mut self, node: Node) -> Result<()> {
        let neighbors = self
            .adjacency
            .remove(&node)
            .ok_or(GraphError::MissingNode(node))?;

        for neighbor in neighbors.iter() {
            if *neighbor != node {
                if let Some(others) = self.adjacency.get_mut(neighbor) {
                    others.remove(&node);
                }
            }
        }
        self.size -= neighbors.len();
        self.emit(GraphEvent::RemovedNode(node));
        Ok(())
    }

    /// Removes every given node that is in the graph and skips the others.
    pub fn remove_nodes_from<I: IntoIterator<Item = Node>>(&mut self, nodes: I) {
        for node in nodes {
            // Absent nodes are already in the desired state.
            let _ = self.remove_node(node);
        }
    }

    /// Adds the undirected edge `(u, v)`, creating missing endpoints.
    /// Adding an existing edge does nothing.
    pub fn add_edge(&mut self, u: Node, v: Node) {
        self.add_node(u);
        self.add_node(v);

        let inserted = self
            .adjacency
            .get_mut(&u)
            .map_or(false, |neighbors| neighbors.insert(v));
        if inserted {
            if let Some(neighbors) = self.adjacency.get_mut(&v) {
                neighbors.insert(u);
            }
            self.size += 1;
            self.emit(GraphEvent::AddedEdge(u, v));
        }
    }

    pub fn add_edges_from<I: IntoIterator<Item = Edge>>(&mut self, edges: I) {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }

    /// Removes the undirected edge `(u, v)`.
    /// Returns an error if either endpoint or the edge itself is missing.
    pub fn remove_edge(&mut self, u: Node, v: Node) -> Result<()> {
        if !self.has_node(u) {
            return Err(GraphError::MissingNode(u));
        } else if !self.has_node(v) {
            return Err(GraphError::MissingNode(v));
        }

        let removed = self
            .adjacency
            .get_mut(&u)
            .map_or(false, |neighbors| neighbors.remove(&v));
        if !removed {
            return Err(GraphError::MissingEdge(u, v));
        }
        if let Some(neighbors) = self.adjacency.get_mut(&v) {
            neighbors.remove(&u);
        }
        self.size -= 1;
        self.emit(GraphEvent::RemovedEdge(u, v));
        Ok(())
    }

    /// Removes every given edge that is in the graph and skips the others.
    pub fn remove_edges_from<I: IntoIterator<Item = Edge>>(&mut self, edges: I) {
        for (u, v) in edges {
            let _ = self.remove_edge(u, v);
        }
    }

    pub fn has_node(&self, node: Node) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Membership test, equivalent to [`Graph::has_node`].
    pub fn contains(&self, node: Node) -> bool {
        self.has_node(node)
    }

    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.adjacency
            .get(&u)
            .map_or(false, |neighbors| neighbors.contains(&v))
    }

    /// Returns the neighbors of `node`.
    /// Returns an error if the node is not in the graph.
    pub fn neighbors(&self, node: Node) -> Result<NeighborView<'_>> {
        self.adjacency
            .get(&node)
            .map(NeighborView::new)
            .ok_or(GraphError::MissingNode(node))
    }

    pub fn degree(&self) -> DegreeView<'_> {
        DegreeView::new(self)
    }

    pub fn nodes(&self) -> NodeView<'_> {
        NodeView::new(self)
    }

    pub fn iter(&self) -> Nodes<'_> {
        self.nodes().iter()
    }

    /// Returns the full undirected edge set.
    pub fn edges(&self) -> EdgeView<'_> {
        EdgeView::new(self)
    }

    /// Returns the edge set for a query.
    /// Filtering by nodes and attribute payloads are not supported.
    pub fn edges_with(&self, query: &EdgeQuery) -> Result<EdgeView<'_>> {
        if query.nbunch.is_some() {
            return Err(GraphError::Unsupported("filtering edges by node"));
        } else if query.data {
            return Err(GraphError::Unsupported("edge attributes"));
        }
        Ok(self.edges())
    }

    pub fn number_of_nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.size
    }

    /// Returns the number of edges.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Checks that the nodes of `graph` are exactly `0..n`.
///
/// Returns the graph itself so the check can be chained. Generators that use
/// node ids as positions in dense arrays require this.
pub fn assert_normalized_node_labels(graph: &Graph) -> Result<&Graph> {
    // Ordered, duplicate free keys are 0..n exactly when the i-th key is i.
    let first_gap = graph
        .adjacency
        .keys()
        .zip(0..)
        .find(|(node, expected)| **node != *expected)
        .map(|(_, expected)| expected);

    match first_gap {
        None => Ok(graph),
        Some(first_gap) => Err(GraphError::NotNormalized {
            nodes: graph.number_of_nodes(),
            first_gap,
        }),
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.adjacency == other.adjacency
    }
}

impl Eq for Graph {}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("name", &self.name)
            .field("order", &self.number_of_nodes())
            .field("size", &self.size)
            .field("adjacency", &self.adjacency)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = Node;
    type IntoIter = Nodes<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl SimpleGraph for Graph {
    fn order(&self) -> usize {
        self.number_of_nodes()
    }

    fn size(&self) -> usize {
        self.number_of_edges()
    }

    fn iter_nodes(&self) -> Box<dyn Iterator<Item = Node> + '_> {
        Box::new(self.iter())
    }

    fn iter_neighbors(&self, id: Node) -> Result<Box<dyn Iterator<Item = Node> + '_>> {
        Ok(Box::new(self.neighbors(id)?.into_iter()))
    }

    fn degree(&self, id: Node) -> Result<usize> {
        Graph::degree(self).get(id)
    }

    fn has_node(&self, id: Node) -> bool {
        Graph::has_node(self, id)
    }

    fn has_edge(&self, edge: Edge) -> bool {
        Graph::has_edge(self, edge.0, edge.1)
    }

    fn add_node(&mut self, id: Node) {
        Graph::add_node(self, id)
    }

    fn remove_node(&mut self, id: Node) -> Result<()> {
        Graph::remove_node(self, id)
    }

    fn add_edge(&mut self, edge: Edge) {
        Graph::add_edge(self, edge.0, edge.1)
    }

    fn remove_edge(&mut self, edge: Edge) -> Result<()> {
        Graph::remove_edge(self, edge.0, edge.1)
    }
}
