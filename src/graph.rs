mod error;

pub mod export;
mod observer;
mod simple_graph;
mod views;

pub use error::{ErrorKind, GraphError, Result};
pub use observer::{GraphEvent, GraphObserver, TracingObserver};
pub use simple_graph::{assert_normalized_node_labels, EdgeQuery, Graph};
pub use views::{DegreeView, Degrees, EdgeView, Edges, NeighborView, Neighbors, NodeView, Nodes};

pub type Node = i64;

pub type Edge = (Node, Node);

/// The capabilities an external graph algorithm needs from a container.
///
/// Algorithms written against this trait work with [`Graph`] without knowing
/// its representation.
pub trait SimpleGraph {
    /// Returns the number of nodes in this graph.
    fn order(&self) -> usize;

    /// Returns the number of edges in this graph.
    fn size(&self) -> usize;

    /// Returns an iterator over all nodes of this graph.
    fn iter_nodes(&self) -> Box<dyn Iterator<Item = Node> + '_>;

    /// Returns an iterator over the neighbors of node with given id.
    /// Returns an error if that node is not in the graph.
    fn iter_neighbors(&self, id: Node) -> Result<Box<dyn Iterator<Item = Node> + '_>>;

    /// Returns the count of neighbors at node with given id.
    /// Returns an error if the node is not in the graph.
    fn degree(&self, id: Node) -> Result<usize>;

    /// Returns true if node with id is a member, or false otherwise.
    fn has_node(&self, id: Node) -> bool;

    /// Returns true if the edge exists, or false otherwise.
    fn has_edge(&self, edge: Edge) -> bool;

    /// Adds a node. Adding an existing node does nothing.
    fn add_node(&mut self, id: Node);

    /// Removes a node and every edge from or to it.
    /// Returns an error if the node is not in the graph.
    fn remove_node(&mut self, id: Node) -> Result<()>;

    /// Adds an edge, creating missing endpoints.
    fn add_edge(&mut self, edge: Edge);

    /// Removes an edge.
    /// Returns an error if the edge or one of its nodes is missing.
    fn remove_edge(&mut self, edge: Edge) -> Result<()>;
}
