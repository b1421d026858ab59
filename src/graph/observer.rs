use std::fmt;

use super::Node;

/// A structural change applied to a [`super::Graph`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphEvent {
    AddedNode(Node),
    RemovedNode(Node),
    AddedEdge(Node, Node),
    RemovedEdge(Node, Node),
}

impl fmt::Display for GraphEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddedNode(v) => write!(f, "added node {}", v),
            Self::RemovedNode(v) => write!(f, "removed node {}", v),
            Self::AddedEdge(u, v) => write!(f, "added edge ({},{})", u, v),
            Self::RemovedEdge(u, v) => write!(f, "removed edge ({},{})", u, v),
        }
    }
}

/// Receives every effective mutation of a graph it is attached to.
///
/// Graphs carry no observer by default. Attaching one is the only way to
/// trace mutations, so untraced graphs never pay for formatting events.
pub trait GraphObserver: Send + Sync {
    fn observe(&self, event: &GraphEvent);
}

/// Forwards graph events to the `tracing` facade at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl GraphObserver for TracingObserver {
    fn observe(&self, event: &GraphEvent) {
        tracing::debug!(target: "gengraph::graph", "{}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_render_as_trace_lines() {
        assert_eq!(GraphEvent::AddedNode(17).to_string(), "added node 17");
        assert_eq!(GraphEvent::RemovedNode(17).to_string(), "removed node 17");
        assert_eq!(GraphEvent::AddedEdge(0, 7).to_string(), "added edge (0,7)");
        assert_eq!(
            GraphEvent::RemovedEdge(0, 7).to_string(),
            "removed edge (0,7)"
        );
    }
}
