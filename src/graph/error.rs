use std::fmt;

use thiserror::Error;

use super::Node;

/// Coarse classification of a [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// A strict operation referenced an absent node or edge.
    NotFound,
    /// The requested view feature is intentionally not implemented.
    NotSupported,
    /// A parameter was outside its interval or a seed was not recognized.
    InvalidArgument,
    /// Node labels were not normalized where normalization is required.
    ValidationError,
    /// The operating system could not provide entropy.
    Unavailable,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotFound => "not found",
            Self::NotSupported => "not supported",
            Self::InvalidArgument => "invalid argument",
            Self::ValidationError => "validation error",
            Self::Unavailable => "unavailable",
        };
        f.write_str(name)
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("node {0} is not in the graph")]
    MissingNode(Node),
    #[error("edge ({0}, {1}) is not in the graph")]
    MissingEdge(Node, Node),
    #[error("{0} is not supported")]
    Unsupported(&'static str),
    #[error("{name} must belong to the interval {interval} but got {value}")]
    OutOfInterval {
        name: String,
        value: String,
        interval: String,
    },
    #[error("{0:?} is not a valid seed for a random engine")]
    InvalidSeed(String),
    #[error("cannot label {0} nodes with integer node ids")]
    TooManyNodes(usize),
    #[error(
        "node labels must be consecutive integers starting at zero \
         but {first_gap} is missing from {nodes} nodes"
    )]
    NotNormalized { nodes: usize, first_gap: Node },
    #[error("invalid generation config: {0}")]
    Config(String),
    #[error("failed to export graph: {0}")]
    Export(String),
    #[error("failed to obtain a seed from the operating system: {0}")]
    Entropy(getrandom::Error),
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingNode(_) | Self::MissingEdge(..) => ErrorKind::NotFound,
            Self::Unsupported(_) => ErrorKind::NotSupported,
            Self::OutOfInterval { .. }
            | Self::InvalidSeed(_)
            | Self::TooManyNodes(_)
            | Self::Config(_) => ErrorKind::InvalidArgument,
            Self::NotNormalized { .. } => ErrorKind::ValidationError,
            Self::Export(_) | Self::Entropy(_) => ErrorKind::Unavailable,
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
