//! Graph-specific error types.

use gk_core::{GkError, NodeId, Real};

/// Graph construction and lookup errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An id does not name a node of this graph.
    NodeNotFound { id: NodeId },

    /// A node or edge weight is NaN or infinite.
    InvalidWeight { what: &'static str, value: Real },

    /// The operation exists in the API but has no implementation.
    NotImplemented { what: &'static str },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::NodeNotFound { id } => {
                write!(f, "Node {} does not exist", id)
            }
            GraphError::InvalidWeight { what, value } => {
                write!(f, "Invalid {} weight: {}", what, value)
            }
            GraphError::NotImplemented { what } => {
                write!(f, "{} is not implemented", what)
            }
        }
    }
}

impl std::error::Error for GraphError {}

pub type GraphResult<T> = Result<T, GraphError>;

impl From<GraphError> for GkError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::NotImplemented { what } => GkError::Unsupported { what },
            GraphError::InvalidWeight { what, value } => GkError::NonFinite { what, value },
            other => GkError::Invariant {
                what: other.to_string(),
            },
        }
    }
}
