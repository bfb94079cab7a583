//! Error types for graph algorithms.

use gk_core::error::GkError;
use gk_core::NodeId;
use thiserror::Error;

/// Errors that can occur while running an algorithm.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgoError {
    #[error("{algorithm} does not work on directed graphs")]
    RequiresUndirected { algorithm: &'static str },

    #[error("{algorithm} does not work on disconnected graphs")]
    Disconnected { algorithm: &'static str },

    #[error("Not a task network: {what}")]
    NotATaskNetwork { what: String },

    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: String },

    #[error("Node {id} is out of range (graph has {len} nodes)")]
    NodeOutOfRange { id: NodeId, len: usize },

    #[error("Graph error: {0}")]
    Graph(#[from] gk_graph::GraphError),
}

pub type AlgoResult<T> = Result<T, AlgoError>;

impl From<AlgoError> for GkError {
    fn from(e: AlgoError) -> Self {
        match e {
            AlgoError::RequiresUndirected { algorithm } | AlgoError::Disconnected { algorithm } => {
                GkError::InvalidArg {
                    what: format!("graph shape for {algorithm}"),
                }
            }
            AlgoError::NotATaskNetwork { what } => GkError::InvalidArg { what },
            AlgoError::InvalidConfig { what } => GkError::InvalidArg { what },
            AlgoError::NodeOutOfRange { id, len } => GkError::OutOfRange {
                what: "node id",
                index: id.as_usize(),
                len,
            },
            AlgoError::Graph(err) => err.into(),
        }
    }
}
