//! Errors surfaced by the command-line shell.

use std::path::PathBuf;

use gk_algo::AlgoError;
use gk_core::GkError;
use gk_graph::GraphError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read graph file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed input at token {position}: {what}")]
    Parse { position: usize, what: String },

    #[error("No node is labelled {0}")]
    UnknownLabel(gk_core::Label),

    #[error("Invalid parameter file {path}: {source}")]
    Params {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] GkError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Algo(#[from] AlgoError),
}
