//! Error type shared by the graphkit crates.
//!
//! Each crate keeps its own precise error enum and converts into [`GkError`]
//! at its boundary.

use thiserror::Error;

pub type GkResult<T> = Result<T, GkError>;

#[derive(Error, Debug)]
pub enum GkError {
    /// A weight or cost is NaN or infinite.
    #[error("Non-finite {what} value: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("{what} {index} is out of range for {len} nodes")]
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// Graph storage reached a state its own operations never produce.
    #[error("Graph invariant violated: {what}")]
    Invariant { what: String },

    #[error("{what} is not supported")]
    Unsupported { what: &'static str },
}
