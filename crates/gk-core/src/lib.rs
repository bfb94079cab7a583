//! gk-core: stable foundation for graphkit.
//!
//! Contains:
//! - ids (compact node identifiers and user-facing labels)
//! - numeric (Real, the infinite-cost sentinel, tolerances, float helpers)
//! - error (shared error types)
//! - timing (elapsed-time measurement for reports)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod timing;

// Re-exports: nice ergonomics for downstream crates
pub use error::{GkError, GkResult};
pub use ids::*;
pub use numeric::*;
