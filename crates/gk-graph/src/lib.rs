//! gk-graph: graph layer for graphkit.
//!
//! Provides:
//! - Core graph data structures (Edge, Node, Graph, GraphConfig)
//! - Incremental insertion with dedup and order-capping rules
//! - A fluent builder with weight validation
//! - Label indexing, reachability and connectivity
//! - Set operations (union, intersection, difference)
//!
//! # Example
//!
//! ```
//! use gk_graph::GraphBuilder;
//!
//! let graph = GraphBuilder::new()
//!     .weighted_edges(true)
//!     .edge(1, 2, 1.0)
//!     .edge(2, 3, 2.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(graph.node_count(), 3);
//! assert!(graph.is_connected());
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub mod ops;
mod traversal;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph, GraphConfig, Node};
pub use indexing::LabelIndex;
