//! Graph algorithms over [`gk_graph::Graph`].
//!
//! Every algorithm is a free function taking the graph by reference. Results
//! are new values (distance tables, trees, node sets); the input is never
//! modified. Structural preconditions are checked up front and reported as
//! [`AlgoError`].

pub mod dominating;
pub mod error;
pub mod mst;
pub mod pert;
pub mod reactive;
pub mod shortest_path;
mod validate;

pub use dominating::{
    DominatingSet, RandomizedConfig, SelectedNode, dominating_set_randomized,
    dominating_set_weighted,
};
pub use error::{AlgoError, AlgoResult};
pub use mst::{kruskal, prim};
pub use pert::{CriticalPath, Task, critical_path};
pub use reactive::{AlfaSchedule, ReactiveConfig, ReactiveSolution, dominating_set_reactive};
pub use shortest_path::{DistanceMatrix, dijkstra, floyd_warshall};
