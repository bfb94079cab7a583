//! Critical path of a task network (PERT).
//!
//! Nodes are events and arcs are tasks weighted by their duration. Node 0 is
//! the project start and the last node its end.

use gk_core::{Label, NodeId, Real, Tolerances, nearly_equal};
use gk_graph::{Edge, Graph};
use tracing::{debug, error};

use crate::error::{AlgoError, AlgoResult};
use crate::validate;

/// A task (arc) of the network.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Task {
    pub source: NodeId,
    pub source_label: Label,
    pub target: NodeId,
    pub target_label: Label,
    pub duration: Real,
}

impl From<&Edge> for Task {
    fn from(edge: &Edge) -> Self {
        Self {
            source: edge.source(),
            source_label: edge.source_label(),
            target: edge.target(),
            target_label: edge.target_label(),
            duration: edge.weight(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CriticalPath {
    /// Sum of the durations along [`CriticalPath::tasks`].
    pub duration: Real,
    /// One chain of zero-slack tasks from start to end.
    pub tasks: Vec<Task>,
    /// Every zero-slack task, in storage order.
    pub critical_edges: Vec<Task>,
    /// Earliest event time per node id.
    pub earliest: Vec<Real>,
    /// Latest event time per node id.
    pub latest: Vec<Real>,
}

impl CriticalPath {
    /// Slack of a task: how long it can slip without delaying the end.
    pub fn slack(&self, task: &Task) -> Real {
        self.latest[task.target.as_usize()] - self.earliest[task.source.as_usize()] - task.duration
    }
}

fn cycle_error(pass: &str) -> AlgoError {
    let what = format!("{pass} pass found no ready node, the network has a cycle");
    error!(%what, "graph is not a task network");
    AlgoError::NotATaskNetwork { what }
}

/// Compute event times and the critical path.
pub fn critical_path(graph: &Graph) -> AlgoResult<CriticalPath> {
    validate::require_task_network(graph)?;

    let n = graph.node_count();
    let sink = n - 1;

    let mut predecessors: Vec<Vec<(usize, Real)>> = vec![Vec::new(); n];
    for edge in graph.edges() {
        predecessors[edge.target().as_usize()].push((edge.source().as_usize(), edge.weight()));
    }

    // Forward pass, lowest ready id first.
    let mut earliest = vec![0.0; n];
    let mut done = vec![false; n];
    done[0] = true;
    for _ in 1..n {
        let ready = (0..n).find(|&i| !done[i] && predecessors[i].iter().all(|&(s, _)| done[s]));
        let Some(i) = ready else {
            return Err(cycle_error("forward"));
        };
        earliest[i] = predecessors[i]
            .iter()
            .map(|&(s, w)| earliest[s] + w)
            .fold(0.0, Real::max);
        done[i] = true;
    }

    // Backward pass, highest ready id first.
    let mut latest = vec![0.0; n];
    done.fill(false);
    done[sink] = true;
    latest[sink] = earliest[sink];
    for _ in 1..n {
        let ready = (0..n).rev().find(|&i| {
            !done[i] && graph.nodes()[i].edges().iter().all(|e| done[e.target().as_usize()])
        });
        let Some(i) = ready else {
            return Err(cycle_error("backward"));
        };
        latest[i] = graph.nodes()[i]
            .edges()
            .iter()
            .map(|e| latest[e.target().as_usize()] - e.weight())
            .fold(Real::INFINITY, Real::min);
        done[i] = true;
    }

    let tol = Tolerances::default();
    let critical_edges: Vec<Task> = graph
        .edges()
        .filter(|e| {
            nearly_equal(
                latest[e.target().as_usize()],
                earliest[e.source().as_usize()] + e.weight(),
                tol,
            )
        })
        .map(Task::from)
        .collect();

    let mut tasks = Vec::new();
    let mut current = 0;
    while current != sink && tasks.len() < n {
        let Some(next) = critical_edges.iter().find(|t| t.source.as_usize() == current) else {
            break;
        };
        current = next.target.as_usize();
        tasks.push(next.clone());
    }
    let duration = tasks.iter().map(|t| t.duration).sum();

    debug!(
        duration,
        chain = tasks.len(),
        critical = critical_edges.len(),
        "critical path found"
    );
    Ok(CriticalPath {
        duration,
        tasks,
        critical_edges,
        earliest,
        latest,
    })
}
