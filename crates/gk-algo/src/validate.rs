//! Structural preconditions shared by the algorithms.

use gk_core::NodeId;
use gk_graph::Graph;
use tracing::error;

use crate::error::{AlgoError, AlgoResult};

/// Spanning-tree algorithms need an undirected, connected graph.
pub(crate) fn require_undirected_connected(
    graph: &Graph,
    algorithm: &'static str,
) -> AlgoResult<()> {
    if graph.is_directed() {
        error!(algorithm, "algorithm does not work on directed graphs");
        return Err(AlgoError::RequiresUndirected { algorithm });
    }
    if !graph.is_connected() {
        error!(algorithm, "algorithm does not work on disconnected graphs");
        return Err(AlgoError::Disconnected { algorithm });
    }
    Ok(())
}

/// The id must name a node of the graph.
pub(crate) fn require_node(graph: &Graph, id: NodeId) -> AlgoResult<()> {
    if graph.search_node(id) {
        Ok(())
    } else {
        error!(%id, nodes = graph.node_count(), "start node out of range");
        Err(AlgoError::NodeOutOfRange {
            id,
            len: graph.node_count(),
        })
    }
}

/// A task network is directed, edge-weighted, has node 0 as its only source
/// and the last node as its only sink.
///
/// Acyclicity is checked later by the passes themselves.
pub(crate) fn require_task_network(graph: &Graph) -> AlgoResult<()> {
    let fail = |what: String| {
        error!(%what, "graph is not a task network");
        Err(AlgoError::NotATaskNetwork { what })
    };

    if !graph.is_directed() {
        return fail("graph must be directed".to_string());
    }
    if !graph.is_edge_weighted() {
        return fail("graph must have weighted edges".to_string());
    }
    let n = graph.node_count();
    if n < 2 {
        return fail(format!("need at least 2 nodes, found {n}"));
    }

    let mut has_predecessor = vec![false; n];
    for edge in graph.edges() {
        has_predecessor[edge.target().as_usize()] = true;
    }

    for node in graph.nodes() {
        let idx = node.id().as_usize();
        let is_source = idx == 0;
        let is_sink = idx == n - 1;
        if is_source && has_predecessor[idx] {
            return fail(format!("source node {} has incoming arcs", node.label()));
        }
        if !is_source && !has_predecessor[idx] {
            return fail(format!("node {} has no predecessor", node.label()));
        }
        if is_sink && !node.edges().is_empty() {
            return fail(format!("sink node {} has outgoing arcs", node.label()));
        }
        if !is_sink && node.edges().is_empty() {
            return fail(format!("node {} has no successor", node.label()));
        }
    }
    Ok(())
}
