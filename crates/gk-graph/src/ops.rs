//! Set operations between two graphs.
//!
//! Results are matched by label, take the directedness of the first operand,
//! carry no weights, and contain only nodes touched by a resulting arc.

use crate::graph::{Graph, GraphConfig};
use crate::indexing::LabelIndex;

fn empty_like(graph: &Graph) -> Graph {
    Graph::unbounded(GraphConfig {
        directed: graph.is_directed(),
        weighted_edge: false,
        weighted_node: false,
    })
}

/// Every arc of `first` plus every arc of `second` not already present.
pub fn union(first: &Graph, second: &Graph) -> Graph {
    let mut result = empty_like(first);
    for edge in first.edges() {
        result.insert_edge(edge.source_label(), edge.target_label(), 1.0);
    }
    for edge in second.edges() {
        if !result.has_edge_between_labels(edge.source_label(), edge.target_label()) {
            result.insert_edge(edge.source_label(), edge.target_label(), 1.0);
        }
    }
    result.fix_order();
    result
}

/// Arcs of `first` that `second` also has.
pub fn intersection(first: &Graph, second: &Graph) -> Graph {
    let index = LabelIndex::from_graph(second);
    let mut result = empty_like(first);
    for edge in first.edges() {
        if index.has_edge(second, edge.source_label(), edge.target_label()) {
            result.insert_edge(edge.source_label(), edge.target_label(), 1.0);
        }
    }
    result.fix_order();
    result
}

/// Arcs of `first` that `second` does not have.
pub fn difference(first: &Graph, second: &Graph) -> Graph {
    let index = LabelIndex::from_graph(second);
    let mut result = empty_like(first);
    for edge in first.edges() {
        if !index.has_edge(second, edge.source_label(), edge.target_label()) {
            result.insert_edge(edge.source_label(), edge.target_label(), 1.0);
        }
    }
    result.fix_order();
    result
}
