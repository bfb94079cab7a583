//! Graphviz DOT export.

use std::fmt::Write;

use gk_graph::Graph;

use crate::report::format_real;

/// Render `graph` in DOT.
///
/// Simple graphs are emitted as `strict` so Graphviz merges the two stored
/// arcs of an undirected edge; multigraphs (task networks) are not.
pub fn to_dot(graph: &Graph, multi_edge: bool) -> String {
    let mut dot = String::new();
    if !multi_edge {
        dot.push_str("strict ");
    }
    let connector = if graph.is_directed() {
        dot.push_str("di");
        " -> "
    } else {
        " -- "
    };
    dot.push_str("graph G {\n");

    for node in graph.nodes() {
        let _ = writeln!(
            dot,
            "  {} [weight = {}];",
            node.label(),
            format_real(node.weight(), 2, 5)
        );
    }
    for edge in graph.edges() {
        let _ = write!(
            dot,
            "\n  {}{}{}",
            edge.source_label(),
            connector,
            edge.target_label()
        );
        if graph.is_edge_weighted() {
            let w = format_real(edge.weight(), 2, 5);
            let _ = write!(dot, " [weight = {w}] [label = {w}]");
        }
        dot.push(';');
    }
    dot.push_str("\n}\n");
    dot
}
