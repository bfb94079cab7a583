//! Fluent graph builder.

use gk_core::{Label, Real, ensure_finite};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, GraphConfig};

#[derive(Debug, Clone, Copy)]
struct PendingEdge {
    source: Label,
    target: Label,
    weight: Real,
}

/// Builder for constructing a graph in one expression.
///
/// Nodes are inserted first (in call order), then edges, through the same
/// `insert_node` / `insert_edge_with` paths an incremental loader would use.
/// Without an explicit `order` the graph is built unbounded and its order
/// fixed to the resulting node count.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    config: GraphConfig,
    order: Option<usize>,
    multi_edge: bool,
    nodes: Vec<(Label, Option<Real>)>,
    edges: Vec<PendingEdge>,
}

impl GraphBuilder {
    /// Create a new empty builder (undirected, unweighted).
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing mode configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.config.directed = directed;
        self
    }

    pub fn weighted_edges(mut self, weighted: bool) -> Self {
        self.config.weighted_edge = weighted;
        self
    }

    pub fn weighted_nodes(mut self, weighted: bool) -> Self {
        self.config.weighted_node = weighted;
        self
    }

    /// Keep parallel arcs (task networks).
    pub fn multi_edge(mut self, allow: bool) -> Self {
        self.multi_edge = allow;
        self
    }

    /// Declare the order; missing nodes become placeholders.
    pub fn order(mut self, order: usize) -> Self {
        self.order = Some(order);
        self
    }

    pub fn node(mut self, label: Label) -> Self {
        self.nodes.push((label, None));
        self
    }

    pub fn weighted_node(mut self, label: Label, weight: Real) -> Self {
        self.nodes.push((label, Some(weight)));
        self
    }

    pub fn edge(mut self, source: Label, target: Label, weight: Real) -> Self {
        self.edges.push(PendingEdge {
            source,
            target,
            weight,
        });
        self
    }

    /// Validate weights and build the graph.
    pub fn build(self) -> GraphResult<Graph> {
        for &(_, weight) in &self.nodes {
            if let Some(w) = weight {
                ensure_finite(w, "node").map_err(|_| GraphError::InvalidWeight {
                    what: "node",
                    value: w,
                })?;
            }
        }
        for edge in &self.edges {
            ensure_finite(edge.weight, "edge").map_err(|_| GraphError::InvalidWeight {
                what: "edge",
                value: edge.weight,
            })?;
        }

        let mut graph = match self.order {
            Some(order) => Graph::new(order, self.config),
            None => Graph::unbounded(self.config),
        };

        for (label, weight) in self.nodes {
            match weight {
                Some(w) => graph.insert_weighted_node(label, w),
                None => graph.insert_node(label),
            };
        }
        for edge in self.edges {
            graph.insert_edge_with(edge.source, edge.target, edge.weight, self.multi_edge);
        }

        if self.order.is_some() {
            graph.fill_placeholders();
        } else {
            graph.fix_order();
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_fixed_order_graph() {
        let graph = GraphBuilder::new()
            .weighted_edges(true)
            .edge(1, 2, 2.0)
            .edge(2, 3, 4.0)
            .build()
            .unwrap();
        assert_eq!(graph.order(), 3);
        assert_eq!(graph.node_count(), 3);
        assert!(!graph.is_directed());
        assert_eq!(graph.total_edge_weight(), 6.0);
    }

    #[test]
    fn explicit_order_fills_placeholders() {
        let graph = GraphBuilder::new().order(4).edge(1, 2, 1.0).build().unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.nodes()[3].label(), -2);
    }

    #[test]
    fn rejects_non_finite_weights() {
        let err = GraphBuilder::new()
            .weighted_edges(true)
            .edge(1, 2, Real::NAN)
            .build()
            .unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { what: "edge", .. }));

        let err = GraphBuilder::new()
            .weighted_node(1, Real::INFINITY)
            .build()
            .unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { what: "node", .. }));
    }

    #[test]
    fn multi_edge_builder_keeps_duplicates() {
        let graph = GraphBuilder::new()
            .directed(true)
            .weighted_edges(true)
            .multi_edge(true)
            .edge(1, 2, 1.0)
            .edge(1, 2, 5.0)
            .build()
            .unwrap();
        assert_eq!(graph.nodes()[0].edges().len(), 2);
    }
}
