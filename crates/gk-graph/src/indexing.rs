//! Label lookup index.
//!
//! `Graph::node_by_label` is a linear scan. Code that resolves many labels
//! against the same frozen graph builds a `LabelIndex` once instead.

use std::collections::HashMap;

use gk_core::{Label, NodeId};

use crate::graph::Graph;

/// Label -> node id map for one graph snapshot.
///
/// When several nodes share a label the first one (lowest id) wins, matching
/// the linear scan.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    label_to_id: HashMap<Label, NodeId>,
    /// Contiguous list of labels (id index -> label).
    labels: Vec<Label>,
}

impl LabelIndex {
    /// Build an index from a graph.
    pub fn from_graph(graph: &Graph) -> Self {
        let labels: Vec<Label> = graph.nodes().iter().map(|n| n.label()).collect();
        let mut label_to_id = HashMap::with_capacity(labels.len());
        for node in graph.nodes() {
            label_to_id.entry(node.label()).or_insert(node.id());
        }
        Self {
            label_to_id,
            labels,
        }
    }

    /// Number of nodes in the index.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Node id for a label.
    pub fn id(&self, label: Label) -> Option<NodeId> {
        self.label_to_id.get(&label).copied()
    }

    /// Label for a node id.
    pub fn label(&self, id: NodeId) -> Option<Label> {
        self.labels.get(id.as_usize()).copied()
    }

    /// True if the graph has an arc between the two labels.
    pub fn has_edge(&self, graph: &Graph, source: Label, target: Label) -> bool {
        self.id(source)
            .and_then(|id| graph.node(id))
            .is_some_and(|n| n.has_edge_to_label(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;

    #[test]
    fn index_round_trip() {
        let graph = GraphBuilder::new()
            .edge(7, 3, 1.0)
            .edge(3, 9, 1.0)
            .build()
            .unwrap();
        let index = LabelIndex::from_graph(&graph);
        assert_eq!(index.len(), 3);
        for node in graph.nodes() {
            assert_eq!(index.id(node.label()), Some(node.id()));
            assert_eq!(index.label(node.id()), Some(node.label()));
        }
        assert!(index.id(100).is_none());
        assert!(index.label(NodeId::from_index(100)).is_none());
    }

    #[test]
    fn first_duplicate_label_wins() {
        let graph = GraphBuilder::new().node(4).node(4).build().unwrap();
        let index = LabelIndex::from_graph(&graph);
        assert_eq!(index.id(4), Some(NodeId::from_index(0)));
    }

    #[test]
    fn edge_queries_follow_direction() {
        let graph = GraphBuilder::new()
            .directed(true)
            .edge(1, 2, 1.0)
            .build()
            .unwrap();
        let index = LabelIndex::from_graph(&graph);
        assert!(index.has_edge(&graph, 1, 2));
        assert!(!index.has_edge(&graph, 2, 1));
        assert!(!index.has_edge(&graph, 5, 1));
    }
}
