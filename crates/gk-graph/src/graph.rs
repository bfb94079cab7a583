//! Core graph data structures.

use gk_core::{INFINITE_COST, Label, MISSING_LABEL, NodeId, Real};
use tracing::trace;

use crate::error::{GraphError, GraphResult};

/// Mode flags fixed when a graph is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    /// Arcs are one-way; otherwise every edge is stored in both directions.
    pub directed: bool,
    /// Edge weights are meaningful; otherwise every arc weighs 1.
    pub weighted_edge: bool,
    /// Node weights are meaningful (dominating-set instances).
    pub weighted_node: bool,
}

impl GraphConfig {
    /// Undirected, unweighted.
    pub fn undirected() -> Self {
        Self::default()
    }

    /// Directed, unweighted.
    pub fn directed() -> Self {
        Self {
            directed: true,
            ..Self::default()
        }
    }

    pub fn with_edge_weights(mut self, weighted: bool) -> Self {
        self.weighted_edge = weighted;
        self
    }

    pub fn with_node_weights(mut self, weighted: bool) -> Self {
        self.weighted_node = weighted;
        self
    }
}

/// One directed arc. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    source: NodeId,
    source_label: Label,
    target: NodeId,
    target_label: Label,
    weight: Real,
}

impl Edge {
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn source_label(&self) -> Label {
        self.source_label
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn target_label(&self) -> Label {
        self.target_label
    }

    pub fn weight(&self) -> Real {
        self.weight
    }
}

/// A node and its outgoing arcs, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    label: Label,
    weight: Real,
    in_degree: usize,
    out_degree: usize,
    edges: Vec<Edge>,
}

impl Node {
    fn new(id: NodeId, label: Label, weight: Real) -> Self {
        Self {
            id,
            label,
            weight,
            in_degree: 0,
            out_degree: 0,
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn weight(&self) -> Real {
        self.weight
    }

    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    pub fn out_degree(&self) -> usize {
        self.out_degree
    }

    /// Outgoing arcs in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// True if some outgoing arc ends at `target`.
    pub fn has_edge_to(&self, target: NodeId) -> bool {
        self.edges.iter().any(|e| e.target == target)
    }

    /// True if some outgoing arc ends at a node labelled `label`.
    pub fn has_edge_to_label(&self, label: Label) -> bool {
        self.edges.iter().any(|e| e.target_label == label)
    }

    /// Direct distance to `target`: 0 to itself, the lightest arc weight to an
    /// adjacent node, [`INFINITE_COST`] otherwise.
    pub fn distance_to(&self, target: NodeId) -> Real {
        if target == self.id {
            return 0.0;
        }
        self.edges
            .iter()
            .filter(|e| e.target == target)
            .map(|e| e.weight)
            .fold(INFINITE_COST, Real::min)
    }

    /// `(target, weight)` for every outgoing arc.
    pub fn distances_to_adjacent(&self) -> Vec<(NodeId, Real)> {
        self.edges.iter().map(|e| (e.target, e.weight)).collect()
    }
}

/// An in-memory graph.
///
/// Nodes live in a vector indexed by their id; arcs are owned by their source
/// node and refer to other nodes by id only. `order` is the declared capacity
/// and may be larger than the number of nodes inserted so far.
#[derive(Debug, Clone)]
pub struct Graph {
    order: usize,
    number_edges: usize,
    config: GraphConfig,
    nodes: Vec<Node>,
}

impl Graph {
    /// Create an empty graph with a declared order.
    pub fn new(order: usize, config: GraphConfig) -> Self {
        Self {
            order,
            number_edges: 0,
            config,
            nodes: Vec::new(),
        }
    }

    /// Create an empty graph whose size is not known yet.
    ///
    /// Call [`Graph::fix_order`] once building is done.
    pub fn unbounded(config: GraphConfig) -> Self {
        Self::new(usize::MAX, config)
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of nodes actually inserted (the next id to assign).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Edge counter. Counts every accepted insertion request, including
    /// duplicates that were not stored again.
    pub fn number_edges(&self) -> usize {
        self.number_edges
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    pub fn is_edge_weighted(&self) -> bool {
        self.config.weighted_edge
    }

    pub fn is_node_weighted(&self) -> bool {
        self.config.weighted_node
    }

    /// All nodes in id order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Every stored arc, grouped by source node in id order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.nodes.iter().flat_map(|n| n.edges.iter())
    }

    /// Get a node by id (returns None if id out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.as_usize())
    }

    /// Get the first node carrying `label`.
    pub fn node_by_label(&self, label: Label) -> Option<&Node> {
        self.nodes.iter().find(|n| n.label == label)
    }

    pub fn id_by_label(&self, label: Label) -> Option<NodeId> {
        self.node_by_label(label).map(Node::id)
    }

    /// Label of a node, or [`MISSING_LABEL`] when the id is unknown.
    pub fn label_by_id(&self, id: NodeId) -> Label {
        self.node(id).map_or(MISSING_LABEL, Node::label)
    }

    pub fn search_node(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// True if the node labelled `source` has an arc to the node labelled `target`.
    pub fn has_edge_between_labels(&self, source: Label, target: Label) -> bool {
        self.node_by_label(source)
            .is_some_and(|n| n.has_edge_to_label(target))
    }

    /// Direct distance between two nodes (see [`Node::distance_to`]).
    pub fn weight_between(&self, source: NodeId, target: NodeId) -> Real {
        self.node(source)
            .map_or(INFINITE_COST, |n| n.distance_to(target))
    }

    /// Sum of all edge weights; undirected edges are counted once.
    pub fn total_edge_weight(&self) -> Real {
        let sum: Real = self.edges().map(Edge::weight).sum();
        if self.config.directed { sum } else { sum / 2.0 }
    }

    /// Append a node with the default weight for this graph's mode.
    pub fn insert_node(&mut self, label: Label) -> NodeId {
        let weight = if self.config.weighted_node { 0.0 } else { 1.0 };
        self.insert_weighted_node(label, weight)
    }

    /// Append a node with an explicit weight.
    pub fn insert_weighted_node(&mut self, label: Label, weight: Real) -> NodeId {
        let id = NodeId::from_usize(self.nodes.len());
        self.nodes.push(Node::new(id, label, weight));
        id
    }

    pub fn set_node_weight(&mut self, id: NodeId, weight: Real) -> GraphResult<()> {
        let node = self
            .nodes
            .get_mut(id.as_usize())
            .ok_or(GraphError::NodeNotFound { id })?;
        node.weight = weight;
        Ok(())
    }

    /// Insert an edge between two labels, deduplicating parallel arcs.
    ///
    /// See [`Graph::insert_edge_with`].
    pub fn insert_edge(
        &mut self,
        source_label: Label,
        target_label: Label,
        weight: Real,
    ) -> Option<(NodeId, NodeId)> {
        self.insert_edge_with(source_label, target_label, weight, false)
    }

    /// Insert an edge between two labels.
    ///
    /// Missing endpoints are created while the node count is below `order`;
    /// past that the request is dropped. Self-loops are dropped. Unless
    /// `allow_multi_edge` is set, an arc to a target the source already
    /// reaches is not stored again, but the edge and degree counters are still
    /// incremented. Returns the resolved endpoints, or `None` when dropped.
    pub fn insert_edge_with(
        &mut self,
        source_label: Label,
        target_label: Label,
        weight: Real,
        allow_multi_edge: bool,
    ) -> Option<(NodeId, NodeId)> {
        if source_label == target_label {
            trace!(label = source_label, "self-loop rejected");
            return None;
        }

        let source = self.resolve_or_create(source_label)?;
        let target = self.resolve_or_create(target_label)?;
        let weight = self.arc_weight(weight);

        let already_exists = !allow_multi_edge && self.nodes[source.as_usize()].has_edge_to(target);
        if !already_exists {
            self.push_arc(source, target, weight);
            if !self.config.directed {
                self.push_arc(target, source, weight);
                self.nodes[source.as_usize()].in_degree += 1;
                self.nodes[target.as_usize()].out_degree += 1;
            }
        } else {
            trace!(source_label, target_label, "duplicate edge not stored");
        }

        self.nodes[source.as_usize()].out_degree += 1;
        self.nodes[target.as_usize()].in_degree += 1;
        self.number_edges += 1;
        Some((source, target))
    }

    /// Insert an arc between two existing nodes without checking for
    /// duplicates. Self-loops are ignored and reported as `Ok(false)`.
    pub fn insert_edge_between(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: Real,
    ) -> GraphResult<bool> {
        if !self.search_node(source) {
            return Err(GraphError::NodeNotFound { id: source });
        }
        if !self.search_node(target) {
            return Err(GraphError::NodeNotFound { id: target });
        }
        if source == target {
            return Ok(false);
        }

        let weight = self.arc_weight(weight);
        self.push_arc(source, target, weight);
        if !self.config.directed {
            self.push_arc(target, source, weight);
            self.nodes[source.as_usize()].in_degree += 1;
            self.nodes[target.as_usize()].out_degree += 1;
        }
        self.nodes[source.as_usize()].out_degree += 1;
        self.nodes[target.as_usize()].in_degree += 1;
        self.number_edges += 1;
        Ok(true)
    }

    /// Node removal is not supported.
    pub fn remove_node(&mut self, _id: NodeId) -> GraphResult<()> {
        Err(GraphError::NotImplemented {
            what: "node removal",
        })
    }

    /// Set the declared order to the number of nodes inserted.
    pub fn fix_order(&mut self) {
        self.order = self.nodes.len();
    }

    /// Append placeholder nodes labelled -1, -2, ... until the node count
    /// reaches the declared order. Does nothing for unbounded graphs.
    pub fn fill_placeholders(&mut self) {
        if self.order == usize::MAX {
            return;
        }
        let mut label: Label = -1;
        while self.nodes.len() < self.order {
            self.insert_node(label);
            label -= 1;
        }
    }

    fn resolve_or_create(&mut self, label: Label) -> Option<NodeId> {
        if let Some(id) = self.id_by_label(label) {
            return Some(id);
        }
        if self.nodes.len() < self.order {
            Some(self.insert_node(label))
        } else {
            trace!(label, order = self.order, "node creation refused, order reached");
            None
        }
    }

    fn arc_weight(&self, weight: Real) -> Real {
        if self.config.weighted_edge { weight } else { 1.0 }
    }

    fn push_arc(&mut self, source: NodeId, target: NodeId, weight: Real) {
        let source_label = self.nodes[source.as_usize()].label;
        let target_label = self.nodes[target.as_usize()].label;
        self.nodes[source.as_usize()].edges.push(Edge {
            source,
            source_label,
            target,
            target_label,
            weight,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted_undirected() -> Graph {
        Graph::new(4, GraphConfig::undirected().with_edge_weights(true))
    }

    #[test]
    fn insert_node_assigns_sequential_ids() {
        let mut g = Graph::new(3, GraphConfig::undirected());
        let a = g.insert_node(10);
        let b = g.insert_node(20);
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.node(b).unwrap().label(), 20);
        assert_eq!(g.node(b).unwrap().weight(), 1.0);
    }

    #[test]
    fn node_weighted_graph_defaults_to_zero_weight() {
        let mut g = Graph::new(1, GraphConfig::undirected().with_node_weights(true));
        let a = g.insert_node(1);
        assert_eq!(g.node(a).unwrap().weight(), 0.0);
        g.set_node_weight(a, 4.5).unwrap();
        assert_eq!(g.node(a).unwrap().weight(), 4.5);
        assert!(g.set_node_weight(NodeId::from_index(9), 1.0).is_err());
    }

    #[test]
    fn undirected_edge_is_stored_both_ways() {
        let mut g = weighted_undirected();
        let (a, b) = g.insert_edge(1, 2, 3.5).unwrap();
        assert_eq!(g.node(a).unwrap().edges().len(), 1);
        assert_eq!(g.node(b).unwrap().edges().len(), 1);
        assert_eq!(g.node(b).unwrap().edges()[0].target(), a);
        assert_eq!(g.node(a).unwrap().in_degree(), 1);
        assert_eq!(g.node(a).unwrap().out_degree(), 1);
        assert_eq!(g.node(b).unwrap().in_degree(), 1);
        assert_eq!(g.node(b).unwrap().out_degree(), 1);
        assert_eq!(g.number_edges(), 1);
        assert_eq!(g.weight_between(a, b), 3.5);
        assert_eq!(g.weight_between(b, a), 3.5);
    }

    #[test]
    fn self_loops_are_rejected() {
        let mut g = weighted_undirected();
        assert!(g.insert_edge(7, 7, 1.0).is_none());
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.number_edges(), 0);
    }

    #[test]
    fn duplicate_is_skipped_but_counted() {
        let mut g = Graph::new(2, GraphConfig::directed());
        g.insert_edge(1, 2, 1.0).unwrap();
        g.insert_edge(1, 2, 1.0).unwrap();
        let a = g.id_by_label(1).unwrap();
        let b = g.id_by_label(2).unwrap();
        assert_eq!(g.node(a).unwrap().edges().len(), 1);
        assert_eq!(g.node(a).unwrap().out_degree(), 2);
        assert_eq!(g.node(b).unwrap().in_degree(), 2);
        assert_eq!(g.number_edges(), 2);
    }

    #[test]
    fn multi_edge_mode_keeps_parallel_arcs() {
        let mut g = Graph::new(2, GraphConfig::directed().with_edge_weights(true));
        g.insert_edge_with(1, 2, 4.0, true).unwrap();
        g.insert_edge_with(1, 2, 2.0, true).unwrap();
        let a = g.id_by_label(1).unwrap();
        let b = g.id_by_label(2).unwrap();
        assert_eq!(g.node(a).unwrap().edges().len(), 2);
        // the lighter parallel arc wins
        assert_eq!(g.weight_between(a, b), 2.0);
    }

    #[test]
    fn node_creation_is_capped_by_order() {
        let mut g = Graph::new(2, GraphConfig::undirected());
        assert!(g.insert_edge(1, 2, 1.0).is_some());
        assert!(g.insert_edge(2, 3, 1.0).is_none());
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.number_edges(), 1);
        // explicit insertion is not capped
        g.insert_node(3);
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    fn unweighted_graph_forces_unit_weights() {
        let mut g = Graph::new(2, GraphConfig::directed());
        let (a, b) = g.insert_edge(1, 2, 9.0).unwrap();
        assert_eq!(g.weight_between(a, b), 1.0);
        assert_eq!(g.weight_between(b, a), INFINITE_COST);
        assert_eq!(g.weight_between(a, a), 0.0);
    }

    #[test]
    fn fix_order_and_placeholders() {
        let mut g = Graph::unbounded(GraphConfig::undirected());
        g.insert_edge(5, 6, 1.0);
        assert_eq!(g.order(), usize::MAX);
        g.fill_placeholders();
        assert_eq!(g.node_count(), 2);
        g.fix_order();
        assert_eq!(g.order(), 2);

        let mut h = Graph::new(4, GraphConfig::undirected());
        h.insert_edge(5, 6, 1.0);
        h.fill_placeholders();
        let labels: Vec<Label> = h.nodes().iter().map(Node::label).collect();
        assert_eq!(labels, vec![5, 6, -1, -2]);
    }

    #[test]
    fn label_lookups() {
        let mut g = Graph::new(3, GraphConfig::undirected());
        g.insert_edge(10, 20, 1.0);
        let id = g.id_by_label(20).unwrap();
        assert_eq!(g.label_by_id(id), 20);
        assert_eq!(g.label_by_id(NodeId::from_index(42)), MISSING_LABEL);
        assert!(g.node_by_label(99).is_none());
        assert!(g.has_edge_between_labels(10, 20));
        assert!(g.has_edge_between_labels(20, 10));
        assert!(!g.has_edge_between_labels(99, 10));
    }

    #[test]
    fn insert_edge_between_existing_nodes() {
        let mut g = Graph::new(2, GraphConfig::directed().with_edge_weights(true));
        let a = g.insert_node(1);
        let b = g.insert_node(2);
        assert!(g.insert_edge_between(a, b, 2.0).unwrap());
        assert!(g.insert_edge_between(a, b, 3.0).unwrap());
        assert!(!g.insert_edge_between(a, a, 3.0).unwrap());
        assert_eq!(g.node(a).unwrap().edges().len(), 2);
        assert_eq!(
            g.insert_edge_between(a, NodeId::from_index(5), 1.0),
            Err(GraphError::NodeNotFound {
                id: NodeId::from_index(5)
            })
        );
    }

    #[test]
    fn remove_node_is_not_implemented() {
        let mut g = Graph::new(1, GraphConfig::undirected());
        let a = g.insert_node(1);
        assert!(matches!(
            g.remove_node(a),
            Err(GraphError::NotImplemented { .. })
        ));
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn total_edge_weight_counts_undirected_once() {
        let mut g = weighted_undirected();
        g.insert_edge(1, 2, 2.0);
        g.insert_edge(2, 3, 3.0);
        assert_eq!(g.total_edge_weight(), 5.0);
    }
}
