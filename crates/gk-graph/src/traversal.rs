//! Reachability and connectivity.
//!
//! Both walks use an explicit stack so deep instances cannot overflow the
//! call stack. Arcs are followed in storage order.

use gk_core::NodeId;

use crate::graph::Graph;

impl Graph {
    /// True if `target` is reachable from `source` along outgoing arcs.
    ///
    /// A node always reaches itself; unknown ids reach nothing.
    pub fn depth_first_search(&self, source: NodeId, target: NodeId) -> bool {
        if !self.search_node(source) {
            return false;
        }
        if source == target {
            return true;
        }

        let mut visited = vec![false; self.node_count()];
        let mut stack = vec![source];
        while let Some(current) = stack.pop() {
            if current == target {
                return true;
            }
            let idx = current.as_usize();
            if visited[idx] {
                continue;
            }
            visited[idx] = true;

            // Reverse push keeps the first arc on top, so arcs are explored
            // in insertion order.
            for edge in self.nodes()[idx].edges().iter().rev() {
                if !visited[edge.target().as_usize()] {
                    stack.push(edge.target());
                }
            }
        }
        false
    }

    /// Component number (starting at 1) for every node, by id.
    ///
    /// Each unmarked node, in id order, seeds a flood fill over outgoing arcs.
    pub fn components(&self) -> Vec<usize> {
        let mut marks = vec![0usize; self.node_count()];
        let mut component = 0;
        for idx in 0..marks.len() {
            if marks[idx] == 0 {
                component += 1;
                self.mark_component(idx, component, &mut marks);
            }
        }
        marks
    }

    /// Number of components found by [`Graph::components`].
    pub fn component_count(&self) -> usize {
        self.components().into_iter().max().unwrap_or(0)
    }

    /// True if a single flood fill reaches every node.
    ///
    /// Stops as soon as a second component would have to start. An empty
    /// graph counts as connected.
    pub fn is_connected(&self) -> bool {
        let mut marks = vec![0usize; self.node_count()];
        let mut component = 0;
        for idx in 0..marks.len() {
            if marks[idx] == 0 {
                component += 1;
                if component != 1 {
                    return false;
                }
                self.mark_component(idx, component, &mut marks);
            }
        }
        true
    }

    fn mark_component(&self, seed: usize, component: usize, marks: &mut [usize]) {
        marks[seed] = component;
        let mut stack = vec![seed];
        while let Some(idx) = stack.pop() {
            for edge in self.nodes()[idx].edges() {
                let next = edge.target().as_usize();
                if marks[next] == 0 {
                    marks[next] = component;
                    stack.push(next);
                }
            }
        }
    }
}
