//! Shortest-path algorithms.
//!
//! Unreachable pairs carry [`gk_core::INFINITE_COST`]; all additions go through
//! [`saturating_cost_add`] so the sentinel never wraps into a finite value.

use gk_core::{NodeId, Real, is_infinite_cost, saturating_cost_add};
use gk_graph::Graph;
use tracing::{debug, trace};

use crate::error::AlgoResult;
use crate::validate;

/// All-pairs distance matrix, indexed by node id.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DistanceMatrix {
    order: usize,
    /// Row-major `order * order` distances.
    data: Vec<Real>,
}

impl DistanceMatrix {
    fn from_graph(graph: &Graph) -> Self {
        let order = graph.node_count();
        let mut data = Vec::with_capacity(order * order);
        for source in graph.nodes() {
            for j in 0..order {
                data.push(source.distance_to(NodeId::from_usize(j)));
            }
        }
        Self { order, data }
    }

    /// Number of rows (and columns).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Distance from node index `i` to node index `j`.
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Real {
        self.data[i * self.order + j]
    }

    /// Distance between two node ids, `None` if either is out of range.
    pub fn distance(&self, source: NodeId, target: NodeId) -> Option<Real> {
        let (i, j) = (source.as_usize(), target.as_usize());
        (i < self.order && j < self.order).then(|| self.get(i, j))
    }

    /// One row of the matrix.
    pub fn row(&self, i: usize) -> &[Real] {
        &self.data[i * self.order..(i + 1) * self.order]
    }

    /// Iterate over rows in id order.
    pub fn rows(&self) -> impl Iterator<Item = &[Real]> + '_ {
        self.data.chunks(self.order.max(1)).take(self.order)
    }

    fn set(&mut self, i: usize, j: usize, value: Real) {
        self.data[i * self.order + j] = value;
    }
}

/// All-pairs shortest distances (Floyd–Warshall).
///
/// Starts from the direct distances (0 on the diagonal, sentinel where no arc
/// exists) and, for every intermediary `k` in id order, relaxes each pair in
/// place.
pub fn floyd_warshall(graph: &Graph) -> DistanceMatrix {
    let mut dist = DistanceMatrix::from_graph(graph);
    let n = dist.order();

    for k in 0..n {
        for i in 0..n {
            let via_k = dist.get(i, k);
            if is_infinite_cost(via_k) {
                continue;
            }
            for j in 0..n {
                let candidate = saturating_cost_add(via_k, dist.get(k, j));
                if candidate < dist.get(i, j) {
                    dist.set(i, j, candidate);
                }
            }
        }
        trace!(k, "floyd-warshall intermediary done");
    }

    debug!(order = n, "floyd-warshall finished");
    dist
}

/// Single-source shortest distances (Dijkstra), indexed by node id.
///
/// Tentative distances start from the start node's direct arcs. The unsettled
/// node with the smallest tentative distance is settled next, ties going to
/// the lowest id; the search ends once the nearest unsettled node is
/// unreachable. Arc weights are expected to be non-negative.
pub fn dijkstra(graph: &Graph, start: NodeId) -> AlgoResult<Vec<Real>> {
    validate::require_node(graph, start)?;

    let n = graph.node_count();
    let start_node = &graph.nodes()[start.as_usize()];
    let mut settled = vec![false; n];
    let mut min_path: Vec<Real> = (0..n)
        .map(|j| start_node.distance_to(NodeId::from_usize(j)))
        .collect();
    settled[start.as_usize()] = true;
    min_path[start.as_usize()] = 0.0;

    let mut settled_count = 1;
    while settled_count < n {
        // Linear scan; strict `<` keeps the lowest id on ties.
        let mut nearest: Option<usize> = None;
        for idx in 0..n {
            if settled[idx] {
                continue;
            }
            match nearest {
                Some(best) if min_path[idx] >= min_path[best] => {}
                _ => nearest = Some(idx),
            }
        }
        let Some(current) = nearest else { break };
        if is_infinite_cost(min_path[current]) {
            break;
        }

        settled[current] = true;
        settled_count += 1;

        for (target, weight) in graph.nodes()[current].distances_to_adjacent() {
            let t = target.as_usize();
            let candidate = saturating_cost_add(min_path[current], weight);
            if !settled[t] && candidate < min_path[t] {
                min_path[t] = candidate;
            }
        }
    }

    debug!(
        start = %start,
        reached = min_path.iter().filter(|d| !is_infinite_cost(**d)).count(),
        "dijkstra finished"
    );
    Ok(min_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlgoError;
    use gk_core::INFINITE_COST;
    use gk_graph::GraphBuilder;

    fn weighted_square() -> Graph {
        // 1 -- 2 -- 3 -- 4 -- 1 with a heavy 1--3 diagonal
        GraphBuilder::new()
            .weighted_edges(true)
            .edge(1, 2, 1.0)
            .edge(2, 3, 1.0)
            .edge(3, 4, 1.0)
            .edge(4, 1, 1.0)
            .edge(1, 3, 5.0)
            .build()
            .unwrap()
    }

    #[test]
    fn floyd_on_square() {
        let d = floyd_warshall(&weighted_square());
        assert_eq!(d.order(), 4);
        assert_eq!(d.get(0, 0), 0.0);
        assert_eq!(d.get(0, 2), 2.0);
        assert_eq!(d.get(1, 3), 2.0);
        assert_eq!(d.get(3, 1), 2.0);
        assert_eq!(
            d.distance(NodeId::from_index(0), NodeId::from_index(1)),
            Some(1.0)
        );
        assert_eq!(d.distance(NodeId::from_index(0), NodeId::from_index(9)), None);
        assert_eq!(d.rows().count(), 4);
    }

    #[test]
    fn floyd_keeps_sentinel_for_unreachable() {
        let g = GraphBuilder::new()
            .directed(true)
            .edge(1, 2, 1.0)
            .node(3)
            .build()
            .unwrap();
        let d = floyd_warshall(&g);
        // label 3 is id 0 (explicit nodes first)
        assert!(is_infinite_cost(d.get(1, 0)));
        assert!(is_infinite_cost(d.get(2, 1)));
        assert_eq!(d.get(1, 2), 1.0);
        assert_eq!(d.row(1), &[INFINITE_COST, 0.0, 1.0]);
    }

    #[test]
    fn dijkstra_on_square() {
        let g = weighted_square();
        let d = dijkstra(&g, NodeId::from_index(0)).unwrap();
        assert_eq!(d, vec![0.0, 1.0, 2.0, 1.0]);
        let d = dijkstra(&g, NodeId::from_index(2)).unwrap();
        assert_eq!(d, vec![2.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn dijkstra_prefers_longer_cheaper_route() {
        let g = GraphBuilder::new()
            .directed(true)
            .weighted_edges(true)
            .edge(1, 2, 10.0)
            .edge(1, 3, 1.0)
            .edge(3, 2, 2.0)
            .build()
            .unwrap();
        let d = dijkstra(&g, NodeId::from_index(0)).unwrap();
        assert_eq!(d, vec![0.0, 3.0, 1.0]);
    }

    #[test]
    fn dijkstra_reports_unreachable_nodes() {
        let g = GraphBuilder::new()
            .directed(true)
            .edge(1, 2, 1.0)
            .edge(3, 1, 1.0)
            .build()
            .unwrap();
        let d = dijkstra(&g, NodeId::from_index(0)).unwrap();
        assert_eq!(d[0], 0.0);
        assert_eq!(d[1], 1.0);
        assert!(is_infinite_cost(d[2]));
    }

    #[test]
    fn dijkstra_rejects_unknown_start() {
        let g = weighted_square();
        assert!(matches!(
            dijkstra(&g, NodeId::from_index(10)),
            Err(AlgoError::NodeOutOfRange { len: 4, .. })
        ));
    }
}
