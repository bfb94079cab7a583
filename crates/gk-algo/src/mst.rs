//! Minimum spanning trees.
//!
//! Both algorithms return a new undirected graph carrying every node of the
//! input (same ids, labels and weights) and the `n - 1` tree edges.

use gk_core::{NodeId, Real};
use gk_graph::Graph;
use tracing::{debug, trace};

use crate::error::AlgoResult;
use crate::validate;

/// Copy of `graph` with its nodes only, ids preserved.
fn nodes_only(graph: &Graph) -> Graph {
    let mut tree = Graph::new(graph.node_count(), graph.config());
    for node in graph.nodes() {
        tree.insert_weighted_node(node.label(), node.weight());
    }
    tree
}

/// Kruskal's algorithm.
///
/// Arcs are taken lightest first (stable, so equal weights keep storage
/// order). An arc joining two different components is kept and the larger
/// component number is relabelled to the smaller one.
pub fn kruskal(graph: &Graph) -> AlgoResult<Graph> {
    validate::require_undirected_connected(graph, "kruskal")?;

    let n = graph.node_count();
    let mut tree = nodes_only(graph);
    if n < 2 {
        return Ok(tree);
    }

    let mut arcs: Vec<(NodeId, NodeId, Real)> = graph
        .edges()
        .map(|e| (e.source(), e.target(), e.weight()))
        .collect();
    arcs.sort_by(|a, b| a.2.total_cmp(&b.2));

    let mut component: Vec<usize> = (0..n).collect();
    let mut added = 0;
    for (source, target, weight) in arcs {
        let (cs, ct) = (component[source.as_usize()], component[target.as_usize()]);
        if cs == ct {
            continue;
        }
        tree.insert_edge_between(source, target, weight)?;
        trace!(%source, %target, weight, "kruskal edge accepted");

        let (keep, merged) = (cs.min(ct), cs.max(ct));
        for c in component.iter_mut().filter(|c| **c == merged) {
            *c = keep;
        }
        added += 1;
        if added == n - 1 {
            break;
        }
    }

    debug!(nodes = n, edges = added, weight = tree.total_edge_weight(), "kruskal finished");
    Ok(tree)
}

/// Prim's algorithm.
///
/// The tree is seeded with the first globally lightest arc. Every other node
/// tracks its nearest tree node; on each step the closest outside node (lowest
/// id on ties) joins the tree through that neighbour.
pub fn prim(graph: &Graph) -> AlgoResult<Graph> {
    validate::require_undirected_connected(graph, "prim")?;

    let n = graph.node_count();
    let mut tree = nodes_only(graph);
    if n < 2 {
        return Ok(tree);
    }

    let mut seed: Option<(NodeId, NodeId, Real)> = None;
    for edge in graph.edges() {
        if seed.is_none_or(|(_, _, w)| edge.weight() < w) {
            seed = Some((edge.source(), edge.target(), edge.weight()));
        }
    }
    // A connected graph with two or more nodes always has an arc.
    let Some((source, target, weight)) = seed else {
        return Ok(tree);
    };
    tree.insert_edge_between(source, target, weight)?;

    let mut in_tree = vec![false; n];
    in_tree[source.as_usize()] = true;
    in_tree[target.as_usize()] = true;

    let mut nearest = vec![target; n];
    let mut dist = vec![0.0; n];
    for node in graph.nodes() {
        let idx = node.id().as_usize();
        if in_tree[idx] {
            continue;
        }
        let to_source = node.distance_to(source);
        let to_target = node.distance_to(target);
        if to_source < to_target {
            nearest[idx] = source;
            dist[idx] = to_source;
        } else {
            nearest[idx] = target;
            dist[idx] = to_target;
        }
    }

    for _ in 0..n - 2 {
        let mut next: Option<usize> = None;
        for idx in (0..n).filter(|&i| !in_tree[i]) {
            if next.is_none_or(|best| dist[idx] < dist[best]) {
                next = Some(idx);
            }
        }
        let Some(v) = next else { break };

        let joined = NodeId::from_usize(v);
        tree.insert_edge_between(joined, nearest[v], dist[v])?;
        trace!(node = %joined, via = %nearest[v], weight = dist[v], "prim edge accepted");
        in_tree[v] = true;

        for m in (0..n).filter(|&i| !in_tree[i]) {
            let d = graph.nodes()[m].distance_to(joined);
            if dist[m] > d {
                dist[m] = d;
                nearest[m] = joined;
            }
        }
    }

    debug!(nodes = n, weight = tree.total_edge_weight(), "prim finished");
    Ok(tree)
}
