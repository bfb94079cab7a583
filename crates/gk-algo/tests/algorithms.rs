//! End-to-end scenarios across the algorithm suite.

use gk_algo::{
    AlgoError, RandomizedConfig, ReactiveConfig, critical_path, dijkstra,
    dominating_set_randomized, dominating_set_reactive, dominating_set_weighted, floyd_warshall,
    kruskal, prim,
};
use gk_core::{NodeId, Real, is_infinite_cost, saturating_cost_add};
use gk_graph::{Graph, GraphBuilder};
use proptest::prelude::*;

fn square() -> Graph {
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

/// Path `1..=n` plus extra arcs, so the graph is always connected.
fn connected(n: i32, extra: &[(i32, i32, u8)], path_weight: u8) -> Graph {
    let mut builder = GraphBuilder::new().weighted_edges(true);
    for label in 1..n {
        builder = builder.edge(label, label + 1, Real::from(path_weight));
    }
    for &(s, t, w) in extra {
        builder = builder.edge(s, t, Real::from(w));
    }
    builder.build().unwrap()
}

#[test]
fn square_spanning_trees_weigh_three() {
    let g = square();
    assert_eq!(kruskal(&g).unwrap().total_edge_weight(), 3.0);
    assert_eq!(prim(&g).unwrap().total_edge_weight(), 3.0);
}

#[test]
fn square_distances() {
    let g = square();
    let all = floyd_warshall(&g);
    let from_first = dijkstra(&g, NodeId::from_index(0)).unwrap();
    assert_eq!(all.row(0), from_first.as_slice());
    assert_eq!(all.get(0, 2), 2.0);
}

#[test]
fn connectivity_queries() {
    let split = GraphBuilder::new()
        .edge(1, 2, 1.0)
        .edge(3, 4, 1.0)
        .build()
        .unwrap();
    assert!(!split.is_connected());
    assert_eq!(split.component_count(), 2);
    assert!(matches!(kruskal(&split), Err(AlgoError::Disconnected { .. })));
    assert!(square().is_connected());
}

/// The square with the 1-3 diagonal, keeping only `edges` out of it.
fn square_subset(edges: &[(i32, i32, Real)]) -> Graph {
    edges
        .iter()
        .fold(
            GraphBuilder::new()
                .weighted_edges(true)
                .node(1)
                .node(2)
                .node(3)
                .node(4),
            |b, &(s, t, w)| b.edge(s, t, w),
        )
        .build()
        .unwrap()
}

#[test]
fn square_stays_connected_through_the_diagonal() {
    let without_12 = square_subset(&[(2, 3, 1.0), (3, 4, 1.0), (4, 1, 1.0), (1, 3, 5.0)]);
    assert!(without_12.is_connected());

    let without_12_14 = square_subset(&[(2, 3, 1.0), (3, 4, 1.0), (1, 3, 5.0)]);
    assert!(without_12_14.is_connected());
    assert_eq!(kruskal(&without_12_14).unwrap().total_edge_weight(), 7.0);

    let isolated_1 = square_subset(&[(2, 3, 1.0), (3, 4, 1.0)]);
    assert!(!isolated_1.is_connected());
    assert_eq!(isolated_1.component_count(), 2);
    assert!(matches!(prim(&isolated_1), Err(AlgoError::Disconnected { .. })));
}

#[test]
fn pert_chain() {
    let g = GraphBuilder::new()
        .directed(true)
        .weighted_edges(true)
        .edge(1, 2, 3.0)
        .edge(2, 3, 4.0)
        .build()
        .unwrap();
    let path = critical_path(&g).unwrap();
    assert_eq!(path.earliest, vec![0.0, 3.0, 7.0]);
    assert_eq!(path.latest, vec![0.0, 3.0, 7.0]);
    assert_eq!(path.duration, 7.0);
}

#[test]
fn randomized_with_tiny_alfa_is_greedy() {
    let g = connected(10, &[(1, 5, 1), (2, 9, 1), (3, 7, 1)], 1);
    let greedy = dominating_set_weighted(&g);
    let randomized = dominating_set_randomized(
        &g,
        &RandomizedConfig {
            seed: 1,
            iterations: 10,
            alfa: 1e-9,
        },
    )
    .unwrap();
    assert_eq!(randomized, greedy);
}

#[test]
fn reactive_with_one_alfa_is_randomized() {
    let g = connected(15, &[(1, 8, 1), (4, 12, 1), (6, 15, 1)], 1);
    let reactive = dominating_set_reactive(
        &g,
        &ReactiveConfig {
            seed: 5,
            iterations: 40,
            alfas: vec![0.3],
            block: 10,
        },
    )
    .unwrap();
    let randomized = dominating_set_randomized(
        &g,
        &RandomizedConfig {
            seed: 5,
            iterations: 40,
            alfa: 0.3,
        },
    )
    .unwrap();
    assert_eq!(reactive.solution, randomized);
    assert_eq!(reactive.best_alfa, 0.3);
}

fn extra_arcs(n: i32) -> impl Strategy<Value = Vec<(i32, i32, u8)>> {
    prop::collection::vec((1..=n, 1..=n, 1u8..20), 0..30)
}

proptest! {
    #[test]
    fn kruskal_and_prim_agree(n in 2i32..12, extra in extra_arcs(12), path_weight in 1u8..20) {
        let extra: Vec<_> = extra.into_iter().filter(|&(s, t, _)| s <= n && t <= n).collect();
        let g = connected(n, &extra, path_weight);
        let k = kruskal(&g).unwrap();
        let p = prim(&g).unwrap();
        prop_assert_eq!(k.total_edge_weight(), p.total_edge_weight());
        prop_assert_eq!(k.edges().count(), 2 * (g.node_count() - 1));
        prop_assert!(k.is_connected());
        prop_assert!(p.is_connected());
    }

    #[test]
    fn floyd_is_symmetric_and_satisfies_triangle_inequality(
        n in 1i32..10,
        extra in extra_arcs(10),
    ) {
        let extra: Vec<_> = extra.into_iter().filter(|&(s, t, _)| s <= n && t <= n).collect();
        let g = connected(n, &extra, 3);
        let d = floyd_warshall(&g);
        let size = d.order();
        for i in 0..size {
            prop_assert_eq!(d.get(i, i), 0.0);
            for j in 0..size {
                prop_assert_eq!(d.get(i, j), d.get(j, i));
                for k in 0..size {
                    prop_assert!(d.get(i, j) <= saturating_cost_add(d.get(i, k), d.get(k, j)));
                }
            }
        }
    }

    #[test]
    fn dijkstra_matches_floyd_rows(
        arcs in prop::collection::vec((1i32..9, 1i32..9, 0u8..15), 1..30),
        start in 0usize..8,
    ) {
        let g = arcs
            .iter()
            .fold(
                GraphBuilder::new().directed(true).weighted_edges(true),
                |b, &(s, t, w)| b.edge(s, t, Real::from(w)),
            )
            .build()
            .unwrap();
        prop_assume!(start < g.node_count());
        let all = floyd_warshall(&g);
        let single = dijkstra(&g, NodeId::from_usize(start)).unwrap();
        for (j, &distance) in single.iter().enumerate() {
            let expected = all.get(start, j);
            if is_infinite_cost(expected) {
                prop_assert!(is_infinite_cost(distance));
            } else {
                prop_assert_eq!(distance, expected);
            }
        }
    }

    #[test]
    fn constructions_always_dominate(
        weights in prop::collection::vec(0.5f64..10.0, 1..12),
        arcs in prop::collection::vec((0usize..12, 0usize..12), 0..30),
        seed in any::<u64>(),
    ) {
        let n = weights.len();
        let mut builder = GraphBuilder::new().weighted_nodes(true);
        for (i, &w) in weights.iter().enumerate() {
            builder = builder.weighted_node(i as i32 + 1, w);
        }
        for &(s, t) in arcs.iter().filter(|&&(s, t)| s < n && t < n) {
            builder = builder.edge(s as i32 + 1, t as i32 + 1, 1.0);
        }
        let g = builder.build().unwrap();

        let greedy = dominating_set_weighted(&g);
        prop_assert!(greedy.is_dominating(&g));

        let randomized = dominating_set_randomized(
            &g,
            &RandomizedConfig { seed, iterations: 5, alfa: 0.5 },
        )
        .unwrap();
        prop_assert!(randomized.is_dominating(&g));
        let sum: Real = randomized.nodes.iter().map(|n| n.weight).sum();
        prop_assert!((sum - randomized.total_cost).abs() < 1e-9);

        let reactive = dominating_set_reactive(
            &g,
            &ReactiveConfig { seed, iterations: 12, alfas: vec![0.2, 0.6, 1.0], block: 4 },
        )
        .unwrap();
        prop_assert!(reactive.solution.is_dominating(&g));
    }
}
