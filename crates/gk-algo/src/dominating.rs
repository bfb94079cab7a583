//! Weighted minimum dominating set heuristics.
//!
//! A construction repeatedly picks a candidate from a list ordered by
//! `in_degree / weight`, adds it to the solution and covers it together with
//! its out-neighbours. Covered nodes leave the candidate list.

use gk_core::{Label, NodeId, Real};
use gk_graph::{Graph, Node};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::error::{AlgoError, AlgoResult};

/// A node chosen by a construction, captured at selection time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectedNode {
    pub id: NodeId,
    pub label: Label,
    /// In-degree of the node when it was chosen.
    pub degree: usize,
    pub weight: Real,
}

impl SelectedNode {
    fn capture(node: &Node) -> Self {
        Self {
            id: node.id(),
            label: node.label(),
            degree: node.in_degree(),
            weight: node.weight(),
        }
    }
}

/// Nodes of a dominating set in selection order and their summed weight.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DominatingSet {
    pub nodes: Vec<SelectedNode>,
    pub total_cost: Real,
}

impl DominatingSet {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Labels in selection order.
    pub fn labels(&self) -> Vec<Label> {
        self.nodes.iter().map(|n| n.label).collect()
    }

    /// True if every node of `graph` is selected or is the target of an arc
    /// leaving a selected node.
    pub fn is_dominating(&self, graph: &Graph) -> bool {
        let mut covered = vec![false; graph.node_count()];
        for selected in &self.nodes {
            let Some(node) = graph.node(selected.id) else {
                return false;
            };
            covered[node.id().as_usize()] = true;
            for edge in node.edges() {
                covered[edge.target().as_usize()] = true;
            }
        }
        covered.into_iter().all(|c| c)
    }
}

/// Randomized construction parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RandomizedConfig {
    /// Seed for the pseudo-random generator.
    pub seed: u64,
    /// Number of independent constructions.
    pub iterations: usize,
    /// Fraction of the candidate list the pick is drawn from, in `(0, 1]`.
    pub alfa: Real,
}

impl Default for RandomizedConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            iterations: 100,
            alfa: 0.3,
        }
    }
}

impl RandomizedConfig {
    pub(crate) fn validate(&self) -> AlgoResult<()> {
        if self.iterations == 0 {
            return Err(invalid("iterations must be at least 1".to_string()));
        }
        validate_alfa(self.alfa)
    }
}

pub(crate) fn validate_alfa(alfa: Real) -> AlgoResult<()> {
    if alfa.is_finite() && alfa > 0.0 && alfa <= 1.0 {
        Ok(())
    } else {
        Err(invalid(format!("alfa must lie in (0, 1], got {alfa}")))
    }
}

pub(crate) fn invalid(what: String) -> AlgoError {
    tracing::error!(%what, "invalid algorithm configuration");
    AlgoError::InvalidConfig { what }
}

/// Greedy preference of a node. Non-positive weights are treated as free and
/// always preferred.
fn score(node: &Node) -> Real {
    if node.weight() > 0.0 {
        node.in_degree() as Real / node.weight()
    } else {
        Real::INFINITY
    }
}

/// One construction.
///
/// `pick(candidates)` returns an offset from the best end of the list, in
/// `0..candidates`. Scores never change during a construction, so the list
/// is sorted once and compaction keeps it sorted.
pub(crate) fn construct(graph: &Graph, mut pick: impl FnMut(usize) -> usize) -> DominatingSet {
    let mut candidates: Vec<&Node> = graph.nodes().iter().collect();
    candidates.sort_by(|a, b| score(a).total_cmp(&score(b)));
    let mut covered = vec![false; graph.node_count()];
    let mut solution = DominatingSet::default();

    while !candidates.is_empty() {
        let offset = pick(candidates.len()).min(candidates.len() - 1);
        let chosen = candidates[candidates.len() - 1 - offset];

        solution.nodes.push(SelectedNode::capture(chosen));
        solution.total_cost += chosen.weight();
        covered[chosen.id().as_usize()] = true;
        for edge in chosen.edges() {
            covered[edge.target().as_usize()] = true;
        }
        trace!(label = chosen.label(), offset, "dominating node chosen");

        candidates.retain(|n| !covered[n.id().as_usize()]);
    }
    solution
}

/// Number of top candidates a randomized pick draws from.
pub(crate) fn restricted_size(candidates: usize, alfa: Real) -> usize {
    ((candidates as Real * alfa).ceil() as usize).clamp(1, candidates.max(1))
}

/// Randomized construction drawing from the top `ceil(candidates * alfa)`.
pub(crate) fn construct_randomized(graph: &Graph, rng: &mut StdRng, alfa: Real) -> DominatingSet {
    construct(graph, |candidates| {
        rng.gen_range(0..restricted_size(candidates, alfa))
    })
}

/// Greedy heuristic: always take the best-scored candidate.
pub fn dominating_set_weighted(graph: &Graph) -> DominatingSet {
    let solution = construct(graph, |_| 0);
    debug!(size = solution.len(), cost = solution.total_cost, "greedy dominating set");
    solution
}

/// Randomized greedy heuristic.
///
/// Runs `iterations` independent constructions from one seeded generator and
/// keeps the cheapest (the first one found on ties).
pub fn dominating_set_randomized(
    graph: &Graph,
    config: &RandomizedConfig,
) -> AlgoResult<DominatingSet> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut best: Option<DominatingSet> = None;
    for iteration in 0..config.iterations {
        let solution = construct_randomized(graph, &mut rng, config.alfa);
        trace!(iteration, cost = solution.total_cost, "randomized construction");
        if best.as_ref().is_none_or(|b| solution.total_cost < b.total_cost) {
            best = Some(solution);
        }
    }

    let best = best.unwrap_or_default();
    debug!(
        size = best.len(),
        cost = best.total_cost,
        alfa = config.alfa,
        "randomized dominating set"
    );
    Ok(best)
}
