//! Reactive randomized dominating set.
//!
//! Instead of one fixed `alfa`, the search keeps a set of candidates and
//! learns which of them produce cheap solutions. Every `block` iterations the
//! selection probabilities are recomputed from the running average cost of
//! each `alfa`, and the next block is split among the candidates in
//! proportion to those probabilities.

use gk_core::{INFINITE_COST, Real, is_infinite_cost};
use gk_graph::Graph;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::dominating::{DominatingSet, construct_randomized, invalid, validate_alfa};
use crate::error::AlgoResult;

/// Reactive search parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReactiveConfig {
    pub seed: u64,
    pub iterations: usize,
    /// Candidate `alfa` values, each in `(0, 1]`.
    pub alfas: Vec<Real>,
    /// Iterations between probability updates.
    pub block: usize,
}

impl Default for ReactiveConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            iterations: 100,
            alfas: vec![0.05, 0.10, 0.15, 0.30, 0.50],
            block: 10,
        }
    }
}

impl ReactiveConfig {
    fn validate(&self) -> AlgoResult<()> {
        if self.iterations == 0 {
            return Err(invalid("iterations must be at least 1".to_string()));
        }
        if self.block == 0 {
            return Err(invalid("block must be at least 1".to_string()));
        }
        if self.alfas.is_empty() {
            return Err(invalid("at least one alfa is required".to_string()));
        }
        self.alfas.iter().try_for_each(|&alfa| validate_alfa(alfa))
    }
}

/// Best solution of a reactive search and what it learned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReactiveSolution {
    pub solution: DominatingSet,
    /// The `alfa` with the highest final probability.
    pub best_alfa: Real,
    /// Final selection probability of each `alfa`, in input order.
    pub probabilities: Vec<Real>,
}

/// Per-`alfa` statistics and the allocation of the current block.
#[derive(Debug, Clone)]
pub struct AlfaSchedule {
    alfas: Vec<Real>,
    probabilities: Vec<Real>,
    /// Running average cost; [`INFINITE_COST`] until first used.
    averages: Vec<Real>,
    counts: Vec<usize>,
    /// Cumulative iteration thresholds for the current block.
    thresholds: Vec<usize>,
    active: usize,
    used: usize,
}

impl AlfaSchedule {
    /// Uniform probabilities, no history.
    pub fn new(alfas: Vec<Real>) -> Self {
        let m = alfas.len();
        let uniform = 1.0 / m.max(1) as Real;
        Self {
            probabilities: vec![uniform; m],
            averages: vec![INFINITE_COST; m],
            counts: vec![0; m],
            thresholds: vec![0; m],
            alfas,
            active: 0,
            used: 0,
        }
    }

    pub fn alfas(&self) -> &[Real] {
        &self.alfas
    }

    pub fn probabilities(&self) -> &[Real] {
        &self.probabilities
    }

    pub fn averages(&self) -> &[Real] {
        &self.averages
    }

    /// How many constructions each `alfa` has run.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Recompute probabilities from `best_cost` and split the next `block`
    /// iterations among the candidates.
    ///
    /// `q_i = best_cost / average_i`, normalised. An average that is not
    /// positive counts as `q_i = 1`; if every `q_i` vanishes the
    /// probabilities fall back to uniform.
    pub fn rebalance(&mut self, best_cost: Real, block: usize) {
        let m = self.alfas.len();
        if m == 0 {
            return;
        }

        let q: Vec<Real> = self
            .averages
            .iter()
            .map(|&avg| if avg > 0.0 { best_cost / avg } else { 1.0 })
            .collect();
        let sum: Real = q.iter().sum();
        if sum > 0.0 && sum.is_finite() {
            for (p, qi) in self.probabilities.iter_mut().zip(&q) {
                *p = qi / sum;
            }
        } else {
            self.probabilities.fill(1.0 / m as Real);
        }

        let mut previous = 0;
        for y in 0..m - 1 {
            let share = (self.probabilities[y] * block as Real).round() as usize;
            self.thresholds[y] = (previous + share).min(block);
            previous = self.thresholds[y];
        }
        self.thresholds[m - 1] = block;
        self.active = 0;
        self.used = 0;
        trace!(probabilities = ?self.probabilities, thresholds = ?self.thresholds, "alfa schedule rebalanced");
    }

    /// Index of the `alfa` to use for the next construction.
    ///
    /// Moves past every candidate whose share of the block is used up.
    pub fn begin_iteration(&mut self) -> usize {
        let last = self.alfas.len().saturating_sub(1);
        while self.active < last && self.used >= self.thresholds[self.active] {
            self.active += 1;
        }
        self.counts[self.active] += 1;
        self.active
    }

    /// Fold the cost of the construction started by the last
    /// [`AlfaSchedule::begin_iteration`] into the active average.
    pub fn record(&mut self, cost: Real) {
        let i = self.active;
        let n = self.counts[i] as Real;
        let previous = if self.counts[i] > 1 {
            self.averages[i] * (n - 1.0)
        } else {
            0.0
        };
        self.averages[i] = (previous + cost) / n;
        self.used += 1;
    }

    /// Index of the highest probability, the first one on ties.
    pub fn best_index(&self) -> usize {
        let mut best = 0;
        for (i, p) in self.probabilities.iter().enumerate().skip(1) {
            if *p > self.probabilities[best] {
                best = i;
            }
        }
        best
    }
}

/// Reactive randomized greedy heuristic.
///
/// Every construction draws its `alfa` from the [`AlfaSchedule`]; the
/// cheapest solution found overall is kept (the first one on ties).
pub fn dominating_set_reactive(
    graph: &Graph,
    config: &ReactiveConfig,
) -> AlgoResult<ReactiveSolution> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut schedule = AlfaSchedule::new(config.alfas.clone());
    let mut best: Option<DominatingSet> = None;

    for iteration in 0..config.iterations {
        if iteration % config.block == 0 {
            let best_cost = best.as_ref().map_or(INFINITE_COST, |b| b.total_cost);
            schedule.rebalance(best_cost, config.block);
        }

        let index = schedule.begin_iteration();
        let alfa = schedule.alfas()[index];
        let solution = construct_randomized(graph, &mut rng, alfa);
        schedule.record(solution.total_cost);
        trace!(iteration, alfa, cost = solution.total_cost, "reactive construction");

        if best.as_ref().is_none_or(|b| solution.total_cost < b.total_cost) {
            best = Some(solution);
        }
    }

    let solution = best.unwrap_or_default();
    let best_alfa = schedule.alfas()[schedule.best_index()];
    debug!(
        size = solution.len(),
        cost = solution.total_cost,
        best_alfa,
        unused = schedule.averages().iter().filter(|a| is_infinite_cost(**a)).count(),
        "reactive dominating set"
    );

    Ok(ReactiveSolution {
        solution,
        best_alfa,
        probabilities: schedule.probabilities().to_vec(),
    })
}
