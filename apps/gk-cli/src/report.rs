//! Fixed-width text reports.

use std::fmt::Write;

use gk_algo::{CriticalPath, DistanceMatrix, DominatingSet};
use gk_core::{Label, MISSING_LABEL, Real, is_infinite_cost};
use gk_graph::Graph;

/// Placeholder for the infinite-cost and missing-label sentinels.
pub const SENTINEL: &str = "&";

/// `value` with `precision` decimals, right-aligned to `width`.
pub fn format_real(value: Real, precision: usize, width: usize) -> String {
    if is_infinite_cost(value) {
        format!("{SENTINEL:>width$}")
    } else {
        format!("{value:>width$.precision$}")
    }
}

pub fn format_label(label: Label, width: usize) -> String {
    if label == MISSING_LABEL {
        format!("{SENTINEL:>width$}")
    } else {
        format!("{label:>width$}")
    }
}

fn push_elapsed(out: &mut String, elapsed: Option<f64>) {
    if let Some(seconds) = elapsed {
        let _ = writeln!(out, "Time: {seconds:.6}");
    }
}

/// Extra lines printed by the randomized variants.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunInfo {
    pub seed: Option<u64>,
    pub best_alfa: Option<Real>,
}

pub fn dominating_report(set: &DominatingSet, elapsed: Option<f64>, info: RunInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Cost: {:.6}", set.total_cost);
    let _ = writeln!(out, "Vertices: {}", set.len());
    push_elapsed(&mut out, elapsed);
    if let Some(seed) = info.seed {
        let _ = writeln!(out, "Seed: {seed}");
    }
    if let Some(alfa) = info.best_alfa {
        let _ = writeln!(out, "Best alfa: {alfa:.6}");
    }
    out.push_str("Label\t|\tCost\n");
    for node in &set.nodes {
        let _ = writeln!(
            out,
            "{}\t|\t{}",
            format_label(node.label, 4),
            format_real(node.weight, 3, 6)
        );
    }
    out
}

pub fn critical_path_report(path: &CriticalPath, elapsed: Option<f64>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Duration: {:.6}", path.duration);
    push_elapsed(&mut out, elapsed);
    for task in &path.tasks {
        let _ = writeln!(
            out,
            "({},{})\t|\t{}",
            format_label(task.source_label, 4),
            format_label(task.target_label, 4),
            format_real(task.duration, 3, 6)
        );
    }
    out
}

/// Distance matrix with node labels as row and column headers.
pub fn distance_matrix_report(graph: &Graph, matrix: &DistanceMatrix, elapsed: Option<f64>) -> String {
    let mut out = String::new();
    push_elapsed(&mut out, elapsed);
    out.push_str("    ");
    for node in graph.nodes() {
        let _ = write!(out, " {}", format_label(node.label(), 8));
    }
    out.push('\n');
    for (node, row) in graph.nodes().iter().zip(matrix.rows()) {
        out.push_str(&format_label(node.label(), 4));
        for &distance in row {
            let _ = write!(out, " {}", format_real(distance, 2, 8));
        }
        out.push('\n');
    }
    out
}

/// Single-source distances, one `label | distance` line per node.
pub fn distances_report(graph: &Graph, start: Label, distances: &[Real], elapsed: Option<f64>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Source: {start}");
    push_elapsed(&mut out, elapsed);
    out.push_str("Label\t|\tDistance\n");
    for (node, &distance) in graph.nodes().iter().zip(distances) {
        let _ = writeln!(
            out,
            "{}\t|\t{}",
            format_label(node.label(), 4),
            format_real(distance, 3, 10)
        );
    }
    out
}

pub fn connectivity_report(graph: &Graph) -> String {
    let components = graph.components();
    let count = components.iter().copied().max().unwrap_or(0);
    let mut out = String::new();
    let _ = writeln!(out, "Connected: {}", if count <= 1 { "yes" } else { "no" });
    let _ = writeln!(out, "Components: {count}");
    out.push_str("Label\t|\tComponent\n");
    for (node, component) in graph.nodes().iter().zip(&components) {
        let _ = writeln!(out, "{}\t|\t{component:>4}", format_label(node.label(), 4));
    }
    out
}
