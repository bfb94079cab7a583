//! Plain-text graph instance readers.
//!
//! Two layouts are understood. The edge list starts with the declared order
//! followed by one record per edge; each record carries node weights and an
//! edge weight when the graph is configured for them:
//!
//! ```text
//! a b            unweighted
//! a b w          weighted edges
//! a wa b wb      weighted nodes
//! a wa b wb w    both
//! ```
//!
//! The dominating-set layout is a header line ending in the order `n`, `n + 2`
//! preamble lines, `n` node weights, a separator token and the upper rows of
//! an adjacency matrix.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use gk_core::{Label, Real, ensure_finite};
use gk_graph::{Graph, GraphConfig};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    /// Order line followed by edge records.
    #[default]
    Edges,
    /// Weighted dominating-set instance with an adjacency matrix.
    Dominating,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub config: GraphConfig,
    /// Keep parallel arcs (task networks).
    pub multi_edge: bool,
}

/// Whitespace-separated tokens with their position, for error messages.
struct Tokens<'a> {
    items: Vec<&'a str>,
    next: usize,
}

impl<'a> Tokens<'a> {
    fn new(items: Vec<&'a str>) -> Self {
        Self { items, next: 0 }
    }

    fn at_end(&self) -> bool {
        self.next >= self.items.len()
    }

    fn skip(&mut self) {
        self.next += 1;
    }

    fn require<T: FromStr>(&mut self, what: &str) -> CliResult<T> {
        let position = self.next;
        let token = self.items.get(position).ok_or_else(|| CliError::Parse {
            position,
            what: format!("expected {what}, found end of input"),
        })?;
        self.next += 1;
        token.parse().map_err(|_| CliError::Parse {
            position,
            what: format!("expected {what}, found {token:?}"),
        })
    }

    fn require_label(&mut self, what: &str) -> CliResult<Label> {
        let position = self.next;
        let label: Label = self.require(what)?;
        label.checked_abs().ok_or_else(|| CliError::Parse {
            position,
            what: format!("label {label} has no absolute value"),
        })
    }

    fn require_weight(&mut self, what: &'static str) -> CliResult<Real> {
        let weight: Real = self.require(what)?;
        Ok(ensure_finite(weight, what)?)
    }
}

/// Node ids are `u32`, so larger declared orders cannot be honoured.
fn check_order(order: usize) -> CliResult<usize> {
    if order <= u32::MAX as usize {
        Ok(order)
    } else {
        Err(CliError::Parse {
            position: 0,
            what: format!("order {order} exceeds {}", u32::MAX),
        })
    }
}

/// Read and parse a graph file.
pub fn read_graph(path: &Path, format: InputFormat, options: LoadOptions) -> CliResult<Graph> {
    let text = fs::read_to_string(path).map_err(|source| CliError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = match format {
        InputFormat::Edges => parse_edge_list(&text, options)?,
        InputFormat::Dominating => parse_dominating(&text)?,
    };
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.number_edges(),
        "graph loaded"
    );
    Ok(graph)
}

/// Parse the edge-list layout.
///
/// Labels are taken by absolute value. Node weights are applied to both
/// endpoints of every accepted record; records past the declared order are
/// dropped by the graph. Missing nodes are filled with placeholders.
pub fn parse_edge_list(text: &str, options: LoadOptions) -> CliResult<Graph> {
    let mut tokens = Tokens::new(text.split_whitespace().collect());
    let order = check_order(tokens.require("order")?)?;
    let config = options.config;
    let mut graph = Graph::new(order, config);

    while !tokens.at_end() {
        let source = tokens.require_label("source label")?;
        let source_weight = if config.weighted_node {
            Some(tokens.require_weight("source node weight")?)
        } else {
            None
        };
        let target = tokens.require_label("target label")?;
        let target_weight = if config.weighted_node {
            Some(tokens.require_weight("target node weight")?)
        } else {
            None
        };
        let weight = if config.weighted_edge {
            tokens.require_weight("edge weight")?
        } else {
            1.0
        };

        let inserted = graph.insert_edge_with(source, target, weight, options.multi_edge);
        if inserted.is_none() {
            debug!(source, target, "edge record dropped");
        }
        // The source keeps its weight even when the target is refused.
        let source_id = inserted.map(|(s, _)| s).or_else(|| graph.id_by_label(source));
        if let (Some(s), Some(ws)) = (source_id, source_weight) {
            graph.set_node_weight(s, ws)?;
        }
        if let (Some((_, t)), Some(wt)) = (inserted, target_weight) {
            graph.set_node_weight(t, wt)?;
        }
    }

    graph.fill_placeholders();
    Ok(graph)
}

/// Parse the dominating-set layout into an undirected node-weighted graph.
pub fn parse_dominating(text: &str) -> CliResult<Graph> {
    let mut lines = text.lines();
    let header = lines.next().unwrap_or_default();
    let order: usize = header
        .split(|c: char| c.is_whitespace() || matches!(c, ':' | '=' | ';'))
        .filter(|s| !s.is_empty())
        .next_back()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| CliError::Parse {
            position: 0,
            what: format!("header {header:?} does not end with the order"),
        })?;
    let order = check_order(order)?;

    // Node positions are not used.
    let preamble = order.checked_add(2).ok_or_else(|| CliError::Parse {
        position: 0,
        what: format!("order {order} is too large"),
    })?;
    for _ in 0..preamble {
        lines.next();
    }

    let mut tokens = Tokens::new(lines.flat_map(str::split_whitespace).collect());
    let config = GraphConfig::undirected().with_node_weights(true);
    let mut graph = Graph::new(order, config);
    for i in 0..order {
        let weight = tokens.require_weight("node weight")?;
        graph.insert_weighted_node(i as Label + 1, weight);
    }
    tokens.skip();

    for i in 0..order.saturating_sub(1) {
        for j in 0..order {
            let cell: u8 = tokens.require("adjacency cell")?;
            if j > i && cell == 1 {
                graph.insert_edge(i as Label + 1, j as Label + 1, 1.0);
            }
        }
    }
    Ok(graph)
}
