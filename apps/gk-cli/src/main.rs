mod dot;
mod error;
mod loader;
mod report;

use clap::{Parser, Subcommand};
use gk_algo::{
    AlgoResult, RandomizedConfig, ReactiveConfig, critical_path, dijkstra,
    dominating_set_randomized, dominating_set_reactive, dominating_set_weighted, floyd_warshall,
    kruskal, prim,
};
use gk_core::timing::{self, Timer};
use gk_core::{Label, Real};
use gk_graph::{Graph, GraphConfig, ops};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use error::{CliError, CliResult};
use loader::{InputFormat, LoadOptions};
use report::RunInfo;

#[derive(Parser)]
#[command(name = "gk-cli")]
#[command(about = "graphkit CLI - graph algorithms over plain-text instances", long_about = None)]
struct Cli {
    /// Graph instance file
    input: PathBuf,

    /// Arcs are one-way
    #[arg(long, global = true)]
    directed: bool,

    /// Edge records carry a weight
    #[arg(long, global = true)]
    weighted_edges: bool,

    /// Edge records carry a weight for each endpoint
    #[arg(long, global = true)]
    weighted_nodes: bool,

    /// Instance file layout
    #[arg(long, value_enum, default_value_t = InputFormat::Edges, global = true)]
    format: InputFormat,

    /// Write the result to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Leave elapsed times out of reports
    #[arg(long, global = true)]
    no_timing: bool,

    /// Print results as JSON instead of text (graphs stay DOT)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the graph in DOT
    Dot {
        /// Keep parallel arcs
        #[arg(long)]
        multi_edge: bool,
    },
    /// Check whether one node reaches another
    Reach { source: Label, target: Label },
    /// Report connectivity and component numbers
    Connected,
    /// All-pairs shortest distances
    Floyd,
    /// Single-source shortest distances
    Dijkstra { start: Label },
    /// Minimum spanning tree (Kruskal), as DOT
    Kruskal,
    /// Minimum spanning tree (Prim), as DOT
    Prim,
    /// Critical path of a task network
    Pert,
    /// Union with a second graph, as DOT
    Union { other: PathBuf },
    /// Intersection with a second graph, as DOT
    Intersection { other: PathBuf },
    /// Arcs not present in a second graph, as DOT
    Difference { other: PathBuf },
    /// Greedy weighted dominating set
    Greedy,
    /// Randomized greedy weighted dominating set
    Randomized {
        #[arg(long, default_value_t = RandomizedConfig::default().iterations)]
        iterations: usize,
        #[arg(long, default_value_t = RandomizedConfig::default().alfa)]
        alfa: Real,
        /// Defaults to a value derived from the clock
        #[arg(long)]
        seed: Option<u64>,
        /// JSON file with `seed`, `iterations` and `alfa`; replaces the flags
        #[arg(long)]
        params: Option<PathBuf>,
    },
    /// Reactive randomized weighted dominating set
    Reactive {
        #[arg(long, default_value_t = ReactiveConfig::default().iterations)]
        iterations: usize,
        #[arg(long, default_value_t = ReactiveConfig::default().block)]
        block: usize,
        /// Comma-separated candidate alfas
        #[arg(long, value_delimiter = ',')]
        alfas: Vec<Real>,
        #[arg(long)]
        seed: Option<u64>,
        /// JSON file with `seed`, `iterations`, `alfas` and `block`; replaces the flags
        #[arg(long)]
        params: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.no_timing {
        timing::disable_timing();
    }

    let text = run(&cli)?;
    if let Some(path) = &cli.output {
        std::fs::write(path, &text)?;
        println!("✓ Result written to {}", path.display());
    } else {
        print!("{}", text);
    }
    Ok(())
}

fn run(cli: &Cli) -> CliResult<String> {
    let multi_edge = matches!(
        cli.command,
        Commands::Pert | Commands::Dot { multi_edge: true }
    );
    let options = LoadOptions {
        config: GraphConfig {
            directed: cli.directed,
            weighted_edge: cli.weighted_edges,
            weighted_node: cli.weighted_nodes,
        },
        multi_edge,
    };
    let load = |path: &Path| loader::read_graph(path, cli.format, options);
    let graph = load(&cli.input)?;

    match &cli.command {
        Commands::Dot { multi_edge } => Ok(dot::to_dot(&graph, *multi_edge)),
        Commands::Reach { source, target } => {
            let found = graph.depth_first_search(id_of(&graph, *source)?, id_of(&graph, *target)?);
            if cli.json {
                return to_json(json!({ "source": source, "target": target, "reachable": found }));
            }
            Ok(format!("{source} reaches {target}: {}\n", if found { "yes" } else { "no" }))
        }
        Commands::Connected => {
            if cli.json {
                return to_json(json!({
                    "connected": graph.is_connected(),
                    "labels": labels(&graph),
                    "components": graph.components(),
                }));
            }
            Ok(report::connectivity_report(&graph))
        }
        Commands::Floyd => {
            let (matrix, elapsed) = timed("floyd-warshall", || Ok(floyd_warshall(&graph)))?;
            if cli.json {
                let rows: Vec<&[Real]> = matrix.rows().collect();
                return to_json(json!({ "labels": labels(&graph), "distances": rows, "seconds": elapsed }));
            }
            Ok(report::distance_matrix_report(&graph, &matrix, elapsed))
        }
        Commands::Dijkstra { start } => {
            let id = id_of(&graph, *start)?;
            let (distances, elapsed) = timed("dijkstra", || dijkstra(&graph, id))?;
            if cli.json {
                return to_json(json!({
                    "start": start,
                    "labels": labels(&graph),
                    "distances": distances,
                    "seconds": elapsed,
                }));
            }
            Ok(report::distances_report(&graph, *start, &distances, elapsed))
        }
        Commands::Kruskal => {
            let (tree, _) = timed("kruskal", || kruskal(&graph))?;
            Ok(dot::to_dot(&tree, false))
        }
        Commands::Prim => {
            let (tree, _) = timed("prim", || prim(&graph))?;
            Ok(dot::to_dot(&tree, false))
        }
        Commands::Pert => {
            let (path, elapsed) = timed("pert", || critical_path(&graph))?;
            if cli.json {
                return to_json(json!({ "critical_path": path, "seconds": elapsed }));
            }
            Ok(report::critical_path_report(&path, elapsed))
        }
        Commands::Union { other } => Ok(dot::to_dot(&ops::union(&graph, &load(other)?), false)),
        Commands::Intersection { other } => {
            Ok(dot::to_dot(&ops::intersection(&graph, &load(other)?), false))
        }
        Commands::Difference { other } => {
            Ok(dot::to_dot(&ops::difference(&graph, &load(other)?), false))
        }
        Commands::Greedy => {
            let (set, elapsed) = timed("greedy", || Ok(dominating_set_weighted(&graph)))?;
            if cli.json {
                return to_json(json!({ "solution": set, "seconds": elapsed }));
            }
            Ok(report::dominating_report(&set, elapsed, RunInfo::default()))
        }
        Commands::Randomized {
            iterations,
            alfa,
            seed,
            params,
        } => {
            let mut config = match params {
                Some(path) => read_params::<RandomizedConfig>(path)?,
                None => RandomizedConfig {
                    seed: clock_seed(),
                    iterations: *iterations,
                    alfa: *alfa,
                },
            };
            if let Some(seed) = seed {
                config.seed = *seed;
            }
            let (set, elapsed) = timed("randomized", || dominating_set_randomized(&graph, &config))?;
            if cli.json {
                return to_json(json!({ "config": config, "solution": set, "seconds": elapsed }));
            }
            let info = RunInfo {
                seed: Some(config.seed),
                best_alfa: None,
            };
            Ok(report::dominating_report(&set, elapsed, info))
        }
        Commands::Reactive {
            iterations,
            block,
            alfas,
            seed,
            params,
        } => {
            let mut config = match params {
                Some(path) => read_params::<ReactiveConfig>(path)?,
                None => ReactiveConfig {
                    seed: clock_seed(),
                    iterations: *iterations,
                    alfas: if alfas.is_empty() {
                        ReactiveConfig::default().alfas
                    } else {
                        alfas.clone()
                    },
                    block: *block,
                },
            };
            if let Some(seed) = seed {
                config.seed = *seed;
            }
            let (result, elapsed) = timed("reactive", || dominating_set_reactive(&graph, &config))?;
            if cli.json {
                return to_json(json!({ "config": config, "result": result, "seconds": elapsed }));
            }
            let info = RunInfo {
                seed: Some(config.seed),
                best_alfa: Some(result.best_alfa),
            };
            Ok(report::dominating_report(&result.solution, elapsed, info))
        }
    }
}

fn labels(graph: &Graph) -> Vec<Label> {
    graph.nodes().iter().map(|n| n.label()).collect()
}

fn to_json(value: serde_json::Value) -> CliResult<String> {
    let mut text = serde_json::to_string_pretty(&value)?;
    text.push('\n');
    Ok(text)
}

/// Algorithm parameters from a JSON file; missing fields take their defaults.
fn read_params<T: serde::de::DeserializeOwned>(path: &Path) -> CliResult<T> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Params {
        path: path.to_path_buf(),
        source,
    })
}

fn id_of(graph: &Graph, label: Label) -> CliResult<gk_core::NodeId> {
    graph.id_by_label(label).ok_or(CliError::UnknownLabel(label))
}

/// Run an algorithm under a [`Timer`].
fn timed<T>(label: &'static str, f: impl FnOnce() -> AlgoResult<T>) -> CliResult<(T, Option<f64>)> {
    let timer = Timer::start(label);
    let value = f()?;
    let elapsed = timer.stop();
    if let Some(seconds) = elapsed {
        debug!(algorithm = label, seconds, "algorithm finished");
    }
    Ok((value, elapsed))
}

fn clock_seed() -> u64 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    (secs & 0xFFFF) | (u64::from(std::process::id()) << 16)
}
