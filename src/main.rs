//! graph-path: build a graph from an edge list and print a shortest path.

use anyhow::Context;
use clap::Parser;
use graph_paths::Graph;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const EXAMPLE_EDGES: &str = "A,B;B,C;C,D;D,E;A,K;K,E;A,F;F,G;G,H;H,I;I,J;J,E";

/// Print the fewest-edges path between two nodes of an edge list.
#[derive(Parser, Debug)]
#[command(name = "graph-path", version)]
#[command(after_help = "Examples:
  graph-path                                 [A, K, E] on the built-in example
  graph-path --edges \"X,Y;Y,Z\" --from X --to Z
  graph-path --weighted --edges \"X,Y,4;Y,Z,2\" --from X --to Z --json")]
struct Cli {
    /// Edge list: `from,to` pairs separated by `;` (`from,to,weight` with --weighted)
    #[arg(short, long, default_value = EXAMPLE_EDGES)]
    edges: String,

    /// Start node
    #[arg(short, long, default_value = "A")]
    from: String,

    /// Target node
    #[arg(short, long, default_value = "E")]
    to: String,

    /// Build a directed graph (edges are not mirrored)
    #[arg(long)]
    directed: bool,

    /// Build a weighted graph from `from,to,weight` triples
    #[arg(long)]
    weighted: bool,

    /// Print the path as a JSON array
    #[arg(long)]
    json: bool,

    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut graph = Graph::new(cli.directed, cli.weighted);
    let summary = if cli.weighted {
        graph.add_weighted_edges_from_text(&cli.edges)
    } else {
        graph
            .add_edges_from_text(&cli.edges)
            .context("Failed to load edge list")?
    };
    info!(
        nodes = graph.node_count(),
        added = summary.added,
        skipped = summary.skipped,
        "built graph"
    );

    let path = graph.shortest_path(&cli.from, &cli.to);
    if cli.json {
        println!("{}", serde_json::to_string(&path)?);
    } else {
        println!("[{}]", path.join(", ")); // e.g. [A, K, E]
    }
    Ok(())
}
