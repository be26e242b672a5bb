//! wgraph CLI — build a weighted graph from arguments and run one analysis on it
//!
//! ```text
//! wgraph-cli --node A --node B --edge A,B,1.5 dijkstra --source A
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wgraph::algo::{self, PathResult};
use wgraph::graph::GraphStore;
use wgraph::{NodeId, PathStatus, PrimConfig, PrimStart};

#[derive(Parser)]
#[command(name = "wgraph", version, about = "Weighted graph analysis CLI")]
struct Cli {
    /// Treat edges as one-way
    #[arg(long, global = true)]
    directed: bool,

    /// Node label (repeatable)
    #[arg(long = "node", value_name = "LABEL", global = true)]
    nodes: Vec<String>,

    /// Weighted edge `FROM,TO,WEIGHT` (repeatable); endpoints are added as nodes
    #[arg(long = "edge", value_name = "FROM,TO,WEIGHT", value_parser = parse_edge, global = true)]
    edges: Vec<EdgeArg>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency list
    Adjacency,
    /// Check whether the graph is connected (strongly, when directed)
    Connected,
    /// List weakly connected components
    Components,
    /// Shortest paths with Dijkstra (non-negative weights)
    Dijkstra {
        #[arg(long)]
        source: String,
        /// Target nodes; every node when omitted
        #[arg(long = "target")]
        targets: Vec<String>,
    },
    /// Shortest paths with Bellman-Ford (negative weights allowed)
    BellmanFord {
        #[arg(long)]
        source: String,
        /// Target nodes; every node when omitted
        #[arg(long = "target")]
        targets: Vec<String>,
    },
    /// Minimum spanning tree with Prim's algorithm
    Mst {
        /// Start node (defaults to the lowest label)
        #[arg(long, conflicts_with = "seed")]
        start: Option<String>,
        /// Start from a node chosen by this RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Debug)]
struct EdgeArg {
    from: String,
    to: String,
    weight: f64,
}

fn parse_edge(s: &str) -> std::result::Result<EdgeArg, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [from, to, weight] = parts[..] else {
        return Err(format!("expected FROM,TO,WEIGHT, got '{}'", s));
    };
    if from.is_empty() || to.is_empty() {
        return Err(format!("empty node label in '{}'", s));
    }
    let weight = weight
        .parse::<f64>()
        .map_err(|e| format!("invalid weight '{}': {}", weight, e))?;
    Ok(EdgeArg {
        from: from.to_string(),
        to: to.to_string(),
        weight,
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let store = build_store(cli)?;
    debug!(
        nodes = store.node_count(),
        edges = store.edge_count(),
        directed = store.is_directed(),
        "graph loaded"
    );

    match &cli.command {
        Commands::Adjacency => run_adjacency(&store, &cli.format),
        Commands::Connected => run_connected(&store, &cli.format),
        Commands::Components => run_components(&store, &cli.format),
        Commands::Dijkstra { source, targets } => {
            let paths = if targets.is_empty() {
                algo::shortest_paths_dijkstra_to_all(&store, source)?
            } else {
                algo::shortest_paths_dijkstra(&store, source, &as_strs(targets))?
            };
            print_paths(&paths, &cli.format)
        }
        Commands::BellmanFord { source, targets } => {
            let paths = if targets.is_empty() {
                algo::shortest_paths_bellman_ford_to_all(&store, source)?
            } else {
                algo::shortest_paths_bellman_ford(&store, source, &as_strs(targets))?
            };
            print_paths(&paths, &cli.format)
        }
        Commands::Mst { start, seed } => {
            let start = match (start, seed) {
                (Some(node), _) => PrimStart::Node(NodeId::from(node.as_str())),
                (None, Some(seed)) => PrimStart::Random { seed: *seed },
                (None, None) => PrimStart::LowestLabel,
            };
            run_mst(&store, &PrimConfig { start }, &cli.format)
        }
    }
}

fn build_store(cli: &Cli) -> Result<GraphStore> {
    let mut store = GraphStore::new(cli.directed);
    for node in &cli.nodes {
        if node.is_empty() {
            bail!("node labels must not be empty");
        }
        store.add_node(node.as_str());
    }
    for edge in &cli.edges {
        store.add_node(edge.from.as_str());
        store.add_node(edge.to.as_str());
        let previous = store
            .add_edge(&edge.from, &edge.to, edge.weight)
            .with_context(|| format!("adding edge {},{},{}", edge.from, edge.to, edge.weight))?;
        if let Some(previous) = previous {
            debug!(source = %edge.from, target = %edge.to, previous, "edge weight replaced");
        }
    }
    Ok(store)
}

fn as_strs(labels: &[String]) -> Vec<&str> {
    labels.iter().map(String::as_str).collect()
}

fn run_adjacency(store: &GraphStore, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let edges: Vec<_> = store.edges().collect();
            let value = serde_json::json!({
                "directed": store.is_directed(),
                "nodes": store.nodes().collect::<Vec<_>>(),
                "edges": edges,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => {
            print!("{}", store);
            println!("{} node(s), {} edge(s)", store.node_count(), store.edge_count());
        }
    }
    Ok(())
}

fn run_connected(store: &GraphStore, format: &OutputFormat) -> Result<()> {
    let connected = algo::is_connected(store);
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({ "connected": connected });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => {
            let kind = if store.is_directed() { "strongly connected" } else { "connected" };
            if connected {
                println!("{}", kind);
            } else {
                println!("not {}", kind);
            }
        }
    }
    Ok(())
}

fn run_components(store: &GraphStore, format: &OutputFormat) -> Result<()> {
    let components = algo::connected_components(store).sorted_components();
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&components)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["component", "size", "nodes"]);
            for (i, members) in components.iter().enumerate() {
                table.add_row(vec![i.to_string(), members.len().to_string(), join_labels(members, ", ")]);
            }
            println!("{}", table);
            println!("{} component(s)", components.len());
        }
    }
    Ok(())
}

fn print_paths(paths: &[PathResult], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(paths)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["source", "target", "status", "cost", "path"]);
            for p in paths {
                let path = p
                    .path
                    .as_deref()
                    .map(|nodes| join_labels(nodes, " -> "))
                    .unwrap_or_default();
                table.add_row(vec![
                    p.source.to_string(),
                    p.target.to_string(),
                    status_label(p.status).to_string(),
                    p.cost.to_string(),
                    path,
                ]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}

fn run_mst(store: &GraphStore, config: &PrimConfig, format: &OutputFormat) -> Result<()> {
    let mst = algo::minimum_spanning_tree_with(store, config)?;
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&mst)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["from", "to", "weight"]);
            for e in &mst.edges {
                table.add_row(vec![e.source.to_string(), e.target.to_string(), e.weight.to_string()]);
            }
            println!("{}", table);
            println!("total weight: {}", mst.total_weight);
        }
    }
    Ok(())
}

fn status_label(status: PathStatus) -> &'static str {
    match status {
        PathStatus::Reached => "reached",
        PathStatus::Unreachable => "unreachable",
        PathStatus::NegativeCycle => "negative cycle",
    }
}

fn join_labels(nodes: &[NodeId], sep: &str) -> String {
    nodes.iter().map(NodeId::as_str).collect::<Vec<_>>().join(sep)
}
