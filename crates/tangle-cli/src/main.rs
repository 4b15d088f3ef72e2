#![forbid(unsafe_code)]
//! `tgl`: command-line front end for the tangle analytics engines.
//!
//! One subcommand per metric. Every subcommand reads a TSV edge list, runs
//! its engine over the resulting snapshot, writes a TSV result file (where
//! the metric produces per-node output), and prints a tab-separated run
//! summary to stdout ending in the elapsed wall time in nanoseconds.

mod input;
mod output;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use input::{AMOUNT_CHANNEL, Profile, TRANSFERS_CHANNEL};
use tangle_core::{
    Graph, GraphStats, HitsConfig, PageRankConfig, Weighting, degree_strength, distance_stats,
    hits, pagerank, strong_components, weak_components,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "tangle: structural and centrality analytics for transfer graphs",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Degree and strength per node (collapsed profile: transfers + amount)
    Degree {
        /// Collapsed-profile edge list.
        input: PathBuf,
        /// Output TSV path.
        output: PathBuf,
    },

    /// Degree and strength per node (multigraph profile: one row per transfer)
    MgDegree {
        /// Multigraph-profile edge list.
        input: PathBuf,
        /// Output TSV path.
        output: PathBuf,
    },

    /// Weak and strong component ids per node, with a partition summary
    Connectivity {
        /// Collapsed-profile edge list.
        input: PathBuf,
        /// Output TSV path.
        output: PathBuf,
    },

    /// Average shortest-hop path length over reachable ordered pairs
    Distance {
        /// Collapsed-profile edge list.
        input: PathBuf,
    },

    /// Harmonic centrality (incoming variant) per node
    Harmonic {
        /// Collapsed-profile edge list.
        input: PathBuf,
        /// Output TSV path.
        output: PathBuf,
    },

    /// PageRank per node: unweighted, by transfer count, by amount
    Pagerank {
        /// Collapsed-profile edge list.
        input: PathBuf,
        /// Output TSV path.
        output: PathBuf,
        /// Damping factor.
        #[arg(long, default_value_t = 0.85)]
        damping: f64,
    },

    /// HITS hub/authority per node: unweighted, by transfer count, by amount
    Hits {
        /// Collapsed-profile edge list.
        input: PathBuf,
        /// Output TSV path.
        output: PathBuf,
    },

    /// Snapshot summary statistics (density, components, coverage)
    Stats {
        /// Collapsed-profile edge list.
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let started = Instant::now();

    match cli.command {
        Commands::Degree { input, output } => {
            let g = input::load_graph(&input, Profile::Collapsed)?;
            let ds = degree_strength(&g);
            let transfers = channel(&g, TRANSFERS_CHANNEL)?;
            let amount = channel(&g, AMOUNT_CHANNEL)?;
            output::write_collapsed_degree(&output, &ds, transfers, amount)?;
            print_summary(&g, started);
        }

        Commands::MgDegree { input, output } => {
            let g = input::load_graph(&input, Profile::Multigraph)?;
            let ds = degree_strength(&g);
            let amount = channel(&g, AMOUNT_CHANNEL)?;
            output::write_multigraph_degree(&output, &ds, amount)?;
            print_summary(&g, started);
        }

        Commands::Connectivity { input, output } => {
            let g = input::load_graph(&input, Profile::Collapsed)?;
            let weak = weak_components(&g);
            let strong = strong_components(&g);
            output::write_connectivity(&output, &weak, &strong)?;
            let coverage = coverage(weak.largest_size(), g.node_count());
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                g.node_count(),
                g.edge_count(),
                weak.count,
                strong.count,
                coverage,
                started.elapsed().as_nanos(),
            );
        }

        Commands::Distance { input } => {
            let g = input::load_graph(&input, Profile::Collapsed)?;
            let stats = distance_stats(&g);
            println!(
                "{}\t{}\t{}\t{}",
                g.node_count(),
                g.edge_count(),
                stats.average_path_length,
                started.elapsed().as_nanos(),
            );
        }

        Commands::Harmonic { input, output } => {
            let g = input::load_graph(&input, Profile::Collapsed)?;
            let stats = distance_stats(&g);
            output::write_harmonic(&output, &stats.harmonic)?;
            print_summary(&g, started);
        }

        Commands::Pagerank {
            input,
            output,
            damping,
        } => {
            let g = input::load_graph(&input, Profile::Collapsed)?;
            let transfers = channel(&g, TRANSFERS_CHANNEL)?;
            let amount = channel(&g, AMOUNT_CHANNEL)?;
            let config = PageRankConfig {
                damping,
                ..PageRankConfig::default()
            };
            let unweighted = pagerank(&g, Weighting::Unweighted, &config);
            let by_transfers = pagerank(&g, Weighting::Channel(transfers), &config);
            let by_amount = pagerank(&g, Weighting::Channel(amount), &config);
            output::write_pagerank(&output, &unweighted, &by_transfers, &by_amount)?;
            print_summary(&g, started);
        }

        Commands::Hits { input, output } => {
            let g = input::load_graph(&input, Profile::Collapsed)?;
            let transfers = channel(&g, TRANSFERS_CHANNEL)?;
            let amount = channel(&g, AMOUNT_CHANNEL)?;
            let config = HitsConfig::default();
            let unweighted = hits(&g, Weighting::Unweighted, &config);
            let by_transfers = hits(&g, Weighting::Channel(transfers), &config);
            let by_amount = hits(&g, Weighting::Channel(amount), &config);
            output::write_hits(&output, &unweighted, &by_transfers, &by_amount)?;
            print_summary(&g, started);
        }

        Commands::Stats { input } => {
            let g = input::load_graph(&input, Profile::Collapsed)?;
            let stats = GraphStats::from_graph(&g);
            print!("{}", render_stats(&stats));
            println!("elapsed_ns\t{}", started.elapsed().as_nanos());
        }
    }

    Ok(())
}

/// Standard run summary: `node_count <TAB> edge_count <TAB> elapsed_ns`.
fn print_summary(g: &Graph, started: Instant) {
    println!(
        "{}\t{}\t{}",
        g.node_count(),
        g.edge_count(),
        started.elapsed().as_nanos()
    );
}

fn render_stats(stats: &GraphStats) -> String {
    format!(
        "node_count\t{}\nedge_count\t{}\ndensity\t{}\nisolated_nodes\t{}\n\
         max_in_degree\t{}\nmax_out_degree\t{}\nweak_components\t{}\n\
         strong_components\t{}\nlargest_weak_component\t{}\ncoverage\t{}\n",
        stats.node_count,
        stats.edge_count,
        stats.density,
        stats.isolated_node_count,
        stats.max_in_degree,
        stats.max_out_degree,
        stats.weak_component_count,
        stats.strong_component_count,
        stats.largest_weak_component,
        stats.coverage,
    )
}

fn channel(g: &Graph, name: &str) -> Result<usize> {
    g.channel_index(name)
        .with_context(|| format!("snapshot has no '{name}' weight channel"))
}

#[allow(clippy::cast_precision_loss)]
fn coverage(largest: usize, nodes: usize) -> f64 {
    if nodes == 0 {
        return 0.0;
    }
    largest as f64 / nodes as f64
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
