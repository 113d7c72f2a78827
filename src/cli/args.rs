// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::repair::Strategy;

#[derive(Parser)]
#[command(
    name = "graphveil",
    version,
    about = "Labelled-graph anonymization against neighborhood attribute disclosure"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Insert edges until every neighborhood blends into the global label mix
    Anonymize {
        /// Input graph file
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Where to write the anonymized graph
        #[arg(long, short, value_name = "FILE")]
        output: PathBuf,
        /// Proximity tolerance (overrides graphveil.toml)
        #[arg(long)]
        alpha: Option<f64>,
        /// Repair strategy (overrides graphveil.toml)
        #[arg(long, value_enum)]
        strategy: Option<Strategy>,
        /// RNG seed for a reproducible run (overrides graphveil.toml)
        #[arg(long)]
        seed: Option<u64>,
        /// Emit the repair report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate the privacy predicate without touching the graph
    Check {
        /// Input graph file
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Proximity tolerance (overrides graphveil.toml)
        #[arg(long)]
        alpha: Option<f64>,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Emit a synthetic labelled graph
    Generate {
        /// Number of vertices
        #[arg(short = 'n', long)]
        vertices: usize,
        /// Label alphabet size
        #[arg(short = 'l', long)]
        labels: usize,
        /// Probability of each vertex pair being an edge
        #[arg(long, default_value = "0.0")]
        edge_prob: f64,
        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Where to write the graph
        #[arg(long, short, value_name = "FILE")]
        output: PathBuf,
    },
}
