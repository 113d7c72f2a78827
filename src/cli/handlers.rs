// src/cli/handlers.rs
use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::config::Config;
use crate::graph::{generate, io};
use crate::proximity;
use crate::repair::{self, Strategy};

#[derive(Debug, Clone)]
pub struct AnonymizeArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub alpha: Option<f64>,
    pub strategy: Option<Strategy>,
    pub seed: Option<u64>,
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub vertices: usize,
    pub labels: usize,
    pub edge_prob: f64,
    pub seed: Option<u64>,
    pub output: PathBuf,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    alpha: f64,
    max_distance: f64,
    alpha_proximal: bool,
}

/// Handles the anonymize command: load, repair, write.
///
/// # Errors
/// Returns error on I/O or parse failure, or when alpha-proximity is
/// unattainable for the input labelling.
pub fn handle_anonymize(args: &AnonymizeArgs) -> Result<()> {
    let config = Config::load()?;
    let alpha = args.alpha.unwrap_or(config.anonymize.alpha);
    let strategy = args.strategy.unwrap_or(config.anonymize.strategy);
    let seed = args.seed.or(config.anonymize.seed);

    let mut graph = io::read_graph(&args.input)?;
    let mut rng = seeded_rng(seed);
    let report = repair::anonymize(&mut graph, alpha, strategy, &mut rng)?;
    io::write_graph(&args.output, &graph)?;

    if args.json {
        print_json(&report)?;
    } else {
        println!(
            "{} alpha-proximal at {alpha}: {} edges added over {} iterations (max distance {:.4})",
            "✓".green(),
            report.edges_added,
            report.iterations,
            report.max_distance
        );
        println!("  wrote {}", args.output.display());
    }
    Ok(())
}

/// Handles the check command: evaluate the oracle, mutate nothing.
///
/// # Errors
/// Returns error on I/O or parse failure, or on an invalid alpha.
pub fn handle_check(input: &Path, alpha: Option<f64>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let alpha = alpha.unwrap_or(config.anonymize.alpha);
    repair::validate_alpha(alpha)?;

    let graph = io::read_graph(input)?;
    let max_distance = proximity::max_nad_distance(&graph);
    let alpha_proximal = max_distance <= alpha;

    if json {
        print_json(&CheckReport {
            alpha,
            max_distance,
            alpha_proximal,
        })?;
    } else if alpha_proximal {
        println!(
            "{} max NAD distance {max_distance:.4} within alpha {alpha}",
            "✓".green()
        );
    } else {
        println!(
            "{} max NAD distance {max_distance:.4} exceeds alpha {alpha}",
            "✗".red()
        );
    }
    Ok(())
}

/// Handles the generate command.
///
/// # Errors
/// Returns error on an invalid edge probability or write failure.
pub fn handle_generate(args: &GenerateArgs) -> Result<()> {
    let mut rng = seeded_rng(args.seed);
    let graph = generate::random_graph(args.vertices, args.labels, args.edge_prob, &mut rng)?;
    io::write_graph(&args.output, &graph)?;

    println!(
        "{} wrote {} vertices, {} labels, {} edges to {}",
        "✓".green(),
        graph.vertex_count(),
        graph.label_count(),
        graph.edge_count(),
        args.output.display()
    );
    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

/// Prints a serializable object as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
fn print_json<T: Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
