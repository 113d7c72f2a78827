// src/bin/graphveil.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use graphveil_core::cli::args::{Cli, Commands};
use graphveil_core::cli::handlers::{self, AnonymizeArgs, GenerateArgs};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    dispatch(&cli)
}

fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Anonymize {
            input,
            output,
            alpha,
            strategy,
            seed,
            json,
        } => handlers::handle_anonymize(&AnonymizeArgs {
            input: input.clone(),
            output: output.clone(),
            alpha: *alpha,
            strategy: *strategy,
            seed: *seed,
            json: *json,
        }),
        Commands::Check { input, alpha, json } => handlers::handle_check(input, *alpha, *json),
        Commands::Generate {
            vertices,
            labels,
            edge_prob,
            seed,
            output,
        } => handlers::handle_generate(&GenerateArgs {
            vertices: *vertices,
            labels: *labels,
            edge_prob: *edge_prob,
            seed: *seed,
            output: output.clone(),
        }),
    }
}
