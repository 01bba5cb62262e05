//! Unified adcull CLI.
//!
//! This binary drives the filter-list pipeline:
//! - `adcull merge` - Merge and deduplicate source lists into one artifact
//! - `adcull optimize` - Reduce a merged artifact under a size budget

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use adcull::cli::{self, MergeArgs, OptimizeArgs};

/// Adcull unified CLI.
#[derive(Parser)]
#[command(
    name = "adcull",
    version,
    about = "Merge, deduplicate, and size-bound AdGuard-compatible filter lists",
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge and deduplicate source rule lists.
    #[command(name = "merge")]
    Merge(MergeArgs),

    /// Reduce a merged artifact under a target size budget.
    #[command(name = "optimize", alias = "reduce")]
    Optimize(OptimizeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Merge(args) => cli::run_merge(args),
        Commands::Optimize(args) => cli::run_optimize(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
