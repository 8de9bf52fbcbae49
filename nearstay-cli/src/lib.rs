//! Command-line interface for the Nearstay ranking engine.
//!
//! The binary loads a hotel CSV, ranks it against a reference point
//! under user-chosen weights, prints the winners, and optionally writes
//! an interactive HTML map of the full corpus and the results.

#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod rank;
mod render;

pub use error::CliError;

/// Run the Nearstay CLI with the current process arguments.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, ingestion, ranking, or
/// map rendering fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => rank::run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "nearstay",
    about = "Rank geolocated hotels around a reference point",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a hotel CSV against a reference location.
    Rank(rank::RankArgs),
}

#[cfg(test)]
mod tests;
