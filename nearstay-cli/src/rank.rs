//! Rank command implementation for the Nearstay CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use geo::Coord;

use nearstay_core::{
    DEFAULT_MAX_RADIUS, QuadraticPenalty, RankRequest, Ranker, ScoredCandidate, ScoringStrategy,
    Weights,
};
use nearstay_data::load_hotels_csv;

use crate::{CliError, render};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser)]
#[command(
    long_about = "Load a hotel CSV export, rank every record against the \
                 reference point under the given criterion weights, and \
                 print the top results. The weights must sum to 1.0.",
    about = "Rank a hotel CSV against a reference location"
)]
pub(crate) struct RankArgs {
    /// Path to the hotel CSV export.
    #[arg(value_name = "path")]
    pub(crate) hotels_csv: Utf8PathBuf,
    /// Longitude of the reference point, in degrees.
    #[arg(long, value_name = "degrees", allow_negative_numbers = true)]
    pub(crate) longitude: f64,
    /// Latitude of the reference point, in degrees.
    #[arg(long, value_name = "degrees", allow_negative_numbers = true)]
    pub(crate) latitude: f64,
    /// Number of results to return.
    #[arg(short = 'k', long = "top", value_name = "count", default_value_t = 5)]
    pub(crate) top: usize,
    /// Weight given to spatial proximity, as a fraction of 1.
    #[arg(long, value_name = "fraction")]
    pub(crate) weight_distance: f64,
    /// Weight given to guest rating, as a fraction of 1.
    #[arg(long, value_name = "fraction")]
    pub(crate) weight_rating: f64,
    /// Weight given to review count, as a fraction of 1.
    #[arg(long, value_name = "fraction")]
    pub(crate) weight_reviews: f64,
    /// Hard distance cutoff, in coordinate units.
    #[arg(long, value_name = "units", default_value_t = DEFAULT_MAX_RADIUS)]
    pub(crate) max_radius: f64,
    /// Proximity scoring strategy.
    #[arg(long, value_enum, value_name = "strategy", default_value = "linear")]
    pub(crate) strategy: StrategyArg,
    /// Write an interactive HTML map to this path.
    #[arg(long = "map", value_name = "path")]
    pub(crate) map_path: Option<Utf8PathBuf>,
}

/// Selectable proximity scoring strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum StrategyArg {
    /// Linear proximity credit `1 - d`.
    Linear,
    /// Quadratic proximity credit `(1 - d)^2`.
    Quadratic,
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    require_existing(&args.hotels_csv)?;
    let report = load_hotels_csv(&args.hotels_csv)?;

    let reference = Coord {
        x: args.longitude,
        y: args.latitude,
    };
    let weights = Weights::new(args.weight_distance, args.weight_rating, args.weight_reviews);
    let request =
        RankRequest::new(reference, args.top, weights).with_max_radius(args.max_radius);

    match args.strategy {
        StrategyArg::Linear => execute(Ranker::new(report.hotels), &request, args.map_path),
        StrategyArg::Quadratic => execute(
            Ranker::with_strategy(report.hotels, QuadraticPenalty),
            &request,
            args.map_path,
        ),
    }
}

fn execute<S: ScoringStrategy>(
    ranker: Ranker<S>,
    request: &RankRequest,
    map_path: Option<Utf8PathBuf>,
) -> Result<(), CliError> {
    let results = ranker.top_k(request)?;
    print_results(&results);
    if let Some(path) = map_path {
        render::write_map(&path, ranker.hotels(), &results, request.reference)?;
        println!("Map written to {path}; open it in a browser to view.");
    }
    Ok(())
}

fn print_results(results: &[ScoredCandidate]) {
    if results.is_empty() {
        println!("No hotels matched within the search radius.");
        return;
    }
    println!("Top {} hotels:", results.len());
    for (position, candidate) in results.iter().enumerate() {
        println!(
            "{}. Name: {}, Rating: {:.1}, Reviews: {}, Distance: {:.4}, Score: {:.3}",
            position + 1,
            candidate.name,
            candidate.rating,
            candidate.reviews,
            candidate.distance,
            candidate.score,
        );
    }
}

fn require_existing(path: &Utf8Path) -> Result<(), CliError> {
    match nearstay_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::MissingSourceFile {
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            path: path.to_path_buf(),
            source,
        }),
    }
}
