//! Error types emitted by the Nearstay CLI.

use camino::Utf8PathBuf;
use thiserror::Error;

use nearstay_core::RankError;
use nearstay_data::CsvIngestError;

/// Errors emitted by the Nearstay CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// The hotel CSV path does not exist or is not a file.
    #[error("hotels CSV path {path} does not exist or is not a file")]
    MissingSourceFile {
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// The hotel CSV path could not be inspected.
    #[error("failed to inspect hotels CSV path {path}: {source}")]
    InspectSourcePath {
        /// The offending path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Loading the hotel CSV failed.
    #[error(transparent)]
    Ingest(#[from] CsvIngestError),
    /// The ranking request was rejected before execution.
    #[error(transparent)]
    Query(#[from] RankError),
    /// Marker data could not be encoded for the map.
    #[error("failed to encode map marker data: {source}")]
    EncodeMarkers {
        /// Encoder error returned by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The rendered map could not be written.
    #[error("failed to write map to {path}: {source}")]
    WriteMap {
        /// Destination file path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
