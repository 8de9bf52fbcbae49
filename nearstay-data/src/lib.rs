//! CSV ingestion for hotel listings.
//!
//! Reads tabular hotel exports (TripAdvisor-style column names) and
//! converts each data row into a [`Hotel`] record. Rows without usable
//! geometry are dropped and counted rather than failing the load;
//! missing quality signals become zero and missing display fields
//! become the engine's sentinel placeholders. Identity follows the CSV
//! row position, so a dropped row still consumes its id.

#![forbid(unsafe_code)]

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use geo::Coord;
use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use nearstay_core::{Hotel, NO_WEBSITE, UNKNOWN_NAME};
use nearstay_fs::open_utf8_file;

/// One raw CSV row; every column is individually optional.
#[derive(Debug, Deserialize)]
struct RawHotelRow {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    num_reviews: Option<u32>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    website: Option<String>,
}

impl RawHotelRow {
    /// Convert the row into a record, or `None` when its geometry is
    /// missing or non-finite.
    fn into_hotel(self, id: u64) -> Option<Hotel> {
        let longitude = self.longitude.filter(|value| value.is_finite())?;
        let latitude = self.latitude.filter(|value| value.is_finite())?;
        let rating = self.rating.filter(|value| value.is_finite()).unwrap_or(0.0);
        Some(Hotel::new(
            id,
            Coord {
                x: longitude,
                y: latitude,
            },
            rating,
            self.num_reviews.unwrap_or(0),
            self.name.unwrap_or_else(|| String::from(UNKNOWN_NAME)),
            self.website.unwrap_or_else(|| String::from(NO_WEBSITE)),
        ))
    }
}

/// Outcome of one CSV load.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CsvIngestReport {
    /// Records with valid geometry, in row order.
    pub hotels: Vec<Hotel>,
    /// Data rows dropped for missing or non-finite coordinates.
    pub dropped: usize,
}

/// Errors returned when ingesting a hotel CSV file.
#[derive(Debug, Error)]
pub enum CsvIngestError {
    /// The file could not be opened.
    #[error("failed to open hotel CSV at {path}: {source}")]
    Open {
        /// Requested CSV path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A row could not be parsed against the expected columns.
    #[error("failed to decode hotel CSV at {path}: {source}")]
    Decode {
        /// Requested CSV path.
        path: Utf8PathBuf,
        /// Decoder error returned by `csv`.
        #[source]
        source: csv::Error,
    },
}

/// Load hotel records from a headed CSV file.
///
/// Expected columns are `name`, `rating`, `num_reviews`, `longitude`,
/// `latitude`, and `website`; unknown columns are ignored and every
/// expected column may be absent per row. Dropped rows are summarised
/// with a single warning.
///
/// # Errors
/// Returns [`CsvIngestError`] when the file cannot be opened or a row
/// fails to decode. Rows without valid geometry are not errors.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use nearstay_data::load_hotels_csv;
///
/// # fn main() -> Result<(), nearstay_data::CsvIngestError> {
/// let report = load_hotels_csv(Utf8Path::new("hotels.csv"))?;
/// println!("loaded {} hotels", report.hotels.len());
/// # Ok(())
/// # }
/// ```
pub fn load_hotels_csv(path: &Utf8Path) -> Result<CsvIngestReport, CsvIngestError> {
    let file = open_utf8_file(path).map_err(|source| CsvIngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut report = CsvIngestReport::default();
    let mut next_id: u64 = 0;
    for row in reader.deserialize::<RawHotelRow>() {
        let raw = row.map_err(|source| CsvIngestError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        match raw.into_hotel(next_id) {
            Some(hotel) => report.hotels.push(hotel),
            None => report.dropped += 1,
        }
        next_id += 1;
    }

    if report.dropped > 0 {
        warn!(
            "dropped {} rows without valid coordinates from {path}",
            report.dropped
        );
    }
    debug!("loaded {} hotels from {path}", report.hotels.len());
    Ok(report)
}
