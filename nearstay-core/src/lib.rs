//! Core ranking engine for geolocated hotel search.
//!
//! The engine ranks a fixed corpus of hotels against a per-query
//! reference location, fusing spatial proximity with guest rating and
//! review count under caller-chosen weights. It is built from four
//! pieces: the immutable record store, an R-tree [`SpatialIndex`]
//! supplying candidates in distance order, a [`ScoringStrategy`]
//! reducing each candidate to one comparable number, and the
//! [`Ranker`] orchestrating validation, filtering, and top-K
//! selection.
//!
//! No I/O happens here; loading records and presenting results belong
//! to the surrounding crates.
//!
//! # Examples
//! ```
//! use geo::Coord;
//! use nearstay_core::{Hotel, RankRequest, Ranker, Weights};
//!
//! # fn main() -> Result<(), nearstay_core::RankError> {
//! let hotels = vec![
//!     Hotel::new(0, Coord { x: 23.72, y: 37.98 }, 4.5, 312, "Plaka Inn".into(), "No Website".into()),
//!     Hotel::new(1, Coord { x: 23.74, y: 37.97 }, 3.5, 48, "Harbour Rest".into(), "No Website".into()),
//! ];
//! let ranker = Ranker::new(hotels);
//! let request = RankRequest::new(
//!     Coord { x: 23.72, y: 37.98 },
//!     1,
//!     Weights::new(0.5, 0.3, 0.2),
//! );
//! let top = ranker.top_k(&request)?;
//! assert_eq!(top[0].name, "Plaka Inn");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod hotel;
mod index;
mod rank;
mod score;
mod weights;

pub mod test_support;

pub use hotel::{Hotel, NO_WEBSITE, UNKNOWN_NAME};
pub use index::SpatialIndex;
pub use rank::{DEFAULT_MAX_RADIUS, RankError, RankRequest, Ranker, ScoredCandidate};
pub use score::{
    CorpusStats, LinearComplement, QuadraticPenalty, RATING_CEILING, ScoreParams, ScoringStrategy,
    planar_distance,
};
pub use weights::{WEIGHT_SUM_TOLERANCE, WeightMode, Weights, WeightsError};
