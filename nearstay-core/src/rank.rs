//! Top-K query orchestration.
//!
//! A [`Ranker`] owns the immutable record store, the spatial index, and
//! the corpus statistics, all built exactly once. Each query validates
//! its input, walks every indexed record in distance order, scores the
//! survivors of the hard distance filter, and returns the K best.

use geo::Coord;
use thiserror::Error;

use crate::{
    CorpusStats, Hotel, LinearComplement, ScoreParams, ScoringStrategy, SpatialIndex, Weights,
    WeightsError, planar_distance,
};

/// Default search radius, in the stored coordinate units.
pub const DEFAULT_MAX_RADIUS: f64 = 1.0;

/// Parameters for one ranking query.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use nearstay_core::{RankRequest, Weights};
///
/// let request = RankRequest::new(
///     Coord { x: 23.72, y: 37.98 },
///     5,
///     Weights::new(0.5, 0.3, 0.2),
/// )
/// .with_max_radius(0.25);
/// assert_eq!(request.k, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankRequest {
    /// Reference location the corpus is ranked against.
    pub reference: Coord<f64>,
    /// Number of results to return; must be at least one.
    pub k: usize,
    /// Criterion weights; validated before the query runs.
    pub weights: Weights,
    /// Hard distance cutoff applied while distance carries weight.
    pub max_radius: f64,
}

impl RankRequest {
    /// Build a request with the default search radius.
    pub const fn new(reference: Coord<f64>, k: usize, weights: Weights) -> Self {
        Self {
            reference,
            k,
            weights,
            max_radius: DEFAULT_MAX_RADIUS,
        }
    }

    /// Override the search radius.
    #[must_use]
    pub const fn with_max_radius(mut self, max_radius: f64) -> Self {
        self.max_radius = max_radius;
        self
    }
}

/// One ranked hotel produced by [`Ranker::top_k`].
///
/// Transient: recomputed per query, never persisted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredCandidate {
    /// The hotel's location.
    pub location: Coord<f64>,
    /// Planar distance from the query reference.
    pub distance: f64,
    /// Display name.
    pub name: String,
    /// Guest rating in `0.0..=5.0`.
    pub rating: f64,
    /// Review count.
    pub reviews: u32,
    /// Website URL.
    pub website: String,
    /// Combined score; higher ranks first.
    pub score: f64,
}

/// Errors returned by [`Ranker::top_k`].
///
/// Both variants are rejected before any index query executes; a failed
/// query never produces a partial result.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RankError {
    /// `k` was zero.
    #[error("k must be at least 1")]
    InvalidK,
    /// The weight triple failed validation.
    #[error(transparent)]
    Weights(#[from] WeightsError),
}

/// Ranking engine over an immutable hotel corpus.
///
/// Building a `Ranker` constructs the spatial index and captures the
/// corpus statistics once; queries share them read-only, so a single
/// `Ranker` can serve any number of [`top_k`](Self::top_k) calls.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use nearstay_core::{Hotel, RankRequest, Ranker, Weights};
///
/// # fn main() -> Result<(), nearstay_core::RankError> {
/// let hotels = vec![
///     Hotel::new(0, Coord { x: 0.0, y: 0.0 }, 4.5, 120, "Plaka Inn".into(), "No Website".into()),
///     Hotel::new(1, Coord { x: 0.3, y: 0.1 }, 3.0, 15, "Harbour Rest".into(), "No Website".into()),
/// ];
/// let ranker = Ranker::new(hotels);
/// let request = RankRequest::new(Coord { x: 0.0, y: 0.0 }, 1, Weights::new(0.5, 0.3, 0.2));
/// let top = ranker.top_k(&request)?;
/// assert_eq!(top[0].name, "Plaka Inn");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Ranker<S = LinearComplement> {
    hotels: Vec<Hotel>,
    index: SpatialIndex,
    stats: CorpusStats,
    strategy: S,
}

impl Ranker<LinearComplement> {
    /// Build a ranker with the default linear-complement strategy.
    pub fn new(hotels: Vec<Hotel>) -> Self {
        Self::with_strategy(hotels, LinearComplement)
    }
}

impl<S: ScoringStrategy> Ranker<S> {
    /// Build a ranker with an explicit scoring strategy.
    pub fn with_strategy(mut hotels: Vec<Hotel>, strategy: S) -> Self {
        hotels.sort_unstable_by_key(|hotel| hotel.id);
        let index = SpatialIndex::build(&hotels);
        let stats = CorpusStats::from_hotels(&hotels);
        Self {
            hotels,
            index,
            stats,
            strategy,
        }
    }

    /// The full record set, for callers that plot or report the corpus.
    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    /// Number of indexed records.
    pub fn indexed_len(&self) -> usize {
        self.index.len()
    }

    /// Rank the corpus against `request.reference` and return the top K.
    ///
    /// Fewer than K survivors of the distance filter is a valid short
    /// result, not an error. Repeated calls with identical arguments
    /// yield identical output.
    ///
    /// # Errors
    /// [`RankError::InvalidK`] when `request.k` is zero and
    /// [`RankError::Weights`] when the triple fails validation, both
    /// raised before the index is consulted.
    pub fn top_k(&self, request: &RankRequest) -> Result<Vec<ScoredCandidate>, RankError> {
        if request.k == 0 {
            return Err(RankError::InvalidK);
        }
        let mode = request.weights.validate()?;
        let params = ScoreParams::new(request.weights, mode, request.max_radius, self.stats);

        // Enumerate the whole corpus in distance order. Scoring can
        // promote a distant candidate over a near one, so a distance-only
        // top-N from the index would be wrong.
        let mut candidates = Vec::new();
        for id in self.index.nearest(request.reference, self.hotels.len()) {
            let Some(hotel) = self.hotel_by_id(id) else {
                continue;
            };
            let distance = planar_distance(request.reference, hotel.location);
            if params.exceeds_radius(distance) {
                continue;
            }
            let score = params.score(&self.strategy, distance, hotel.rating, hotel.reviews);
            candidates.push(ScoredCandidate {
                location: hotel.location,
                distance,
                name: hotel.name.clone(),
                rating: hotel.rating,
                reviews: hotel.reviews,
                website: hotel.website.clone(),
                score,
            });
        }

        // Stable sort: equal scores keep the index's distance order.
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        candidates.truncate(request.k);
        Ok(candidates)
    }

    fn hotel_by_id(&self, id: u64) -> Option<&Hotel> {
        self.hotels
            .binary_search_by_key(&id, |hotel| hotel.id)
            .ok()
            .map(|position| &self.hotels[position])
    }
}
