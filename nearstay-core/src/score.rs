//! Candidate scoring: normalisation, weighting, and the hard distance
//! filter.
//!
//! Scoring reduces `(distance, rating, reviews)` plus a validated
//! weight triple to one scalar. The only corpus-wide inputs are the
//! maximum review count, captured once in [`CorpusStats`], and the
//! configured search radius; everything else is knowable per candidate.

use geo::Coord;

use crate::{Hotel, WeightMode, Weights};

/// Fixed rating ceiling used for normalisation.
///
/// Ratings are scaled against this constant rather than a corpus-derived
/// maximum, so a corpus of mediocre hotels does not inflate scores.
pub const RATING_CEILING: f64 = 5.0;

/// Planar Euclidean distance between two coordinates.
///
/// Operates in the stored coordinate units; callers wanting kilometres
/// must convert outside the engine.
pub fn planar_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Corpus-wide constants captured once when a ranker is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStats {
    /// Largest review count across the entire record set.
    pub max_reviews: u32,
}

impl CorpusStats {
    /// Scan the record set once for its normalisation constants.
    pub fn from_hotels(hotels: &[Hotel]) -> Self {
        Self {
            max_reviews: hotels.iter().map(|hotel| hotel.reviews).max().unwrap_or(0),
        }
    }
}

/// Map a normalised distance in `[0, 1]` to a proximity credit.
///
/// Implementations must be `Send + Sync` so a ranker can be shared
/// across threads, and must return finite values for finite input.
/// Higher credit means closer.
pub trait ScoringStrategy: Send + Sync {
    /// Proximity credit for a normalised distance.
    fn proximity(&self, norm_distance: f64) -> f64;
}

/// Linear proximity credit `1 - d`.
///
/// This is the default strategy and the one the selection path uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearComplement;

impl ScoringStrategy for LinearComplement {
    fn proximity(&self, norm_distance: f64) -> f64 {
        1.0 - norm_distance
    }
}

/// Quadratic proximity credit `(1 - d)^2`, widening the gap between
/// near and far candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadraticPenalty;

impl ScoringStrategy for QuadraticPenalty {
    fn proximity(&self, norm_distance: f64) -> f64 {
        let complement = 1.0 - norm_distance;
        complement * complement
    }
}

/// Per-query scoring context, resolved once before candidates are
/// visited.
///
/// Carries the validated weights, their resolved [`WeightMode`], the
/// search radius, and the corpus statistics, so the per-candidate path
/// performs no validation and no corpus scans.
#[derive(Debug, Clone, Copy)]
pub struct ScoreParams {
    weights: Weights,
    mode: WeightMode,
    max_radius: f64,
    max_reviews: u32,
}

impl ScoreParams {
    /// Bundle a validated weight configuration with its query context.
    pub const fn new(
        weights: Weights,
        mode: WeightMode,
        max_radius: f64,
        stats: CorpusStats,
    ) -> Self {
        Self {
            weights,
            mode,
            max_radius,
            max_reviews: stats.max_reviews,
        }
    }

    /// Apply the hard distance filter.
    ///
    /// A candidate beyond the search radius is excluded outright, not
    /// penalised. The filter is skipped only when distance carries zero
    /// weight, in which case far candidates stay eligible.
    pub fn exceeds_radius(&self, distance: f64) -> bool {
        self.weights.distance > 0.0 && distance > self.max_radius
    }

    /// Score one candidate.
    ///
    /// Normalises each criterion into `[0, 1]`, applies the mode's
    /// special cases, and combines the terms under the query weights.
    /// Zero-valued normalisation constants (`max_reviews`, `max_radius`)
    /// yield a zero term rather than a division error.
    pub fn score<S>(&self, strategy: &S, distance: f64, rating: f64, reviews: u32) -> f64
    where
        S: ScoringStrategy + ?Sized,
    {
        let norm_reviews = if self.max_reviews == 0 {
            0.0
        } else {
            f64::from(reviews) / f64::from(self.max_reviews)
        };
        let (norm_distance, norm_rating) = match self.mode {
            // Full-weight rating: the candidate is treated as if it sat
            // on the reference point.
            WeightMode::AllRating => (0.0, rating / RATING_CEILING),
            // Full-weight reviews: distance and rating are both zeroed.
            WeightMode::AllReviews => (0.0, 0.0),
            WeightMode::Mixed => {
                let norm_distance = if self.max_radius == 0.0 {
                    0.0
                } else {
                    distance / self.max_radius
                };
                (norm_distance, rating / RATING_CEILING)
            }
        };
        self.weights.distance * strategy.proximity(norm_distance)
            + self.weights.rating * norm_rating
            + self.weights.reviews * norm_reviews
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn params(weights: Weights, max_radius: f64, max_reviews: u32) -> ScoreParams {
        let mode = weights.validate().expect("test weights must be valid");
        ScoreParams::new(weights, mode, max_radius, CorpusStats { max_reviews })
    }

    #[rstest]
    fn mixed_weights_combine_all_terms() {
        let params = params(Weights::new(0.5, 0.3, 0.2), 1.0, 100);
        let score = params.score(&LinearComplement, 0.5, 4.0, 50);
        let expected = 0.5 * (1.0 - 0.5) + 0.3 * (4.0 / 5.0) + 0.2 * 0.5;
        assert!((score - expected).abs() < 1e-12);
    }

    #[rstest]
    fn full_rating_weight_ignores_distance() {
        let params = params(Weights::new(0.0, 1.0, 0.0), 1.0, 100);
        let near = params.score(&LinearComplement, 0.0, 4.0, 50);
        let far = params.score(&LinearComplement, 250.0, 4.0, 50);
        assert_eq!(near, far);
        assert!((near - 0.8).abs() < 1e-12);
    }

    #[rstest]
    fn full_reviews_weight_ignores_distance_and_rating() {
        let params = params(Weights::new(0.0, 0.0, 1.0), 1.0, 200);
        let score = params.score(&LinearComplement, 9.0, 5.0, 50);
        assert!((score - 0.25).abs() < 1e-12);
    }

    #[rstest]
    fn zero_review_corpus_scores_without_dividing() {
        let params = params(Weights::new(0.5, 0.3, 0.2), 1.0, 0);
        let score = params.score(&LinearComplement, 0.0, 5.0, 0);
        assert!((score - (0.5 + 0.3)).abs() < 1e-12);
    }

    #[rstest]
    fn zero_radius_grants_full_proximity_credit() {
        let params = params(Weights::new(1.0, 0.0, 0.0), 0.0, 10);
        let score = params.score(&LinearComplement, 5.0, 0.0, 0);
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(0.5, 0.25)]
    #[case(1.0, 0.0)]
    fn quadratic_penalty_squares_the_complement(#[case] nd: f64, #[case] expected: f64) {
        assert!((QuadraticPenalty.proximity(nd) - expected).abs() < 1e-12);
    }

    #[rstest]
    fn hard_filter_requires_positive_distance_weight() {
        let filtering = params(Weights::new(0.5, 0.3, 0.2), 1.0, 10);
        assert!(filtering.exceeds_radius(1.5));
        assert!(!filtering.exceeds_radius(1.0));

        let unweighted = params(Weights::new(0.0, 1.0, 0.0), 1.0, 10);
        assert!(!unweighted.exceeds_radius(1.5));
    }

    #[rstest]
    fn planar_distance_is_euclidean() {
        let d = planar_distance(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 });
        assert!((d - 5.0).abs() < 1e-12);
    }
}
