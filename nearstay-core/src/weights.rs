//! User-chosen criterion weights and their validation.
//!
//! A query weights spatial proximity, guest rating, and review count
//! with a convex combination. Validation happens once, before any index
//! query runs; the validated triple resolves to a [`WeightMode`] so the
//! scoring path dispatches on an explicit tag rather than repeating
//! floating-point equality tests per candidate.

use thiserror::Error;

/// Tolerance applied to the sum-to-one check.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Convex combination coefficients for the three ranking criteria.
///
/// Each component must lie in `0.0..=1.0` and the three must sum to
/// `1.0` within [`WEIGHT_SUM_TOLERANCE`].
///
/// # Examples
/// ```
/// use nearstay_core::{WeightMode, Weights};
///
/// let weights = Weights::new(0.5, 0.3, 0.2);
/// assert_eq!(weights.validate(), Ok(WeightMode::Mixed));
///
/// let invalid = Weights::new(0.4, 0.4, 0.3);
/// assert!(invalid.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weights {
    /// Importance of spatial proximity.
    pub distance: f64,
    /// Importance of guest rating.
    pub rating: f64,
    /// Importance of review count.
    pub reviews: f64,
}

/// Errors returned by [`Weights::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WeightsError {
    /// A component was negative, above one, or not finite.
    #[error("weight components must be finite values in 0.0..=1.0")]
    OutOfRange,
    /// The components do not sum to one within tolerance.
    #[error("weights must sum to 1.0, got {sum}")]
    Sum {
        /// The offending total.
        sum: f64,
    },
}

/// Weight configuration tag resolved once per query.
///
/// The scoring policy treats full-weight rating and full-weight review
/// queries asymmetrically; this enum names those cases so the dispatch
/// happens in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightMode {
    /// `rating == 1.0`: distance is granted full proximity credit.
    AllRating,
    /// `reviews == 1.0`: distance and rating contribute nothing.
    AllReviews,
    /// Any other valid triple: all three criteria participate.
    Mixed,
}

impl Weights {
    /// Construct a weight triple without validating it.
    pub const fn new(distance: f64, rating: f64, reviews: f64) -> Self {
        Self {
            distance,
            rating,
            reviews,
        }
    }

    /// Validate the triple and resolve its [`WeightMode`].
    ///
    /// # Errors
    /// Returns [`WeightsError::OutOfRange`] when a component is outside
    /// `0.0..=1.0` or not finite, and [`WeightsError::Sum`] when the
    /// total misses `1.0` by more than [`WEIGHT_SUM_TOLERANCE`].
    pub fn validate(&self) -> Result<WeightMode, WeightsError> {
        let components = [self.distance, self.rating, self.reviews];
        if components
            .iter()
            .any(|w| !w.is_finite() || !(0.0..=1.0).contains(w))
        {
            return Err(WeightsError::OutOfRange);
        }
        let sum: f64 = components.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightsError::Sum { sum });
        }
        Ok(self.mode())
    }

    // Exact equality mirrors the ranking policy: the special cases fire
    // only on a full-weight criterion, rating taking priority.
    fn mode(&self) -> WeightMode {
        if self.rating == 1.0 {
            WeightMode::AllRating
        } else if self.reviews == 1.0 {
            WeightMode::AllReviews
        } else {
            WeightMode::Mixed
        }
    }
}
