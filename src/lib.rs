//! Facade crate for the Nearstay ranking engine.
//!
//! Re-exports the core domain types so applications can depend on a
//! single crate name. The CSV loader lives in `nearstay-data` and the
//! command-line front-end in `nearstay-cli`.

#![forbid(unsafe_code)]

pub use nearstay_core::{
    CorpusStats, DEFAULT_MAX_RADIUS, Hotel, LinearComplement, NO_WEBSITE, QuadraticPenalty,
    RATING_CEILING, RankError, RankRequest, Ranker, ScoreParams, ScoredCandidate, ScoringStrategy,
    SpatialIndex, UNKNOWN_NAME, WEIGHT_SUM_TOLERANCE, WeightMode, Weights, WeightsError,
    planar_distance,
};
