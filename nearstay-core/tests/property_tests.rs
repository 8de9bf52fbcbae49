//! Property-based tests for the ranking engine.
//!
//! These use `proptest` to assert the invariants that must hold for all
//! valid queries, complementing the scenario tests.
//!
//! # Invariants tested
//!
//! - **Bounded output:** `top_k` never returns more than K entries.
//! - **No duplicates:** every entry maps to a distinct record.
//! - **Hard filter:** with positive distance weight, nothing beyond the
//!   radius survives.
//! - **Monotonicity:** moving a candidate further away never raises its
//!   score while distance carries weight.
//! - **Idempotence:** identical queries yield identical output.

use std::collections::HashSet;

use geo::Coord;
use proptest::prelude::*;

use nearstay_core::{Hotel, RankRequest, Ranker, Weights, test_support};

const ORIGIN: Coord<f64> = Coord { x: 0.0, y: 0.0 };

/// Corpus of 1 to `max_len` hotels scattered around the origin.
fn corpus_strategy(max_len: usize) -> impl Strategy<Value = Vec<Hotel>> {
    prop::collection::vec(
        (-0.5f64..0.5, -0.5f64..0.5, 0.0f64..=5.0, 0u32..1000),
        1..max_len,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(position, (x, y, rating, reviews))| {
                test_support::hotel(position as u64, x, y, rating, reviews)
            })
            .collect()
    })
}

/// Valid weight triples: raw components scaled to sum to one.
fn weights_strategy() -> impl Strategy<Value = Weights> {
    (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0)
        .prop_filter("total weight must be positive", |(d, r, v)| {
            d + r + v > 1e-6
        })
        .prop_map(|(d, r, v)| {
            let total = d + r + v;
            Weights::new(d / total, r / total, v / total)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn top_k_is_bounded_and_duplicate_free(
        hotels in corpus_strategy(20),
        weights in weights_strategy(),
        k in 1usize..30,
    ) {
        let ranker = Ranker::new(hotels);
        let request = RankRequest::new(ORIGIN, k, weights);
        let results = ranker.top_k(&request).expect("valid query");

        prop_assert!(results.len() <= k);
        let names: HashSet<&str> = results.iter().map(|c| c.name.as_str()).collect();
        prop_assert_eq!(names.len(), results.len(), "entries must be distinct records");
        let corpus_names: HashSet<String> =
            ranker.hotels().iter().map(|h| h.name.clone()).collect();
        prop_assert!(results.iter().all(|c| corpus_names.contains(&c.name)));
    }

    #[test]
    fn hard_filter_is_exact(
        hotels in corpus_strategy(20),
        k in 1usize..30,
    ) {
        let ranker = Ranker::new(hotels);
        let radius = 0.25;

        let weighted = RankRequest::new(ORIGIN, k, Weights::new(0.5, 0.3, 0.2))
            .with_max_radius(radius);
        let results = ranker.top_k(&weighted).expect("valid query");
        prop_assert!(results.iter().all(|c| c.distance <= radius));

        // With zero distance weight the filter must not run.
        let unweighted = RankRequest::new(ORIGIN, usize::MAX, Weights::new(0.0, 1.0, 0.0))
            .with_max_radius(radius);
        let all = ranker.top_k(&unweighted).expect("valid query");
        prop_assert_eq!(all.len(), ranker.hotels().len());
    }

    #[test]
    fn scores_never_rise_with_distance(
        near in 0.0f64..0.5,
        further in 0.0f64..0.5,
        rating in 0.0f64..=5.0,
        reviews in 0u32..1000,
        weights in weights_strategy(),
    ) {
        prop_assume!(weights.distance > 0.0);
        let (near, far) = if near <= further { (near, further) } else { (further, near) };

        let ranker = Ranker::new(vec![
            test_support::hotel(0, near, 0.0, rating, reviews),
            test_support::hotel(1, far, 0.0, rating, reviews),
        ]);
        let request = RankRequest::new(ORIGIN, 2, weights);
        let results = ranker.top_k(&request).expect("valid query");

        if let [first, second] = results.as_slice() {
            prop_assert!(first.score >= second.score);
            prop_assert!(first.distance <= second.distance);
        }
    }

    #[test]
    fn identical_queries_are_idempotent(
        hotels in corpus_strategy(20),
        weights in weights_strategy(),
        k in 1usize..10,
    ) {
        let ranker = Ranker::new(hotels);
        let request = RankRequest::new(ORIGIN, k, weights);
        let first = ranker.top_k(&request).expect("valid query");
        let second = ranker.top_k(&request).expect("valid query");
        prop_assert_eq!(first, second);
    }
}
