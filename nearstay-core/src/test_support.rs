//! Test-only helpers for building small hotel corpora.
//!
//! Shared by the unit, behaviour, and property suites; intended only
//! for small, hand-written datasets.

use geo::Coord;

use crate::{Hotel, NO_WEBSITE};

/// Build a hotel at `(x, y)` with the given quality signals.
///
/// The display name is `hotel-<id>` and the website is the
/// [`NO_WEBSITE`] placeholder.
pub fn hotel(id: u64, x: f64, y: f64, rating: f64, reviews: u32) -> Hotel {
    Hotel::new(
        id,
        Coord { x, y },
        rating,
        reviews,
        format!("hotel-{id}"),
        String::from(NO_WEBSITE),
    )
}

/// The three-hotel corpus used across the suites: two records near the
/// origin and one a full coordinate unit away.
pub fn harbour_corpus() -> Vec<Hotel> {
    vec![
        hotel(0, 0.0, 0.0, 5.0, 100),
        hotel(1, 0.0, 0.0005, 3.0, 10),
        hotel(2, 1.0, 1.0, 5.0, 100),
    ]
}
