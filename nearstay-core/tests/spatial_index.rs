use geo::Coord;
use nearstay_core::{Hotel, SpatialIndex};

fn hotel(id: u64, x: f64, y: f64) -> Hotel {
    Hotel::unrated(id, Coord { x, y })
}

#[test]
fn spatial_index_len_matches_valid_input() {
    let index = SpatialIndex::build(&[hotel(1, 0.0, 0.0), hotel(2, 1.0, 1.0)]);
    assert_eq!(index.len(), 2);
    assert!(!index.is_empty());
}

#[test]
fn nearest_orders_by_increasing_distance() {
    let index = SpatialIndex::build(&[
        hotel(1, 0.0, 0.4),
        hotel(2, 0.0, 0.1),
        hotel(3, 0.0, 0.2),
        hotel(4, 0.0, 0.3),
    ]);
    let ids = index.nearest(Coord { x: 0.0, y: 0.0 }, 4);
    assert_eq!(ids, vec![2, 3, 4, 1]);
}

#[test]
fn nearest_honours_the_result_bound() {
    let index = SpatialIndex::build(&[hotel(1, 0.0, 0.1), hotel(2, 0.0, 0.2)]);
    assert_eq!(index.nearest(Coord { x: 0.0, y: 0.0 }, 1), vec![1]);
    // A bound beyond the corpus returns everything, in order.
    assert_eq!(index.nearest(Coord { x: 0.0, y: 0.0 }, 10), vec![1, 2]);
}

#[test]
fn invalid_geometry_never_enters_the_index() {
    let mut adrift = hotel(7, 0.0, 0.0);
    adrift.location = Coord {
        x: f64::NAN,
        y: 0.0,
    };
    let index = SpatialIndex::build(&[hotel(1, 0.0, 0.1), adrift]);
    assert_eq!(index.len(), 1);
}

#[test]
fn spatial_index_handles_empty_input() {
    let index = SpatialIndex::build(&[]);
    assert_eq!(index.len(), 0);
    assert!(index.is_empty());
    assert!(index.nearest(Coord { x: 0.0, y: 0.0 }, 3).is_empty());
}
