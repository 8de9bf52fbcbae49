//! Spatial index over hotel locations.
//!
//! Wraps an R-tree of `(id, location)` entries with degenerate point
//! envelopes. The index is built once from the full record set and is
//! read-only afterwards; queries enumerate identities in non-decreasing
//! planar Euclidean distance order.

use geo::Coord;
use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::Hotel;

/// Entry stored in the R-tree: record identity plus its point.
#[derive(Debug, Clone)]
struct IndexedHotel {
    id: u64,
    location: [f64; 2],
}

impl RTreeObject for IndexedHotel {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.location)
    }
}

impl PointDistance for IndexedHotel {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.location[0] - point[0];
        let dy = self.location[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Read-only spatial index keyed by record identity.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use nearstay_core::{Hotel, SpatialIndex};
///
/// let hotels = vec![
///     Hotel::unrated(1, Coord { x: 0.0, y: 0.0 }),
///     Hotel::unrated(2, Coord { x: 3.0, y: 4.0 }),
/// ];
/// let index = SpatialIndex::build(&hotels);
///
/// assert_eq!(index.len(), 2);
/// assert_eq!(index.nearest(Coord { x: 0.1, y: 0.1 }, 10), vec![1, 2]);
/// ```
#[derive(Debug, Default)]
pub struct SpatialIndex {
    tree: RTree<IndexedHotel>,
}

impl SpatialIndex {
    /// Build an index over every record with finite coordinates.
    ///
    /// Records lacking valid geometry are skipped, not inserted and not
    /// reported. An empty input yields an empty index whose queries all
    /// return nothing.
    pub fn build(hotels: &[Hotel]) -> Self {
        let entries = hotels
            .iter()
            .filter(|hotel| hotel.has_valid_location())
            .map(|hotel| IndexedHotel {
                id: hotel.id,
                location: [hotel.location.x, hotel.location.y],
            })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Report whether the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Return up to `limit` record identities ordered by non-decreasing
    /// planar Euclidean distance from `origin`.
    ///
    /// When `limit` exceeds the indexed count, every identity is
    /// returned. Distances are measured in the stored coordinate units;
    /// no conversion happens inside the index.
    pub fn nearest(&self, origin: Coord<f64>, limit: usize) -> Vec<u64> {
        self.tree
            .nearest_neighbor_iter(&[origin.x, origin.y])
            .take(limit)
            .map(|entry| entry.id)
            .collect()
    }
}
