use geo::Coord;

/// Placeholder used when a record carries no name.
pub const UNKNOWN_NAME: &str = "Unknown Name";

/// Placeholder used when a record carries no website.
pub const NO_WEBSITE: &str = "No Website";

/// A hotel listing with its location and quality signals.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude` in
/// degrees. The engine treats them as planar for distance purposes; no
/// geodesic correction is applied.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use nearstay_core::Hotel;
///
/// let hotel = Hotel::new(
///     1,
///     Coord { x: 23.72, y: 37.98 },
///     4.5,
///     312,
///     "Plaka Inn".into(),
///     "https://plaka.example".into(),
/// );
///
/// assert_eq!(hotel.id, 1);
/// assert!(hotel.has_valid_location());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hotel {
    /// Identity assigned at load time; used as the index key.
    pub id: u64,
    /// Geographic position (`x = longitude`, `y = latitude`).
    pub location: Coord<f64>,
    /// Guest rating in `0.0..=5.0`; `0.0` when the source had none.
    pub rating: f64,
    /// Review count; `0` when the source had none.
    pub reviews: u32,
    /// Display name, or [`UNKNOWN_NAME`].
    pub name: String,
    /// Website URL, or [`NO_WEBSITE`].
    pub website: String,
}

impl Hotel {
    /// Construct a `Hotel` from its parts.
    pub fn new(
        id: u64,
        location: Coord<f64>,
        rating: f64,
        reviews: u32,
        name: String,
        website: String,
    ) -> Self {
        Self {
            id,
            location,
            rating,
            reviews,
            name,
            website,
        }
    }

    /// Construct a `Hotel` with no quality signals and placeholder
    /// display fields.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use nearstay_core::Hotel;
    ///
    /// let hotel = Hotel::unrated(7, Coord { x: 0.0, y: 0.0 });
    /// assert_eq!(hotel.rating, 0.0);
    /// assert_eq!(hotel.name, nearstay_core::UNKNOWN_NAME);
    /// ```
    pub fn unrated(id: u64, location: Coord<f64>) -> Self {
        Self::new(
            id,
            location,
            0.0,
            0,
            String::from(UNKNOWN_NAME),
            String::from(NO_WEBSITE),
        )
    }

    /// Report whether both coordinates are finite.
    ///
    /// Records failing this test are excluded from the spatial index
    /// entirely: never scored, never returned.
    pub fn has_valid_location(&self) -> bool {
        self.location.x.is_finite() && self.location.y.is_finite()
    }
}
