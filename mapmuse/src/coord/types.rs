//! Coordinate value type and validity bounds.

use std::fmt;

/// Minimum valid latitude in degrees.
pub const MIN_LAT: f64 = -90.0;
/// Maximum valid latitude in degrees.
pub const MAX_LAT: f64 = 90.0;
/// Minimum valid longitude in degrees.
pub const MIN_LON: f64 = -180.0;
/// Maximum valid longitude in degrees.
pub const MAX_LON: f64 = 180.0;

/// A geographic coordinate in decimal degrees.
///
/// Location libraries report uninitialized readings as out-of-range sentinel
/// values; [`Coordinate::is_valid`] is the single check that decides whether
/// a reading can be used or must be substituted from the fallback pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees, valid range [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, valid range [-180, 180].
    pub lon: f64,
}

impl Coordinate {
    /// Creates a new coordinate. No validation is performed here; callers
    /// check [`is_valid`](Self::is_valid) before publishing.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns true if both axes are within the valid geographic range
    /// (bounds inclusive).
    pub fn is_valid(&self) -> bool {
        (MIN_LAT..=MAX_LAT).contains(&self.lat) && (MIN_LON..=MAX_LON).contains(&self.lon)
    }

    /// Returns the dedup token for this coordinate.
    ///
    /// Identical coordinates produce identical tokens; the host uses the
    /// token to detect whether newly published artwork differs from the
    /// previous one. Plain string assembly, no hashing needed.
    pub fn dedup_token(&self) -> String {
        format!("{},{}", self.lat, self.lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_coordinates_in_range() {
        assert!(Coordinate::new(45.4642, 9.19).is_valid());
        assert!(Coordinate::new(0.0, 0.0).is_valid());
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
    }

    #[test]
    fn out_of_range_latitude_is_invalid() {
        assert!(!Coordinate::new(90.1, 0.0).is_valid());
        assert!(!Coordinate::new(-90.1, 0.0).is_valid());
    }

    #[test]
    fn out_of_range_longitude_is_invalid() {
        assert!(!Coordinate::new(0.0, 180.1).is_valid());
        assert!(!Coordinate::new(0.0, -180.1).is_valid());
    }

    #[test]
    fn uninitialized_sentinel_is_invalid() {
        // Location libraries report unset readings with large sentinels.
        assert!(!Coordinate::new(420.0, 420.0).is_valid());
    }

    #[test]
    fn dedup_token_is_stable_for_equal_coordinates() {
        let a = Coordinate::new(45.0, 9.0);
        let b = Coordinate::new(45.0, 9.0);
        assert_eq!(a.dedup_token(), b.dedup_token());
    }

    #[test]
    fn dedup_token_differs_for_different_coordinates() {
        let a = Coordinate::new(45.0, 9.0);
        let b = Coordinate::new(45.0, 9.1);
        assert_ne!(a.dedup_token(), b.dedup_token());
    }

    #[test]
    fn display_uses_shortest_representation() {
        let c = Coordinate::new(45.4642, 9.1900);
        assert_eq!(c.to_string(), "45.4642,9.19");
    }
}
