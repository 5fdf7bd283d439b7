//! Coordinate validation and the one-mile search box.

use crate::constants;

/// Why a coordinate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
    LatitudeOutOfBounds,
    LongitudeOutOfBounds,
}

/// A validated point inside the metro area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Check that a latitude lies within the metro bounds.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::LatitudeOutOfBounds`] outside the range.
    pub fn check_latitude(latitude: f64) -> Result<f64, CoordinateError> {
        let (low, high) = constants::LATITUDE_RANGE;
        if (low..=high).contains(&latitude) {
            Ok(latitude)
        } else {
            Err(CoordinateError::LatitudeOutOfBounds)
        }
    }

    /// Check that a longitude lies within the metro bounds.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::LongitudeOutOfBounds`] outside the range.
    pub fn check_longitude(longitude: f64) -> Result<f64, CoordinateError> {
        let (low, high) = constants::LONGITUDE_RANGE;
        if (low..=high).contains(&longitude) {
            Ok(longitude)
        } else {
            Err(CoordinateError::LongitudeOutOfBounds)
        }
    }

    /// Build a coordinate, validating both axes.
    ///
    /// # Errors
    ///
    /// Returns the first axis found out of bounds, latitude first.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        Ok(Self {
            latitude: Self::check_latitude(latitude)?,
            longitude: Self::check_longitude(longitude)?,
        })
    }

    /// The box reaching one mile in each cardinal direction.
    #[must_use]
    pub fn one_mile_box(&self) -> BoundingBox {
        BoundingBox::around(*self, 1.0)
    }
}

/// An axis-aligned latitude/longitude box, edges inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl BoundingBox {
    /// Box extending `miles` around `center`, edges rounded to the
    /// configured precision.
    #[must_use]
    pub fn around(center: Coordinate, miles: f64) -> Self {
        let lat_delta = constants::DEGREES_PER_MILE_LAT * miles;
        let lon_delta = constants::DEGREES_PER_MILE_LON * miles;
        Self {
            south: round_to(center.latitude - lat_delta, constants::BOUNDING_BOX_PRECISION),
            north: round_to(center.latitude + lat_delta, constants::BOUNDING_BOX_PRECISION),
            west: round_to(center.longitude - lon_delta, constants::BOUNDING_BOX_PRECISION),
            east: round_to(center.longitude + lon_delta, constants::BOUNDING_BOX_PRECISION),
        }
    }

    /// Whether a point lies inside the box (edges included).
    #[must_use]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.south..=self.north).contains(&latitude) && (self.west..=self.east).contains(&longitude)
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_latitude_bounds_inclusive() {
        assert_eq!(Coordinate::check_latitude(40.0), Ok(40.0));
        assert_eq!(Coordinate::check_latitude(43.0), Ok(43.0));
        assert_eq!(
            Coordinate::check_latitude(39.99),
            Err(CoordinateError::LatitudeOutOfBounds)
        );
        assert_eq!(
            Coordinate::check_latitude(43.01),
            Err(CoordinateError::LatitudeOutOfBounds)
        );
    }

    #[test]
    fn test_longitude_bounds_inclusive() {
        assert_eq!(Coordinate::check_longitude(-88.0), Ok(-88.0));
        assert_eq!(Coordinate::check_longitude(-87.0), Ok(-87.0));
        assert_eq!(
            Coordinate::check_longitude(-86.5),
            Err(CoordinateError::LongitudeOutOfBounds)
        );
        assert_eq!(
            Coordinate::check_longitude(87.6),
            Err(CoordinateError::LongitudeOutOfBounds)
        );
    }

    #[test]
    fn test_new_reports_latitude_first() {
        assert_eq!(
            Coordinate::new(10.0, 10.0),
            Err(CoordinateError::LatitudeOutOfBounds)
        );
    }

    #[test]
    fn test_one_mile_box_rounded_to_three_places() {
        let center = Coordinate::new(41.88, -87.63).unwrap();
        let area = center.one_mile_box();
        assert_close(area.south, 41.866);
        assert_close(area.north, 41.894);
        assert_close(area.west, -87.65);
        assert_close(area.east, -87.61);
    }

    #[test]
    fn test_box_contains_edges() {
        let area = BoundingBox {
            south: 41.0,
            north: 42.0,
            west: -88.0,
            east: -87.0,
        };
        assert!(area.contains(41.0, -88.0));
        assert!(area.contains(41.5, -87.5));
        assert!(!area.contains(42.1, -87.5));
        assert!(!area.contains(41.5, -86.9));
    }
}
