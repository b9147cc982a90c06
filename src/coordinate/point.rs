//! Latitude/longitude value type

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::polyline::errors::{PolylineError, PolylineResult};
use super::parser;

/// Valid latitude range in degrees
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
/// Valid longitude range in degrees
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Two coordinates closer than this on both axes compare equal
pub const TOLERANCE: f64 = 1e-7;

/// Scale applied before rounding stored values (6 decimal digits)
const STORAGE_SCALE: f64 = 1e6;

/// A geographic coordinate in degrees
///
/// Values are validated on construction and always stored rounded to
/// 6 decimal places. Equality is tolerance based, see [`TOLERANCE`].
#[derive(Debug, Clone, Copy)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees, within [-90, 90]
    /// * `longitude` - Longitude in degrees, within [-180, 180]
    ///
    /// # Returns
    /// The rounded coordinate, or `PolylineError::OutOfRange` if a component
    /// is outside its bounds (NaN and infinities included)
    pub fn new(latitude: f64, longitude: f64) -> PolylineResult<Self> {
        if !LATITUDE_RANGE.contains(&latitude) {
            return Err(PolylineError::OutOfRange { field: "latitude", value: latitude });
        }
        if !LONGITUDE_RANGE.contains(&longitude) {
            return Err(PolylineError::OutOfRange { field: "longitude", value: longitude });
        }

        Ok(Coordinate {
            latitude: round_stored(latitude),
            longitude: round_stored(longitude),
        })
    }

    /// Latitude in degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Check a coordinate against the valid ranges
    ///
    /// Note the polarity: returns `true` when the coordinate is **out of
    /// range**. Since [`Coordinate::new`] rejects such values this is `false`
    /// for every constructed coordinate.
    pub fn validate(coordinate: &Coordinate) -> bool {
        !LATITUDE_RANGE.contains(&coordinate.latitude) ||
            !LONGITUDE_RANGE.contains(&coordinate.longitude)
    }

    /// Parse a single coordinate in the form `(lat,lon)`
    ///
    /// Each component is an optionally negative integer part of 1-3 digits
    /// with an optional fractional part of 1-6 digits.
    pub fn parse_single(text: &str) -> PolylineResult<Self> {
        let (latitude, longitude) = parser::parse_coordinate_pair(text)?;
        Coordinate::new(latitude, longitude)
    }
}

fn round_stored(value: f64) -> f64 {
    (value * STORAGE_SCALE).round() / STORAGE_SCALE
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        (self.latitude - other.latitude).abs() < TOLERANCE &&
            (self.longitude - other.longitude).abs() < TOLERANCE
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinate {
    type Err = PolylineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::parse_single(s)
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = PolylineError;

    fn try_from(pair: (f64, f64)) -> Result<Self, Self::Error> {
        Coordinate::new(pair.0, pair.1)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.latitude, coordinate.longitude)
    }
}
