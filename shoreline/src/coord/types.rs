//! Coordinate type definitions

use std::fmt;

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Valid latitude range in degrees (WGS84)
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range in degrees
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A geographic position in decimal degrees, longitude first.
///
/// Field order follows the GeoJSON position convention (`[lon, lat]`),
/// which is how coastline boundary vertices are stored on disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Longitude in decimal degrees (east-west)
    pub lon: f64,
    /// Latitude in decimal degrees (north-south)
    pub lat: f64,
}

impl Position {
    /// Create a new position from longitude and latitude.
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lon, self.lat)
    }
}

impl From<(f64, f64)> for Position {
    /// Convert from a `(lon, lat)` tuple.
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.lon)?;
        seq.serialize_element(&self.lat)?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Position {
    /// Accepts `[lon, lat]` and `[lon, lat, elevation, ...]` arrays.
    ///
    /// GeoJSON permits positions with more than two elements; everything
    /// past longitude and latitude is ignored.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PositionVisitor;

        impl<'de> Visitor<'de> for PositionVisitor {
            type Value = Position;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a position array of at least two numbers")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Position, A::Error> {
                let lon = seq
                    .next_element::<f64>()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let lat = seq
                    .next_element::<f64>()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(Position { lon, lat })
            }
        }

        deserializer.deserialize_seq(PositionVisitor)
    }
}

/// Errors that can occur validating geographic coordinates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordError {
    /// Latitude is non-finite or outside the valid range
    #[error("invalid latitude: {0} (must be a finite number between {MIN_LAT} and {MAX_LAT})")]
    InvalidLatitude(f64),
    /// Longitude is non-finite or outside the valid range
    #[error("invalid longitude: {0} (must be a finite number between {MIN_LON} and {MAX_LON})")]
    InvalidLongitude(f64),
}
