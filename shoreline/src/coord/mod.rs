//! Geographic coordinate module
//!
//! Provides the [`Position`] type used for coastline boundary vertices and
//! validation for caller-supplied query coordinates. Positions are stored
//! longitude-first (the GeoJSON convention); query coordinates arrive
//! latitude-first, matching how callers read them off a device location.

mod types;

pub use types::{CoordError, Position, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Validates a query point supplied as latitude/longitude in degrees.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees (-90.0 to 90.0)
/// * `lon` - Longitude in degrees (-180.0 to 180.0)
///
/// # Errors
///
/// Returns a [`CoordError`] if either value is non-finite or outside its
/// valid range. NaN fails the range check and is reported through the same
/// variants.
#[inline]
pub fn validate_query_point(lat: f64, lon: f64) -> Result<(), CoordError> {
    if !lat.is_finite() || !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(CoordError::InvalidLatitude(lat));
    }
    if !lon.is_finite() || !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(CoordError::InvalidLongitude(lon));
    }
    Ok(())
}
