//! Great-circle distance primitives
//!
//! All computations assume a spherical Earth of radius
//! [`EARTH_RADIUS_METERS`] and take positions in decimal degrees.

use crate::coord::Position;

/// Mean Earth radius in meters (spherical model).
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two positions, in meters.
///
/// Uses the haversine formula, which stays numerically stable for
/// nearby points.
#[inline]
pub fn haversine_meters(a: Position, b: Position) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    // Clamp against floating-point drift before asin near antipodal points
    2.0 * EARTH_RADIUS_METERS * h.sqrt().min(1.0).asin()
}

/// Great-circle distance from `p` to the segment `a`-`b`, in meters.
///
/// Returns the distance and the closest point on the segment. When the
/// cross-track projection of `p` falls outside the segment, the closest
/// point is the nearer endpoint; otherwise it is the foot of the
/// projection on the great circle through `a` and `b`.
///
/// Valid for segments shorter than half the Earth's circumference, which
/// holds for any real coastline edge.
pub fn point_to_segment_meters(p: Position, a: Position, b: Position) -> (f64, Position) {
    let d_pa = haversine_meters(a, p);
    let d_ab = haversine_meters(a, b);

    // Degenerate edge: both endpoints coincide
    if d_ab == 0.0 {
        return (d_pa, a);
    }

    let delta_ap = d_pa / EARTH_RADIUS_METERS;
    let delta_ab = d_ab / EARTH_RADIUS_METERS;
    let bearing_ap = initial_bearing(a, p);
    let bearing_ab = initial_bearing(a, b);

    // Projection falls behind `a`
    if (bearing_ap - bearing_ab).cos() <= 0.0 {
        return (d_pa, a);
    }

    let cross_track = (delta_ap.sin() * (bearing_ap - bearing_ab).sin()).asin();
    let along_track = (delta_ap.cos() / cross_track.cos()).clamp(-1.0, 1.0).acos();

    // Projection falls beyond `b`
    if along_track >= delta_ab {
        return (haversine_meters(b, p), b);
    }

    let foot = destination(a, bearing_ab, along_track * EARTH_RADIUS_METERS);
    (cross_track.abs() * EARTH_RADIUS_METERS, foot)
}

/// Initial bearing from one position to another, in radians from north.
fn initial_bearing(from: Position, to: Position) -> f64 {
    let lat_from = from.lat.to_radians();
    let lat_to = to.lat.to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let y = d_lon.sin() * lat_to.cos();
    let x = lat_from.cos() * lat_to.sin() - lat_from.sin() * lat_to.cos() * d_lon.cos();
    y.atan2(x)
}

/// Position reached by travelling `distance_meters` from `from` along the
/// given initial bearing (radians).
fn destination(from: Position, bearing: f64, distance_meters: f64) -> Position {
    let delta = distance_meters / EARTH_RADIUS_METERS;
    let lat_from = from.lat.to_radians();
    let lon_from = from.lon.to_radians();

    let lat_to = (lat_from.sin() * delta.cos() + lat_from.cos() * delta.sin() * bearing.cos())
        .clamp(-1.0, 1.0)
        .asin();
    let lon_to = lon_from
        + (bearing.sin() * delta.sin() * lat_from.cos())
            .atan2(delta.cos() - lat_from.sin() * lat_to.sin());

    Position::new(normalize_lon(lon_to.to_degrees()), lat_to.to_degrees())
}

/// Wraps a longitude into [-180, 180).
fn normalize_lon(lon: f64) -> f64 {
    (lon + 540.0).rem_euclid(360.0) - 180.0
}
