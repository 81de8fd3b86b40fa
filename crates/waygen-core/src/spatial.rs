//! Spherical-earth geodesy used to turn relative legs into positions.

use crate::models::GeoPoint;

/// Sphere radius used for projection (WGS84 equatorial radius).
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Project `origin` along `bearing_deg` (0 = north, clockwise) by `distance_m`.
///
/// Direct solution on a sphere. A zero distance yields the origin without
/// special-casing. Longitude is not wrapped at the antimeridian. Legs ending
/// on a pole stay finite.
pub fn project(origin: GeoPoint, bearing_deg: f64, distance_m: f64) -> GeoPoint {
    let lat1 = origin.lat.to_radians();
    let lon1 = origin.lon.to_radians();
    let bearing = bearing_deg.to_radians();
    let angular_distance = distance_m / EARTH_RADIUS_M;

    let sin_lat1 = lat1.sin();
    let cos_lat1 = lat1.cos();
    let sin_ad = angular_distance.sin();
    let cos_ad = angular_distance.cos();

    let sin_lat2 = sin_lat1 * cos_ad + cos_lat1 * sin_ad * bearing.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();

    let y = bearing.sin() * sin_ad * cos_lat1;
    let x = cos_ad - sin_lat1 * lat2.sin();
    let lon2 = lon1 + y.atan2(x);

    GeoPoint::new(lat2.to_degrees(), lon2.to_degrees())
}

/// Fold any finite bearing into [0, 360).
pub fn normalize_bearing(bearing_deg: f64) -> f64 {
    let normalized = bearing_deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Great-circle distance between two points in meters (Haversine formula).
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lon - a.lon).to_radians();
    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}
