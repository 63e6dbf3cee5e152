//! Great-circle distance between a worker and a posting venue.

use super::domain::GeoPoint;

/// Mean Earth radius in kilometres, as used by the Haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two points, in kilometres.
///
/// Inputs are [`GeoPoint`]s, so both components are already known to be
/// finite; the result is always a finite, non-negative number.
pub fn haversine_km(origin: GeoPoint, target: GeoPoint) -> f64 {
    let origin_lat = origin.latitude.to_radians();
    let target_lat = target.latitude.to_radians();
    let delta_lat = (target.latitude - origin.latitude).to_radians();
    let delta_lon = (target.longitude - origin.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + origin_lat.cos() * target_lat.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
