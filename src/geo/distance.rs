//! Great-circle distance.
//!
//! Distances use the haversine formula over a mean earth radius of
//! 6371.0 km rather than an ellipsoidal geodesic. At the radii this
//! directory works with (tens of kilometers) the two agree to well under
//! half a percent; the choice is pinned by the tests below. Kilometers are
//! the only unit this crate exposes.

use crate::domain::Coordinate;

/// Mean earth radius in kilometers.
pub const MEAN_EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two coordinates, in kilometers.
pub fn haversine_km(from: &Coordinate, to: &Coordinate) -> f64 {
    let d_lat = (to.lat() - from.lat()).to_radians();
    let d_lon = (to.lon() - from.lon()).to_radians();
    let a = ((d_lat / 2.0).sin().powi(2)
        + from.lat().to_radians().cos() * to.lat().to_radians().cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    MEAN_EARTH_RADIUS_KM * c
}
