//! Geocoordinates and distance math.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Earth radius in meters (IUGG).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Average walking speed in meters per second, used for walk-time estimates.
pub const WALK_METERS_PER_SEC: f64 = 1.4;

/// A WGS84 coordinate pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in meters (haversine formula).
    pub fn distance_m(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlng = (other.lng - self.lng).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Estimated walking time in whole seconds to cover `distance_m` meters.
    pub fn walk_secs(distance_m: f64) -> u32 {
        (distance_m / WALK_METERS_PER_SEC).round() as u32
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let p = GeoPoint::new(40.785091, -73.968285);
        assert_eq!(p.distance_m(&p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(40.785091, -73.968285); // Central Park
        let b = GeoPoint::new(40.689247, -74.044502); // Liberty Island
        let ab = a.distance_m(&b);
        let ba = b.distance_m(&a);
        assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn known_distance_within_tolerance() {
        // Central Park to Liberty Island is roughly 12.5 km.
        let a = GeoPoint::new(40.785091, -73.968285);
        let b = GeoPoint::new(40.689247, -74.044502);
        let d = a.distance_m(&b);
        assert!(d > 12_000.0 && d < 13_000.0, "got {d}");
    }

    #[test]
    fn walk_secs_matches_walking_speed() {
        // 840 m at 1.4 m/s is a 10 minute walk.
        assert_eq!(GeoPoint::walk_secs(840.0), 600);
        assert_eq!(GeoPoint::walk_secs(0.0), 0);
    }
}
