//! Great-circle distance between geographic coordinates.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance between two coordinates in kilometres.
///
/// Symmetric, zero when both coordinates are equal, and finite and
/// non-negative for any finite input. Used both as the edge cost and the
/// heuristic lower bound during pathfinding, which keeps the heuristic
/// admissible as long as no edge is shorter than the geodesic between its
/// endpoints.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();
    let h = (dlat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let balsas = Coordinate::new(-7.5242, -46.0322);
        let sao_luis = Coordinate::new(-2.5307, -44.3068);
        assert_eq!(haversine_km(balsas, sao_luis), haversine_km(sao_luis, balsas));
    }

    #[test]
    fn distance_is_zero_at_identity() {
        let point = Coordinate::new(-7.5242, -46.0322);
        assert_eq!(haversine_km(point, point), 0.0);
    }

    #[test]
    fn one_degree_of_latitude_matches_arc_length() {
        let equator = Coordinate::new(0.0, 0.0);
        let one_north = Coordinate::new(1.0, 0.0);
        let expected = EARTH_RADIUS_KM * 1f64.to_radians();
        assert!((haversine_km(equator, one_north) - expected).abs() < 1e-9);
    }

    #[test]
    fn antimeridian_crossing_stays_finite() {
        let west = Coordinate::new(0.0, -179.5);
        let east = Coordinate::new(0.0, 179.5);
        let d = haversine_km(west, east);
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }
}
