//! Great-circle distance and the straight-line road fallback.
//!
//! Every sequencing decision is made on Haversine distance. The
//! [`StraightLineRouter`] reuses it to stand in for the road service when
//! none is configured.

use crate::error::Result;
use crate::overlay::RoadLeg;
use crate::polyline::Polyline;
use crate::traits::RoadRouter;
use crate::types::Position;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Average driving speed assumption for duration estimates.
const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Haversine distance between two points in kilometers.
///
/// Symmetric, non-negative and defined for every finite pair.
pub fn distance_km(from: Position, to: Position) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // rounding can push `a` a hair outside [0, 1]
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Road router that draws a straight line and estimates duration.
///
/// Always succeeds. Useful when OSRM is unavailable.
#[derive(Debug, Clone)]
pub struct StraightLineRouter {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
}

impl Default for StraightLineRouter {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl StraightLineRouter {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    /// Convert distance in km to travel time in seconds.
    fn km_to_seconds(&self, km: f64) -> f64 {
        if self.speed_kmh <= 0.0 {
            return 0.0;
        }
        (km / self.speed_kmh * 3600.0).round()
    }

    /// Straight leg between two points, never failing.
    pub fn leg(&self, from: Position, to: Position) -> RoadLeg {
        let km = distance_km(from, to);
        RoadLeg {
            from,
            to,
            polyline: Polyline::new(vec![from, to]),
            distance_m: km * 1000.0,
            duration_s: self.km_to_seconds(km),
            on_road: false,
        }
    }
}

impl RoadRouter for StraightLineRouter {
    fn route(&self, from: Position, to: Position) -> Result<RoadLeg> {
        Ok(self.leg(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let p = Position::new(12.9716, 77.5946);
        assert_eq!(distance_km(p, p), 0.0);
    }

    #[test]
    fn test_depot_to_whitefield() {
        // central Bangalore to Whitefield, ~16.8 km as the crow flies
        let dist = distance_km(Position::new(12.9716, 77.5946), Position::new(12.9698, 77.7500));
        assert!((dist - 16.84).abs() < 0.05, "got {}", dist);
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let dist = distance_km(Position::new(0.0, 0.0), Position::new(0.0, 1.0));
        assert!((dist - 111.195).abs() < 0.01, "got {}", dist);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = Position::new(12.9647, 77.6082);
        let b = Position::new(12.9116, 77.6416);
        let ab = distance_km(a, b);
        let ba = distance_km(b, a);
        assert!((ab - ba).abs() <= 1e-9 * ab.max(1.0));
    }

    #[test]
    fn test_antipodal_points_are_finite() {
        let dist = distance_km(Position::new(90.0, 0.0), Position::new(-90.0, 0.0));
        assert!(dist.is_finite());
        assert!((dist - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_input_does_not_panic() {
        let dist = distance_km(Position::new(1000.0, -720.5), Position::new(-95.0, 400.0));
        assert!(dist.is_finite());
        assert!(dist >= 0.0);
    }

    #[test]
    fn test_straight_line_leg() {
        let router = StraightLineRouter::new(40.0);
        let from = Position::new(0.0, 0.0);
        let to = Position::new(0.0, 1.0);
        let leg = router.route(from, to).unwrap();

        assert!(!leg.on_road);
        assert_eq!(leg.polyline.points(), &[from, to][..]);
        // ~111 km at 40 km/h is ~2.78 h
        assert!((leg.duration_s - 10007.0).abs() < 2.0, "got {}", leg.duration_s);
    }

    #[test]
    fn test_city_leg_duration_scales_with_speed() {
        // depot to HSR Layout, ~8.4 km
        let from = Position::new(12.9716, 77.5946);
        let to = Position::new(12.9116, 77.6416);
        let scooter = StraightLineRouter::new(20.0).leg(from, to);
        let van = StraightLineRouter::new(40.0).leg(from, to);

        assert!((scooter.distance_m - 8393.7).abs() < 1.0, "got {}", scooter.distance_m);
        assert_eq!(scooter.duration_s, 1511.0);
        assert_eq!(van.duration_s, 755.0);
        assert_eq!(StraightLineRouter::new(0.0).leg(from, to).duration_s, 0.0);
    }
}
