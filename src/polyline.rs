//! Polyline representation for road geometries.
//!
//! Points are kept decoded. OSRM is asked for GeoJSON so no encoded-polyline
//! codec is needed at the boundary.

use serde::{Deserialize, Serialize};

use crate::haversine::distance_km;
use crate::types::Position;

/// A road geometry as an ordered list of positions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<Position>,
}

impl Polyline {
    pub fn new(points: Vec<Position>) -> Self {
        Self { points }
    }

    /// Builds a polyline from GeoJSON `[lng, lat]` pairs.
    pub fn from_lng_lat(coordinates: &[[f64; 2]]) -> Self {
        Self {
            points: coordinates
                .iter()
                .map(|[lng, lat]| Position::new(*lat, *lng))
                .collect(),
        }
    }

    pub fn points(&self) -> &[Position] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Position> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of great-circle lengths of all segments, in km.
    pub fn length_km(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| distance_km(pair[0], pair[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_points() {
        let points = vec![
            Position::new(38.5, -120.2),
            Position::new(40.7, -120.95),
            Position::new(43.252, -126.453),
        ];
        let polyline = Polyline::new(points.clone());
        assert_eq!(polyline.points(), &points[..]);
        assert_eq!(polyline.len(), 3);
    }

    #[test]
    fn test_from_lng_lat_swaps_axes() {
        let polyline = Polyline::from_lng_lat(&[[77.5946, 12.9716], [77.6082, 12.9647]]);
        assert_eq!(
            polyline.into_points(),
            vec![Position::new(12.9716, 77.5946), Position::new(12.9647, 77.6082)]
        );
    }

    #[test]
    fn test_empty_polyline() {
        let polyline = Polyline::default();
        assert!(polyline.is_empty());
        assert_eq!(polyline.length_km(), 0.0);
    }

    #[test]
    fn test_length_km_sums_segments() {
        let polyline = Polyline::new(vec![
            Position::new(0.0, 0.0),
            Position::new(0.0, 1.0),
            Position::new(0.0, 2.0),
        ]);
        let direct = distance_km(Position::new(0.0, 0.0), Position::new(0.0, 2.0));
        assert!((polyline.length_km() - direct).abs() < 1e-6);
    }

    #[test]
    fn test_serializes_as_point_list() {
        let polyline = Polyline::new(vec![Position::new(1.0, 2.0)]);
        let json = serde_json::to_string(&polyline).unwrap();
        assert_eq!(json, r#"[{"lat":1.0,"lng":2.0}]"#);
    }
}
