//! Road geometry for an already sequenced route.
//!
//! Display only. A failing lookup degrades that leg to a straight line; the
//! stop order is never touched.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::haversine::StraightLineRouter;
use crate::polyline::Polyline;
use crate::traits::{RoadRouter, Stop, StopStatus};
use crate::types::Position;

/// Geometry between two consecutive points of a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadLeg {
    pub from: Position,
    pub to: Position,
    pub polyline: Polyline,
    /// Meters.
    pub distance_m: f64,
    /// Seconds.
    pub duration_s: f64,
    /// False when the leg is a straight-line fallback.
    pub on_road: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteGeometry {
    pub legs: Vec<RoadLeg>,
}

impl RouteGeometry {
    pub fn distance_km(&self) -> f64 {
        self.legs.iter().map(|leg| leg.distance_m).sum::<f64>() / 1000.0
    }

    pub fn duration_s(&self) -> f64 {
        self.legs.iter().map(|leg| leg.duration_s).sum()
    }

    /// Number of legs that fell back to a straight line.
    pub fn fallback_legs(&self) -> usize {
        self.legs.iter().filter(|leg| !leg.on_road).count()
    }

    /// All legs joined into one polyline, shared endpoints kept once.
    pub fn polyline(&self) -> Polyline {
        let mut points: Vec<Position> = Vec::new();
        for leg in &self.legs {
            let leg_points = leg.polyline.points();
            let skip = usize::from(!points.is_empty() && points.last() == leg_points.first());
            points.extend_from_slice(&leg_points[skip..]);
        }
        Polyline::new(points)
    }
}

/// Looks up road geometry for `start -> stops[0] -> stops[1] -> ...`.
///
/// Legs are requested in parallel. Completed stops are skipped, since the
/// driver has already been there.
pub fn route_geometry<R, S>(router: &R, start: Position, stops: &[S]) -> RouteGeometry
where
    R: RoadRouter + Sync + ?Sized,
    S: Stop,
{
    let waypoints: Vec<Position> = std::iter::once(start)
        .chain(
            stops
                .iter()
                .filter(|stop| stop.status() != StopStatus::Completed)
                .map(|stop| stop.position()),
        )
        .collect();

    let fallback = StraightLineRouter::default();
    let legs: Vec<RoadLeg> = waypoints
        .par_windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            router.route(from, to).unwrap_or_else(|err| {
                warn!(%from, %to, error = %err, "road lookup failed; drawing a straight line");
                fallback.leg(from, to)
            })
        })
        .collect();

    let geometry = RouteGeometry { legs };
    debug!(
        legs = geometry.legs.len(),
        fallback_legs = geometry.fallback_legs(),
        "route geometry ready"
    );
    geometry
}
