//! OSRM HTTP adapter for road geometry between two points.

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::overlay::RoadLeg;
use crate::polyline::Polyline;
use crate::traits::RoadRouter;
use crate::types::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "car".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// `route` service URL for a single leg. OSRM wants `lng,lat`.
    pub fn route_url(&self, from: Position, to: Position) -> String {
        format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=full&geometries=geojson",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            from.lng,
            from.lat,
            to.lng,
            to.lat
        )
    }
}

impl RoadRouter for OsrmClient {
    fn route(&self, from: Position, to: Position) -> Result<RoadLeg> {
        let url = self.route_url(from, to);
        debug!(%url, "requesting OSRM route");

        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmRouteResponse>())?;

        leg_from_response(from, to, body)
    }
}

fn leg_from_response(from: Position, to: Position, body: OsrmRouteResponse) -> Result<RoadLeg> {
    if body.code != "Ok" {
        return Err(Error::NoRoute {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    let route = body
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| Error::NoRoute {
            from: from.to_string(),
            to: to.to_string(),
        })?;

    if route.geometry.coordinates.is_empty() {
        return Err(Error::invalid_response("OSRM route without geometry"));
    }

    Ok(RoadLeg {
        from,
        to,
        polyline: Polyline::from_lng_lat(&route.geometry.coordinates),
        distance_m: route.distance,
        duration_s: route.duration,
        on_road: true,
    })
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
    distance: f64,
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}
