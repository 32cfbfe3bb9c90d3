//! Address lookup through Nominatim.
//!
//! Geocoding never feeds partial data into the engine: callers resolve to a
//! concrete [`Position`] first, using [`geocode_or`] when a fallback is
//! acceptable.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::traits::Geocoder;
use crate::types::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct NominatimConfig {
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying user agent.
    pub user_agent: String,
    /// Optional ISO 3166-1 alpha-2 codes, comma separated (e.g. "in").
    pub country_codes: Option<String>,
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: concat!("route-sequencer/", env!("CARGO_PKG_VERSION")).to_string(),
            country_codes: None,
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    pub fn new(config: NominatimConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }

    fn query<'a>(&'a self, address: &'a str) -> Vec<(&'static str, &'a str)> {
        let mut query = vec![("q", address), ("format", "json"), ("limit", "1")];
        if let Some(codes) = &self.config.country_codes {
            query.push(("countrycodes", codes.as_str()));
        }
        query
    }
}

impl Geocoder for NominatimClient {
    fn geocode(&self, address: &str) -> Result<Position> {
        debug!(address, "geocoding address");
        let results = self
            .client
            .get(self.search_url())
            .query(&self.query(address))
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Vec<NominatimResult>>())?;

        first_position(address, &results)
    }
}

#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
}

fn first_position(address: &str, results: &[NominatimResult]) -> Result<Position> {
    let result = results
        .first()
        .ok_or_else(|| Error::AddressNotFound(address.to_string()))?;

    let lat = result
        .lat
        .parse::<f64>()
        .map_err(|_| Error::invalid_response(format!("invalid latitude `{}`", result.lat)))?;
    let lng = result
        .lon
        .parse::<f64>()
        .map_err(|_| Error::invalid_response(format!("invalid longitude `{}`", result.lon)))?;

    Ok(Position::new(lat, lng))
}

/// Geocodes `address`, returning `fallback` on any failure.
pub fn geocode_or<G>(geocoder: &G, address: &str, fallback: Position) -> Position
where
    G: Geocoder + ?Sized,
{
    match geocoder.geocode(address) {
        Ok(position) => position,
        Err(err) => {
            warn!(address, error = %err, %fallback, "geocoding failed; using fallback position");
            fallback
        }
    }
}
