//! Configuration management.

use crate::engine::EngineOptions;
use crate::error::{Error, Result};
use crate::geocoding::NominatimConfig;
use crate::osrm::OsrmConfig;
use crate::sequencer::SequenceStrategy;
use crate::types::Position;

const ENV_PREFIX: &str = "ROUTE_SEQUENCER_";

/// Settings for the host: engine options plus the external services.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannerConfig {
    pub engine: EngineOptions,
    /// Road routing is optional; without it legs are drawn as straight lines.
    pub osrm: Option<OsrmConfig>,
    pub nominatim: NominatimConfig,
}

impl PlannerConfig {
    /// Load configuration from `ROUTE_SEQUENCER_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(format!("{ENV_PREFIX}{key}")).ok())
    }

    /// Same as [`PlannerConfig::from_env`] with a custom source. Keys are
    /// given without the prefix.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(strategy) = lookup("STRATEGY") {
            config.engine.strategy = strategy
                .parse::<SequenceStrategy>()
                .map_err(Error::config)?;
        }

        match (lookup("FALLBACK_LAT"), lookup("FALLBACK_LNG")) {
            (Some(lat), Some(lng)) => {
                config.engine.fallback_position = Position::new(
                    parse_f64("FALLBACK_LAT", &lat)?,
                    parse_f64("FALLBACK_LNG", &lng)?,
                );
            }
            (None, None) => {}
            _ => {
                return Err(Error::config(
                    "FALLBACK_LAT and FALLBACK_LNG must be set together",
                ));
            }
        }

        let timeout = lookup("HTTP_TIMEOUT_SECS")
            .map(|value| {
                value.parse::<u64>().map_err(|_| {
                    Error::config(format!("HTTP_TIMEOUT_SECS must be an integer, got `{value}`"))
                })
            })
            .transpose()?;

        if let Some(base_url) = lookup("OSRM_URL") {
            let mut osrm = OsrmConfig {
                base_url,
                ..OsrmConfig::default()
            };
            if let Some(profile) = lookup("OSRM_PROFILE") {
                osrm.profile = profile;
            }
            if let Some(timeout) = timeout {
                osrm.timeout_secs = timeout;
            }
            config.osrm = Some(osrm);
        }

        if let Some(base_url) = lookup("NOMINATIM_URL") {
            config.nominatim.base_url = base_url;
        }
        if let Some(codes) = lookup("NOMINATIM_COUNTRY_CODES") {
            config.nominatim.country_codes = Some(codes);
        }
        if let Some(timeout) = timeout {
            config.nominatim.timeout_secs = timeout;
        }

        Ok(config)
    }
}

fn parse_f64(key: &str, value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::config(format!("{key} must be a finite number, got `{value}`")))
}
