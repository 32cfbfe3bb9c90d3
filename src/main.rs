//! route-sequencer CLI
//!
//! Reads a JSON array of stops, prints the optimized route as JSON.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use route_sequencer::config::PlannerConfig;
use route_sequencer::engine::{RouteEngine, remaining_distance_km};
use route_sequencer::haversine::StraightLineRouter;
use route_sequencer::osrm::OsrmClient;
use route_sequencer::overlay::{RouteGeometry, route_geometry};
use route_sequencer::sequencer::SequenceStrategy;
use route_sequencer::traits::RoadRouter;
use route_sequencer::{DeliveryStop, Position, Result};

#[derive(Debug, Parser)]
#[command(name = "route-sequencer", version, about = "Order delivery stops for a short route")]
struct Cli {
    /// JSON file with an array of stops, or `-` for stdin.
    #[arg(long)]
    stops: PathBuf,

    /// Driver latitude; defaults to the configured fallback.
    #[arg(long, requires = "start_lng", allow_hyphen_values = true)]
    start_lat: Option<f64>,

    /// Driver longitude.
    #[arg(long, requires = "start_lat", allow_hyphen_values = true)]
    start_lng: Option<f64>,

    /// `nearest` or `spanning-tree`; overrides ROUTE_SEQUENCER_STRATEGY.
    #[arg(long)]
    strategy: Option<SequenceStrategy>,

    /// Attach road geometry (OSRM when ROUTE_SEQUENCER_OSRM_URL is set,
    /// straight lines otherwise).
    #[arg(long)]
    road_geometry: bool,

    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Serialize)]
struct Output {
    strategy: SequenceStrategy,
    start: Position,
    distance_km: f64,
    stops: Vec<DeliveryStop>,
    #[serde(skip_serializing_if = "Option::is_none")]
    geometry: Option<RouteGeometry>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = PlannerConfig::from_env()?;
    if let Some(strategy) = cli.strategy {
        config.engine.strategy = strategy;
    }

    let stops = read_stops(&cli.stops)?;
    let output = plan(&cli, &config, &stops)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if cli.pretty {
        serde_json::to_writer_pretty(&mut handle, &output)?;
    } else {
        serde_json::to_writer(&mut handle, &output)?;
    }
    writeln!(handle)?;
    Ok(())
}

/// Orders `stops` and measures what is left to drive.
fn plan(cli: &Cli, config: &PlannerConfig, stops: &[DeliveryStop]) -> Result<Output> {
    let start = match (cli.start_lat, cli.start_lng) {
        (Some(lat), Some(lng)) => Some(Position::new(lat, lng)),
        _ => None,
    };

    let engine = RouteEngine::new(config.engine);
    let route = engine.optimize_route(stops, start);
    let origin = start.unwrap_or(config.engine.fallback_position);
    let distance_km = remaining_distance_km(origin, &route);
    info!(stops = route.len(), distance_km, strategy = %config.engine.strategy, "route optimized");

    let geometry = if cli.road_geometry {
        let router: Box<dyn RoadRouter + Sync> = match config.osrm.clone() {
            Some(osrm) => Box::new(OsrmClient::new(osrm)?),
            None => Box::new(StraightLineRouter::default()),
        };
        Some(route_geometry(router.as_ref(), origin, &route))
    } else {
        None
    };

    Ok(Output {
        strategy: config.engine.strategy,
        start: origin,
        distance_km,
        stops: route,
        geometry,
    })
}

fn read_stops(path: &Path) -> Result<Vec<DeliveryStop>> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&raw)?)
}
