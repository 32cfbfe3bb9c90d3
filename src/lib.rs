//! route-sequencer
//!
//! Orders delivery stops to keep straight-line travel short while respecting
//! their pending/current/completed status. Road routing and geocoding are
//! thin, replaceable collaborators that never influence the order.

pub mod config;
pub mod engine;
pub mod error;
pub mod geocoding;
pub mod graph;
pub mod haversine;
pub mod journey;
pub mod osrm;
pub mod overlay;
pub mod partition;
pub mod polyline;
pub mod sequencer;
pub mod spanning_tree;
pub mod traits;
pub mod types;

pub use engine::{EngineOptions, RouteEngine, optimize_route};
pub use error::{Error, Result};
pub use traits::{Stop, StopStatus};
pub use types::{DeliveryStop, Position};
