//! Core domain traits for the route sequencer.
//!
//! These are intentionally minimal. Hosts implement [`Stop`] for their own
//! records, and plug external services in through [`RoadRouter`] and
//! [`Geocoder`].

use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::overlay::RoadLeg;
use crate::types::Position;

/// Unique identifier for stops.
pub trait Id: Clone + Eq + Hash + std::fmt::Debug {}

impl<T> Id for T where T: Clone + Eq + Hash + std::fmt::Debug {}

/// Lifecycle state of a stop.
///
/// `Pending -> Current -> Completed`. Transitions are owned by the host (see
/// [`crate::journey::Journey`]); the engine only reads the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StopStatus {
    #[default]
    Pending,
    Current,
    Completed,
}

/// A delivery destination to be sequenced.
pub trait Stop {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Location of the stop.
    fn position(&self) -> Position;

    fn status(&self) -> StopStatus;

    /// Used by the journey tracker only; the engine never calls it.
    fn set_status(&mut self, status: StopStatus);
}

/// Road-network routing lookup, used for map display only.
///
/// Implementations may fail freely: callers fall back to straight lines and
/// the visiting order is never affected.
pub trait RoadRouter {
    fn route(&self, from: Position, to: Position) -> Result<RoadLeg>;
}

/// Address to coordinate lookup.
pub trait Geocoder {
    fn geocode(&self, address: &str) -> Result<Position>;
}
