//! Route engine façade.
//!
//! `partition -> build_graph -> sequence -> reassemble`. Pure and
//! synchronous: inputs are cloned, never mutated, and no state is kept
//! between calls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::build_graph;
use crate::haversine::distance_km;
use crate::partition::partition;
use crate::sequencer::{SequenceStrategy, sequence};
use crate::traits::{Stop, StopStatus};
use crate::types::Position;

/// Start used when the caller has no position and no stop is current
/// (central Bangalore).
pub const DEFAULT_FALLBACK_POSITION: Position = Position::new(12.9716, 77.5946);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineOptions {
    pub strategy: SequenceStrategy,
    /// Starting point when none is supplied and no stop is current.
    pub fallback_position: Position,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            strategy: SequenceStrategy::default(),
            fallback_position: DEFAULT_FALLBACK_POSITION,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteEngine {
    options: EngineOptions,
}

impl RouteEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Orders `stops` for delivery.
    ///
    /// Returns completed stops in input order, then the current stop (if
    /// any), then the pending stops sequenced from the current stop's
    /// position, or from `starting_position` when nothing is current.
    /// Statuses are returned unchanged.
    pub fn optimize_route<S>(&self, stops: &[S], starting_position: Option<Position>) -> Vec<S>
    where
        S: Stop + Clone,
    {
        if stops.is_empty() {
            return Vec::new();
        }

        let parts = partition(stops);
        let mut route = Vec::with_capacity(stops.len());
        route.extend(parts.completed);

        let origin = match &parts.current {
            Some(current) => current.position(),
            None => starting_position.unwrap_or(self.options.fallback_position),
        };
        debug!(
            total = stops.len(),
            completed = route.len(),
            current = parts.current.is_some(),
            pending = parts.pending.len(),
            strategy = %self.options.strategy,
            origin = %origin,
            "optimizing route"
        );

        if let Some(current) = parts.current {
            route.push(current);
        }

        match parts.pending.len() {
            0 => {}
            1 => route.extend(parts.pending),
            _ => {
                let positions: Vec<Position> =
                    parts.pending.iter().map(|stop| stop.position()).collect();
                let graph = build_graph(origin, &positions);
                route.extend(sequence(&graph, &parts.pending, self.options.strategy));
            }
        }

        route
    }
}

/// [`RouteEngine::optimize_route`] with default options.
pub fn optimize_route<S>(stops: &[S], starting_position: Option<Position>) -> Vec<S>
where
    S: Stop + Clone,
{
    RouteEngine::default().optimize_route(stops, starting_position)
}

/// Straight-line length of `stops` visited in order from `start`, in km.
pub fn route_distance_km<S: Stop>(start: Position, stops: &[S]) -> f64 {
    let mut total = 0.0;
    let mut previous = start;
    for stop in stops {
        let position = stop.position();
        total += distance_km(previous, position);
        previous = position;
    }
    total
}

/// Straight-line length still to drive from `start` through the stops that
/// are not completed, in km.
pub fn remaining_distance_km<S: Stop>(start: Position, stops: &[S]) -> f64 {
    stops
        .iter()
        .filter(|stop| stop.status() != StopStatus::Completed)
        .fold((0.0, start), |(total, previous), stop| {
            let position = stop.position();
            (total + distance_km(previous, position), position)
        })
        .0
}
