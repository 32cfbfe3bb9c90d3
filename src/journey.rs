//! Host-side delivery lifecycle on top of the engine.
//!
//! The engine never changes a status. [`Journey`] does: it promotes the next
//! stop to `Current` when a delivery is confirmed, and re-sequences the
//! route when a stop is added mid-journey. After every operation at most one
//! stop is `Current`, and it is the first non-completed stop whenever the
//! route was just optimized.

use tracing::{debug, info};

use crate::engine::{RouteEngine, remaining_distance_km};
use crate::error::{Error, Result};
use crate::overlay::{RouteGeometry, route_geometry};
use crate::traits::{RoadRouter, Stop, StopStatus};
use crate::types::Position;

#[derive(Debug, Clone)]
pub struct Journey<S> {
    engine: RouteEngine,
    position: Option<Position>,
    stops: Vec<S>,
}

impl<S> Journey<S>
where
    S: Stop + Clone,
{
    /// Optimizes `stops` from `position` and marks the first stop to visit
    /// as current.
    pub fn start(engine: RouteEngine, stops: &[S], position: Option<Position>) -> Self {
        let mut journey = Self {
            engine,
            position,
            stops: Vec::new(),
        };
        journey.stops = journey.engine.optimize_route(stops, position);
        journey.normalize_current();
        info!(stops = journey.stops.len(), "journey started");
        journey
    }

    pub fn stops(&self) -> &[S] {
        &self.stops
    }

    pub fn into_stops(self) -> Vec<S> {
        self.stops
    }

    pub fn current(&self) -> Option<&S> {
        self.stops
            .iter()
            .find(|stop| stop.status() == StopStatus::Current)
    }

    /// Last known driver position.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Records a new driver position. Distances and geometry are measured
    /// from it right away; the order is only re-sequenced by
    /// [`Journey::reoptimize`] or [`Journey::add_stop`].
    pub fn update_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    /// Where the driver is, or the engine's fallback when unknown.
    pub fn origin(&self) -> Position {
        self.position.unwrap_or(self.engine.options().fallback_position)
    }

    /// Straight-line km from the driver through every stop not yet delivered.
    pub fn remaining_distance_km(&self) -> f64 {
        remaining_distance_km(self.origin(), &self.stops)
    }

    /// Road geometry from the driver through the undelivered stops.
    pub fn geometry<R>(&self, router: &R) -> RouteGeometry
    where
        R: RoadRouter + Sync + ?Sized,
    {
        route_geometry(router, self.origin(), &self.stops)
    }

    /// Stops not yet delivered, current included.
    pub fn remaining(&self) -> usize {
        self.stops
            .iter()
            .filter(|stop| stop.status() != StopStatus::Completed)
            .count()
    }

    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }

    /// Confirms delivery of `id`.
    ///
    /// If no stop is current afterwards, the first pending stop in route
    /// order is promoted. Completing a completed stop is a no-op.
    pub fn complete(&mut self, id: &S::Id) -> Result<&S> {
        let index = self.index_of(id)?;

        match self.stops[index].status() {
            StopStatus::Completed => {}
            StopStatus::Current | StopStatus::Pending => {
                self.stops[index].set_status(StopStatus::Completed);
                self.promote_next_if_idle();
                debug!(?id, remaining = self.remaining(), "delivery completed");
            }
        }

        Ok(&self.stops[index])
    }

    /// Adds a new pending stop and re-sequences the whole route.
    ///
    /// Completed stops keep their order, the current stop stays current.
    pub fn add_stop(&mut self, mut stop: S) -> Result<()> {
        if self.stops.iter().any(|existing| existing.id() == stop.id()) {
            return Err(Error::DuplicateStop(format!("{:?}", stop.id())));
        }

        stop.set_status(StopStatus::Pending);
        self.stops.push(stop);
        self.reoptimize();
        Ok(())
    }

    /// Re-sequences the remaining stops from the current state.
    pub fn reoptimize(&mut self) {
        self.stops = self.engine.optimize_route(&self.stops, self.position);
        self.normalize_current();
    }

    pub fn reset(&mut self) {
        self.stops.clear();
    }

    fn index_of(&self, id: &S::Id) -> Result<usize> {
        self.stops
            .iter()
            .position(|stop| stop.id() == id)
            .ok_or_else(|| Error::UnknownStop(format!("{id:?}")))
    }

    /// Keeps the first current stop, demotes any other, and promotes the
    /// first pending stop if none is current.
    fn normalize_current(&mut self) {
        let mut seen_current = false;
        for stop in &mut self.stops {
            if stop.status() == StopStatus::Current {
                if seen_current {
                    stop.set_status(StopStatus::Pending);
                }
                seen_current = true;
            }
        }
        self.promote_next_if_idle();
    }

    fn promote_next_if_idle(&mut self) {
        if self.current().is_some() {
            return;
        }
        if let Some(next) = self
            .stops
            .iter_mut()
            .find(|stop| stop.status() == StopStatus::Pending)
        {
            next.set_status(StopStatus::Current);
        }
    }
}
