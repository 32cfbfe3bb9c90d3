//! Status-based split of a stop set.

use tracing::warn;

use crate::traits::{Stop, StopStatus};

/// Stops grouped by status, each group in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<S> {
    pub completed: Vec<S>,
    pub current: Option<S>,
    pub pending: Vec<S>,
}

impl<S> Partition<S> {
    /// Number of stops still to be visited, current included.
    pub fn remaining(&self) -> usize {
        self.pending.len() + usize::from(self.current.is_some())
    }
}

/// Splits `stops` into completed, current and pending.
///
/// Only the first `Current` stop is kept as current. Any further `Current`
/// stops are treated as pending at their input position.
pub fn partition<S>(stops: &[S]) -> Partition<S>
where
    S: Stop + Clone,
{
    let mut completed = Vec::new();
    let mut current: Option<S> = None;
    let mut pending = Vec::new();
    let mut demoted = 0usize;

    for stop in stops {
        match stop.status() {
            StopStatus::Completed => completed.push(stop.clone()),
            StopStatus::Current if current.is_none() => current = Some(stop.clone()),
            StopStatus::Current => {
                demoted += 1;
                pending.push(stop.clone());
            }
            StopStatus::Pending => pending.push(stop.clone()),
        }
    }

    if demoted > 0 {
        warn!(
            demoted,
            "multiple current stops in input; keeping the first, sequencing the rest as pending"
        );
    }

    Partition {
        completed,
        current,
        pending,
    }
}
