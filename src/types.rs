//! Plain data types shared across the crate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::traits::{Stop, StopStatus};

/// A latitude/longitude pair in degrees.
///
/// Range is not validated; any finite pair is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for Position {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

/// Concrete stop record used by the CLI host and tests.
///
/// Name, address and phone are display attributes; the engine ignores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryStop {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "location")]
    pub position: Position,
    #[serde(default)]
    pub status: StopStatus,
}

impl DeliveryStop {
    pub fn new(id: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            address: String::new(),
            phone: String::new(),
            position,
            status: StopStatus::Pending,
        }
    }

    pub fn with_status(mut self, status: StopStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }
}

impl Stop for DeliveryStop {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn position(&self) -> Position {
        self.position
    }

    fn status(&self) -> StopStatus {
        self.status
    }

    fn set_status(&mut self, status: StopStatus) {
        self.status = status;
    }
}
