//! Crate error type.
//!
//! Only the collaborators (road routing, geocoding, journey bookkeeping and the
//! CLI host) can fail. The sequencing engine itself is total.

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("no road route between {from} and {to}")]
    NoRoute { from: String, to: String },
    #[error("address not found: {0}")]
    AddressNotFound(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("unknown stop: {0}")]
    UnknownStop(String),
    #[error("stop already on the route: {0}")]
    DuplicateStop(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
