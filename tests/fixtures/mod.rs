//! Test fixtures for route-sequencer.
//!
//! Provides realistic test data including:
//! - Bangalore delivery addresses with real coordinates
//! - Builders for delivery stops

#![allow(dead_code)]

pub mod bangalore_stops;

pub use bangalore_stops::*;
