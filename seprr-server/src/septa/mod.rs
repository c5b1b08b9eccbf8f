//! SEPTA NextToArrive client.
//!
//! This module provides an HTTP client for SEPTA's public "hackathon" API,
//! which lists the next trains between two Regional Rail stations.
//!
//! Key characteristics of NextToArrive:
//! - Stations are addressed by display name in the URL path
//!   (`/NextToArrive/Devon/30th Street Station/3`)
//! - Times are strings like `" 1:22PM"` (local time, leading space kept)
//! - Bad station names produce `{"error": "..."}` rather than an HTTP error

mod client;
mod convert;
mod error;
mod mock;
mod source;
mod types;

pub use client::{SeptaClient, SeptaConfig, parse_next_to_arrive};
pub use convert::{convert_train, convert_trains};
pub use error::SeptaError;
pub use mock::{MockRequest, MockSeptaClient};
pub use source::ArrivalSource;
pub use types::{NextToArriveResponse, NextToArriveTrain};
