//! Domain types for the regional rail lookup.
//!
//! Station names are only produced by the station catalog and arrival
//! records only by the SEPTA client, so code receiving them can trust
//! their shape.

mod arrival;
mod station;

pub use arrival::{ArrivalRecord, Delay};
pub use station::StationName;
