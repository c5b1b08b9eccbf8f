//! Station name resolution.
//!
//! Maps abbreviated, free-text station fragments typed in chat ("dev",
//! "30th", "Bryn Mawr") onto the canonical names the SEPTA API accepts.
//! Resolution is a linear scan over an ordered rule table; see
//! [`StationCatalog`].

mod alias;
mod catalog;

pub use alias::{StationAlias, normalize};
pub use catalog::{FALLBACK_STATION, StationCatalog, resolve};
