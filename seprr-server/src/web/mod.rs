//! Web layer for the regional rail slash command.
//!
//! Provides the Slack webhook endpoint and a health check.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{LookupError, NUM_TRAINS, answer, create_router, lookup};
pub use state::AppState;
