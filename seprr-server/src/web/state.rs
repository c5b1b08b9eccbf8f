//! Application state for the web layer.

use std::sync::Arc;

use crate::septa::ArrivalSource;
use crate::stations::StationCatalog;

/// Shared application state.
///
/// Read-only after startup; requests never mutate it.
#[derive(Clone)]
pub struct AppState {
    /// Where upcoming trains come from
    pub arrivals: Arc<ArrivalSource>,

    /// Station rules used to resolve typed fragments
    pub catalog: &'static StationCatalog,
}

impl AppState {
    /// Create app state using the SEPTA station catalog.
    pub fn new(arrivals: impl Into<ArrivalSource>) -> Self {
        Self {
            arrivals: Arc::new(arrivals.into()),
            catalog: StationCatalog::septa(),
        }
    }
}
