//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedScheduleClient;
use crate::planner::Interconnector;
use crate::routes::RouteCatalog;

/// The production interconnector: cached schedules over HTTP, shared route
/// catalog.
pub type AppInterconnector = Interconnector<CachedScheduleClient, RouteCatalog>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Itinerary search façade
    pub interconnector: Arc<AppInterconnector>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(interconnector: AppInterconnector) -> Self {
        Self {
            interconnector: Arc::new(interconnector),
        }
    }
}
