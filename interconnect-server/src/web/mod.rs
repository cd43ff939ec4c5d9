//! Web layer: REST endpoint, DTOs and application state.

mod dto;
mod routes;
mod state;

pub use dto::{ErrorResponse, InterconnectionResult, InterconnectionsQuery, LegResult};
pub use routes::{AppError, create_router};
pub use state::{AppInterconnector, AppState};
