//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDateTime;
use tracing::warn;

use crate::domain::{Iata, TimeWindow};
use crate::planner::SearchQuery;

use super::dto::{
    DATETIME_FORMAT, ErrorResponse, InterconnectionResult, InterconnectionsQuery,
};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/interconnections", get(find_interconnections))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Find direct and one-stop itineraries for the given restrictions.
async fn find_interconnections(
    State(state): State<AppState>,
    Query(query): Query<InterconnectionsQuery>,
) -> Result<Json<Vec<InterconnectionResult>>, AppError> {
    let search = validate_query(&query)?;

    let itineraries = state.interconnector.find_interconnections(&search).await;

    let results = itineraries
        .iter()
        .map(InterconnectionResult::from_interconnection)
        .collect();

    Ok(Json(results))
}

/// Validate raw query parameters into a well-formed search query.
///
/// The engine assumes well-formed arguments; this is the boundary that
/// guarantees it.
fn validate_query(query: &InterconnectionsQuery) -> Result<SearchQuery, AppError> {
    let departure = Iata::parse_normalized(&query.departure).map_err(|e| AppError::BadRequest {
        message: format!("invalid departure airport {:?}: {e}", query.departure),
    })?;

    let arrival = Iata::parse_normalized(&query.arrival).map_err(|e| AppError::BadRequest {
        message: format!("invalid arrival airport {:?}: {e}", query.arrival),
    })?;

    let from = parse_datetime(&query.departure_date_time, "departureDateTime")?;
    let to = parse_datetime(&query.arrival_date_time, "arrivalDateTime")?;

    if from > to {
        return Err(AppError::BadRequest {
            message: "departureDateTime must not be after arrivalDateTime".to_string(),
        });
    }

    Ok(SearchQuery {
        departure,
        arrival,
        window: TimeWindow::new(from, to),
    })
}

fn parse_datetime(value: &str, field: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).map_err(|_| AppError::BadRequest {
        message: format!("invalid {field} {value:?}: expected yyyy-MM-ddTHH:mm"),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, "request failed: {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
