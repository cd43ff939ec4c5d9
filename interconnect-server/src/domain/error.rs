//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from API/IO errors.

use super::Iata;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Consecutive legs don't share an airport
    #[error("legs do not connect: first arrives at {0}, second departs from {1}")]
    LegsNotChained(Iata, Iata),

    /// Gap between legs is shorter than the minimum connection time
    #[error("connection too tight: {gap_mins} minutes, need more than {min_mins}")]
    ConnectionTooTight { gap_mins: i64, min_mins: i64 },
}
