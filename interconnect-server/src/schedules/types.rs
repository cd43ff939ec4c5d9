//! Wire types for the Schedules API.
//!
//! These mirror the upstream JSON exactly; times stay as raw "HH:MM"
//! strings here and are validated during conversion to domain types.

use serde::Deserialize;

/// One month of flights for an airport pair.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthlySchedule {
    /// Month of the year, 1-12.
    pub month: u32,

    /// Daily schedules for the month.
    pub days: Vec<DailySchedule>,
}

/// Flights operating on one day of the month.
#[derive(Debug, Clone, Deserialize)]
pub struct DailySchedule {
    /// Day of the month, 1-31.
    pub day: u32,

    /// Flights scheduled for the day.
    pub flights: Vec<ScheduledFlight>,
}

/// A single scheduled flight within a daily schedule.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledFlight {
    /// Flight number.
    pub number: String,

    /// Departure time "HH:MM", local to the departure airport.
    pub departure_time: String,

    /// Arrival time "HH:MM", local to the arrival airport.
    pub arrival_time: String,
}
