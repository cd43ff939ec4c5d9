//! Schedules API client.
//!
//! The upstream schedules service exposes flight timetables at monthly
//! granularity: one document per (departure airport, arrival airport, year,
//! month). Times are "HH:MM" local to each airport, with no date on the
//! arrival side; an arrival time at or before the departure time means the
//! flight lands the next day.

mod client;
mod convert;
mod error;
mod types;

pub use client::{ScheduleClient, ScheduleClientConfig};
pub use convert::monthly_flights;
pub use error::ScheduleError;
pub use types::{DailySchedule, MonthlySchedule, ScheduledFlight};
