//! Query time window.

use chrono::NaiveDateTime;

use super::Flight;

/// An inclusive datetime window for an itinerary query.
///
/// `from` is the earliest acceptable departure (departure-airport local
/// time) and `to` the latest acceptable arrival (arrival-airport local
/// time). Callers are expected to have validated `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Earliest departure datetime.
    pub from: NaiveDateTime,

    /// Latest arrival datetime.
    pub to: NaiveDateTime,
}

impl TimeWindow {
    /// Create a window from its bounds.
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self { from, to }
    }

    /// Returns true if the flight departs no earlier than `from` and
    /// arrives no later than `to`. Both bounds are inclusive.
    pub fn contains(&self, flight: &Flight) -> bool {
        flight.departure >= self.from && flight.arrival <= self.to
    }
}
