//! Flight lookup across a datetime window.
//!
//! The schedule source exposes flights at monthly granularity, so a window
//! lookup walks every calendar month the window touches and filters each
//! batch back down to the window.

use chrono::{Datelike, NaiveDate};

use crate::domain::{Flight, Iata, TimeWindow};

/// Provider of monthly flight schedules.
///
/// Must return the flights for exactly that calendar month for the ordered
/// airport pair. Implementations degrade to an empty list on upstream
/// failure; the engine has no fallback branch of its own.
pub trait ScheduleProvider {
    /// Flights operating from `airport_from` to `airport_to` in the given
    /// calendar month.
    async fn find_flights(
        &self,
        airport_from: Iata,
        airport_to: Iata,
        year: i32,
        month: u32,
    ) -> Vec<Flight>;
}

/// Find all flights for an airport pair within the window.
///
/// Queries the provider once per calendar month the window spans and keeps
/// the flights that depart no earlier than the window start and arrive no
/// later than the window end. Months are disjoint, so concatenation cannot
/// produce duplicates.
pub async fn find_flights<P: ScheduleProvider>(
    provider: &P,
    airport_from: Iata,
    airport_to: Iata,
    window: &TimeWindow,
) -> Vec<Flight> {
    let mut flights = Vec::new();

    for (year, month) in months_spanned(window) {
        let batch = provider
            .find_flights(airport_from, airport_to, year, month)
            .await;
        flights.extend(batch.into_iter().filter(|f| window.contains(f)));
    }

    flights
}

/// Every (year, month) the window touches, start month through end month
/// inclusive.
///
/// Comparing months as a single `year * 12 + month` ordinal keeps the
/// iteration correct across year boundaries, where comparing the month
/// number alone would terminate early (December > January).
fn months_spanned(window: &TimeWindow) -> impl Iterator<Item = (i32, u32)> {
    let start = month_ordinal(window.from.date());
    let end = month_ordinal(window.to.date());

    (start..=end).map(|ordinal| (ordinal.div_euclid(12), ordinal.rem_euclid(12) as u32 + 1))
}

/// Months since year zero; total order over (year, month).
fn month_ordinal(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}
