//! Conversion from Schedules API wire types to domain flights.

use chrono::{Duration, NaiveDate, NaiveTime};
use tracing::warn;

use crate::domain::{Flight, Iata};

use super::error::ScheduleError;
use super::types::{MonthlySchedule, ScheduledFlight};

/// Convert a monthly schedule into domain flights for the given pair.
///
/// The wire format carries only times; dates come from (year, month, day).
/// An arrival time that is not strictly after the departure time means the
/// flight lands the following day (the schedule has no overnight marker).
///
/// Days that don't form a valid calendar date are skipped with a warning
/// rather than failing the whole month.
///
/// # Errors
///
/// Returns `Err` if any flight carries an unparseable "HH:MM" time.
pub fn monthly_flights(
    schedule: &MonthlySchedule,
    year: i32,
    airport_from: Iata,
    airport_to: Iata,
) -> Result<Vec<Flight>, ScheduleError> {
    let mut flights = Vec::new();

    for daily in &schedule.days {
        let Some(date) = NaiveDate::from_ymd_opt(year, schedule.month, daily.day) else {
            warn!(
                year,
                month = schedule.month,
                day = daily.day,
                "skipping invalid calendar date in schedule"
            );
            continue;
        };

        for scheduled in &daily.flights {
            flights.push(scheduled_to_flight(
                scheduled,
                date,
                airport_from,
                airport_to,
            )?);
        }
    }

    Ok(flights)
}

/// Build a `Flight` from a scheduled flight on a given departure date.
fn scheduled_to_flight(
    scheduled: &ScheduledFlight,
    departure_date: NaiveDate,
    airport_from: Iata,
    airport_to: Iata,
) -> Result<Flight, ScheduleError> {
    let departure_time = parse_hhmm(&scheduled.number, &scheduled.departure_time)?;
    let arrival_time = parse_hhmm(&scheduled.number, &scheduled.arrival_time)?;

    // Overnight flights wrap to the next day. An arrival equal to the
    // departure time is also treated as next-day: the times are in
    // different local timezones, but a zero-length flight is not.
    let arrival_date = if arrival_time > departure_time {
        departure_date
    } else {
        departure_date + Duration::days(1)
    };

    Ok(Flight {
        number: scheduled.number.clone(),
        departure_airport: airport_from,
        arrival_airport: airport_to,
        departure: departure_date.and_time(departure_time),
        arrival: arrival_date.and_time(arrival_time),
    })
}

fn parse_hhmm(number: &str, value: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| ScheduleError::InvalidTime {
        number: number.to_string(),
        value: value.to_string(),
    })
}
