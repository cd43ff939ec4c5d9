//! Flight interconnection type.

use chrono::Duration;

use super::{DomainError, Flight};

/// A flight itinerary of one or two legs.
///
/// Valid by construction: a two-leg interconnection always has spatially
/// chained legs (first arrival airport == second departure airport) and a
/// connection gap strictly greater than the minimum connection time.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use interconnect_server::domain::{Flight, Iata, Interconnection};
///
/// let dt = |d: u32, h: u32, m: u32| {
///     NaiveDate::from_ymd_opt(2018, 7, d).unwrap().and_hms_opt(h, m, 0).unwrap()
/// };
/// let leg = Flight {
///     number: "FR1926".into(),
///     departure_airport: Iata::parse("DUB").unwrap(),
///     arrival_airport: Iata::parse("MAD").unwrap(),
///     departure: dt(15, 10, 0),
///     arrival: dt(15, 13, 0),
/// };
///
/// let itinerary = Interconnection::direct(leg);
/// assert_eq!(itinerary.stops(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interconnection {
    legs: Vec<Flight>,
}

impl Interconnection {
    /// Create a direct (zero-stop) interconnection from a single flight.
    pub fn direct(flight: Flight) -> Self {
        Self { legs: vec![flight] }
    }

    /// Create a one-stop interconnection from two flights.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the first leg's arrival airport differs from the
    /// second leg's departure airport, or if the second leg departs at or
    /// before `min_connection` after the first leg arrives. The inequality
    /// is strict: a gap of exactly `min_connection` is rejected.
    pub fn one_stop(
        first: Flight,
        second: Flight,
        min_connection: Duration,
    ) -> Result<Self, DomainError> {
        if first.arrival_airport != second.departure_airport {
            return Err(DomainError::LegsNotChained(
                first.arrival_airport,
                second.departure_airport,
            ));
        }

        if second.departure <= first.arrival + min_connection {
            return Err(DomainError::ConnectionTooTight {
                gap_mins: (second.departure - first.arrival).num_minutes(),
                min_mins: min_connection.num_minutes(),
            });
        }

        Ok(Self {
            legs: vec![first, second],
        })
    }

    /// The flight legs, in travel order.
    pub fn legs(&self) -> &[Flight] {
        &self.legs
    }

    /// Number of intermediate stops: `legs - 1`.
    pub fn stops(&self) -> usize {
        self.legs.len() - 1
    }
}
