//! Flight value type.

use chrono::NaiveDateTime;

use super::Iata;

/// A single scheduled flight.
///
/// Datetimes are local to their respective airports: the departure datetime
/// is in the departure airport's timezone, the arrival datetime in the
/// arrival airport's. No cross-timezone ordering is implied between them, so
/// this type deliberately does not assert `arrival > departure`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flight {
    /// Flight number, e.g. "FR1234".
    pub number: String,

    /// Departure airport IATA code.
    pub departure_airport: Iata,

    /// Arrival airport IATA code.
    pub arrival_airport: Iata,

    /// Departure datetime, local to the departure airport.
    pub departure: NaiveDateTime,

    /// Arrival datetime, local to the arrival airport.
    pub arrival: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn structural_equality() {
        let a = Flight {
            number: "FR1926".to_string(),
            departure_airport: Iata::parse("DUB").unwrap(),
            arrival_airport: Iata::parse("MAD").unwrap(),
            departure: dt(2018, 7, 15, 10, 0),
            arrival: dt(2018, 7, 15, 13, 0),
        };
        let b = a.clone();
        assert_eq!(a, b);

        let later = Flight {
            departure: dt(2018, 7, 15, 11, 0),
            ..a.clone()
        };
        assert_ne!(a, later);
    }

    #[test]
    fn overnight_arrival_allowed() {
        // Red-eye: arrival datetime before departure in wall-clock terms is
        // representable; the two fields belong to different local timezones.
        let f = Flight {
            number: "FR0001".to_string(),
            departure_airport: Iata::parse("LIS").unwrap(),
            arrival_airport: Iata::parse("PDL").unwrap(),
            departure: dt(2018, 7, 15, 23, 50),
            arrival: dt(2018, 7, 15, 23, 10),
        };
        assert!(f.arrival < f.departure);
    }
}
