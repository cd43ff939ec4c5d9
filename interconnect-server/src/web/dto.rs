//! Data transfer objects for web requests and responses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{Flight, Interconnection};

/// Datetime format used on the wire, minute precision, no offset.
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Query parameters for the interconnections endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterconnectionsQuery {
    /// Departure airport IATA code
    pub departure: String,

    /// Arrival airport IATA code
    pub arrival: String,

    /// Earliest departure, departure-airport local time
    pub departure_date_time: String,

    /// Latest arrival, arrival-airport local time
    pub arrival_date_time: String,
}

/// An itinerary in the response.
#[derive(Debug, Serialize)]
pub struct InterconnectionResult {
    /// Number of intermediate stops (0 or 1)
    pub stops: usize,

    /// Flight legs in travel order
    pub legs: Vec<LegResult>,
}

/// One flight leg of an itinerary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegResult {
    /// Flight number
    pub number: String,

    /// Departure airport IATA code
    pub departure_airport: String,

    /// Arrival airport IATA code
    pub arrival_airport: String,

    /// Departure datetime, departure-airport local time
    pub departure_date_time: String,

    /// Arrival datetime, arrival-airport local time
    pub arrival_date_time: String,
}

impl InterconnectionResult {
    /// Build the response shape from a domain interconnection.
    pub fn from_interconnection(interconnection: &Interconnection) -> Self {
        Self {
            stops: interconnection.stops(),
            legs: interconnection.legs().iter().map(LegResult::from_flight).collect(),
        }
    }
}

impl LegResult {
    fn from_flight(flight: &Flight) -> Self {
        Self {
            number: flight.number.clone(),
            departure_airport: flight.departure_airport.to_string(),
            arrival_airport: flight.arrival_airport.to_string(),
            departure_date_time: format_datetime(flight.departure),
            arrival_date_time: format_datetime(flight.arrival),
        }
    }
}

fn format_datetime(value: NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Iata;
    use chrono::NaiveDate;

    fn flight(number: &str, dep: (u32, u32), arr: (u32, u32)) -> Flight {
        let dt = |(h, m): (u32, u32)| {
            NaiveDate::from_ymd_opt(2018, 7, 15)
                .unwrap()
                .and_hms_opt(h, m, 0)
                .unwrap()
        };
        Flight {
            number: number.to_string(),
            departure_airport: Iata::parse("DUB").unwrap(),
            arrival_airport: Iata::parse("MAD").unwrap(),
            departure: dt(dep),
            arrival: dt(arr),
        }
    }

    #[test]
    fn serializes_expected_shape() {
        let itinerary = Interconnection::direct(flight("1926", (10, 0), (13, 0)));
        let result = InterconnectionResult::from_interconnection(&itinerary);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "stops": 0,
                "legs": [{
                    "number": "1926",
                    "departureAirport": "DUB",
                    "arrivalAirport": "MAD",
                    "departureDateTime": "2018-07-15T10:00",
                    "arrivalDateTime": "2018-07-15T13:00"
                }]
            })
        );
    }

    #[test]
    fn datetime_has_minute_precision_without_offset() {
        let itinerary = Interconnection::direct(flight("1926", (9, 5), (12, 0)));
        let result = InterconnectionResult::from_interconnection(&itinerary);
        assert_eq!(result.legs[0].departure_date_time, "2018-07-15T09:05");
        assert_eq!(result.legs[0].arrival_date_time, "2018-07-15T12:00");
    }

    #[test]
    fn query_deserializes_from_camel_case() {
        let query: InterconnectionsQuery = serde_json::from_str(
            r#"{
                "departure": "DUB",
                "arrival": "MAD",
                "departureDateTime": "2018-07-15T00:00",
                "arrivalDateTime": "2018-07-15T23:59"
            }"#,
        )
        .unwrap();

        assert_eq!(query.departure, "DUB");
        assert_eq!(query.arrival_date_time, "2018-07-15T23:59");
    }
}
