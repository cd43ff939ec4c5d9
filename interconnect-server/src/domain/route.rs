//! Route value type.

use super::Iata;

/// An airport pair served by the carrier.
///
/// A route with no connecting airport is a direct city pair. A populated
/// connecting airport marks an "official" multi-leg route, which the
/// itinerary search never uses as a leg (it builds its own connections from
/// direct routes instead).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    /// Departure airport IATA code.
    pub airport_from: Iata,

    /// Arrival airport IATA code.
    pub airport_to: Iata,

    /// Connecting airport IATA code, absent for direct routes.
    pub connecting_airport: Option<Iata>,
}

impl Route {
    /// Create a direct route between two airports.
    pub fn direct(airport_from: Iata, airport_to: Iata) -> Self {
        Self {
            airport_from,
            airport_to,
            connecting_airport: None,
        }
    }

    /// Returns true if this route is a direct city pair.
    pub fn is_direct(&self) -> bool {
        self.connecting_airport.is_none()
    }
}
