//! Route eligibility and the two-leg route join.

use crate::domain::{Iata, Route};

/// Routes usable as a leg of a journey between the query endpoints.
///
/// A route is eligible when it is direct and touches either endpoint: its
/// departure matches the query departure, or its arrival matches the query
/// arrival. The OR deliberately admits routes matching only one endpoint;
/// the other leg of a joined pair completes the match. Routes carrying a
/// connecting airport are never eligible.
pub fn eligible_routes(routes: &[Route], departure: Iata, arrival: Iata) -> Vec<Route> {
    routes
        .iter()
        .filter(|r| r.is_direct() && (r.airport_from == departure || r.airport_to == arrival))
        .cloned()
        .collect()
}

/// All two-hop paths through the eligible set.
///
/// Emits every pair (first, second) with `first.airport_to ==
/// second.airport_from`, meaning "fly first, then second". This is a full
/// cross join, quadratic in the eligible count, which stays small (only
/// routes touching the query endpoints survive the filter). Duplicate rows
/// in the input collapse to one emitted pair.
pub fn joined_route_pairs(eligible: &[Route]) -> Vec<(Route, Route)> {
    let mut pairs: Vec<(Route, Route)> = Vec::new();

    for first in eligible {
        for second in eligible {
            if first.airport_to != second.airport_from {
                continue;
            }
            let pair = (first.clone(), second.clone());
            if !pairs.contains(&pair) {
                pairs.push(pair);
            }
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iata(s: &str) -> Iata {
        Iata::parse(s).unwrap()
    }

    fn route(from: &str, to: &str) -> Route {
        Route::direct(iata(from), iata(to))
    }

    #[test]
    fn eligible_admits_partial_endpoint_matches() {
        let routes = vec![
            route("DUB", "MAD"), // both endpoints
            route("DUB", "BCN"), // departure only
            route("BCN", "MAD"), // arrival only
            route("STN", "WRO"), // neither
        ];

        let eligible = eligible_routes(&routes, iata("DUB"), iata("MAD"));
        assert_eq!(
            eligible,
            vec![route("DUB", "MAD"), route("DUB", "BCN"), route("BCN", "MAD")]
        );
    }

    #[test]
    fn connecting_airport_routes_are_ineligible() {
        let official_via_stn = Route {
            airport_from: iata("DUB"),
            airport_to: iata("MAD"),
            connecting_airport: Some(iata("STN")),
        };
        let routes = vec![official_via_stn, route("DUB", "MAD")];

        let eligible = eligible_routes(&routes, iata("DUB"), iata("MAD"));
        assert_eq!(eligible, vec![route("DUB", "MAD")]);
    }

    #[test]
    fn join_matches_arrival_to_departure() {
        let eligible = vec![route("DUB", "MAD"), route("DUB", "BCN"), route("BCN", "MAD")];

        let pairs = joined_route_pairs(&eligible);
        assert_eq!(pairs, vec![(route("DUB", "BCN"), route("BCN", "MAD"))]);
    }

    #[test]
    fn join_emits_every_hub() {
        let eligible = vec![
            route("DUB", "BCN"),
            route("DUB", "STN"),
            route("BCN", "MAD"),
            route("STN", "MAD"),
        ];

        let pairs = joined_route_pairs(&eligible);
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&(route("DUB", "BCN"), route("BCN", "MAD"))));
        assert!(pairs.contains(&(route("DUB", "STN"), route("STN", "MAD"))));
    }

    #[test]
    fn join_collapses_duplicate_rows() {
        let eligible = vec![route("DUB", "BCN"), route("DUB", "BCN"), route("BCN", "MAD")];

        let pairs = joined_route_pairs(&eligible);
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn no_join_without_shared_airport() {
        let eligible = vec![route("DUB", "BCN"), route("STN", "MAD")];
        assert!(joined_route_pairs(&eligible).is_empty());
    }
}
