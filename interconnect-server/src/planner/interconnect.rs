//! Itinerary assembly and the interconnection façade.

use std::collections::HashMap;

use futures::future::join_all;
use tracing::debug;

use crate::domain::{Flight, Iata, Interconnection, Route, TimeWindow};

use super::config::SearchConfig;
use super::lookup::{ScheduleProvider, find_flights};
use super::routing::{eligible_routes, joined_route_pairs};

/// Provider of the carrier's route graph.
///
/// Treated as returning the complete, current graph on each call.
/// Implementations degrade to an empty list on upstream failure.
pub trait RouteProvider {
    /// All known routes.
    async fn find_all(&self) -> Vec<Route>;
}

/// One itinerary query: endpoints plus the datetime window.
#[derive(Debug, Clone, Copy)]
pub struct SearchQuery {
    /// Departure airport.
    pub departure: Iata,

    /// Arrival airport.
    pub arrival: Iata,

    /// Earliest departure / latest arrival bounds.
    pub window: TimeWindow,
}

/// Itinerary search façade.
///
/// Orchestrates route filtering, the two-leg join, per-pair flight lookup
/// and itinerary assembly for one query. Callers are expected to have
/// validated the query (well-formed codes, `window.from <= window.to`).
pub struct Interconnector<S, R> {
    schedules: S,
    routes: R,
    config: SearchConfig,
}

impl<S: ScheduleProvider, R: RouteProvider> Interconnector<S, R> {
    /// Create a new interconnector over the given providers.
    pub fn new(schedules: S, routes: R, config: SearchConfig) -> Self {
        Self {
            schedules,
            routes,
            config,
        }
    }

    /// Find all direct and one-stop itineraries satisfying the query.
    ///
    /// Result order is unspecified. Upstream failures surface as missing
    /// flights, never as an error.
    pub async fn find_interconnections(&self, query: &SearchQuery) -> Vec<Interconnection> {
        let routes = self.routes.find_all().await;
        let eligible = eligible_routes(&routes, query.departure, query.arrival);
        let pairs = joined_route_pairs(&eligible);

        debug!(
            departure = %query.departure,
            arrival = %query.arrival,
            routes = routes.len(),
            eligible = eligible.len(),
            joined_pairs = pairs.len(),
            "route join complete"
        );

        let flights_by_leg = self.lookup_legs(query, &pairs).await;

        let mut itineraries = Vec::new();

        // Step 1: every direct flight is a zero-stop itinerary.
        if let Some(direct) = flights_by_leg.get(&(query.departure, query.arrival)) {
            itineraries.extend(direct.iter().cloned().map(Interconnection::direct));
        }

        // Step 2: Cartesian product per joined pair, gated by the minimum
        // connection time. The smart constructor does the gating; a too
        // tight or unchained combination is simply not an itinerary.
        let min_connection = self.config.min_connection();
        for (first_route, second_route) in &pairs {
            let first_leg = (first_route.airport_from, first_route.airport_to);
            let second_leg = (second_route.airport_from, second_route.airport_to);
            let (Some(first_flights), Some(second_flights)) =
                (flights_by_leg.get(&first_leg), flights_by_leg.get(&second_leg))
            else {
                continue;
            };

            for first in first_flights {
                for second in second_flights {
                    if let Ok(itinerary) =
                        Interconnection::one_stop(first.clone(), second.clone(), min_connection)
                    {
                        itineraries.push(itinerary);
                    }
                }
            }
        }

        debug!(itineraries = itineraries.len(), "itinerary assembly complete");

        itineraries
    }

    /// Fetch flights for every airport pair the query needs, each distinct
    /// pair exactly once, all lookups in parallel.
    ///
    /// The direct pair and the legs of every joined route pair operate on
    /// disjoint accumulators, so the fan-out needs no coordination beyond
    /// the final merge.
    async fn lookup_legs(
        &self,
        query: &SearchQuery,
        pairs: &[(Route, Route)],
    ) -> HashMap<(Iata, Iata), Vec<Flight>> {
        let mut legs: Vec<(Iata, Iata)> = vec![(query.departure, query.arrival)];
        for (first, second) in pairs {
            for leg in [
                (first.airport_from, first.airport_to),
                (second.airport_from, second.airport_to),
            ] {
                if !legs.contains(&leg) {
                    legs.push(leg);
                }
            }
        }

        let lookups = legs
            .iter()
            .map(|&(from, to)| find_flights(&self.schedules, from, to, &query.window));
        let results = join_all(lookups).await;

        legs.into_iter().zip(results).collect()
    }
}
