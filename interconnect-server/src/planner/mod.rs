//! Itinerary search engine.
//!
//! This module implements the core search that answers: "given a departure
//! airport, an arrival airport and a time window, which direct or one-stop
//! itineraries fit the window and the minimum connection time?"
//!
//! The engine is pure orchestration over two abstract providers (routes and
//! monthly schedules); it performs no I/O of its own and holds no mutable
//! state, so it is safe to run concurrently for independent queries.

mod config;
mod interconnect;
mod lookup;
mod routing;


pub use config::SearchConfig;
pub use interconnect::{Interconnector, RouteProvider, SearchQuery};
pub use lookup::{ScheduleProvider, find_flights};
pub use routing::{eligible_routes, joined_route_pairs};
