//! Routes API client.
//!
//! The upstream routes service returns the carrier's whole route graph in
//! one document. It changes rarely, so the catalog fetches it once and
//! refreshes in the background rather than per query.

mod catalog;
mod client;
mod error;

pub use catalog::RouteCatalog;
pub use client::{RouteClient, RouteClientConfig, RouteDto};
pub use error::RouteError;
