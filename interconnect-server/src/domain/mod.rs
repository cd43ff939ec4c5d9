//! Domain types for the flight interconnection server.
//!
//! Core value types representing validated flight data. All types enforce
//! their invariants at construction time, so code that receives these types
//! can trust their validity.

mod airport;
mod error;
mod flight;
mod interconnection;
mod route;
mod window;

pub use airport::{Iata, InvalidIata};
pub use error::DomainError;
pub use flight::Flight;
pub use interconnection::Interconnection;
pub use route::Route;
pub use window::TimeWindow;
