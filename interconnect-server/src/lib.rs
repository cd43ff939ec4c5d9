//! Flight interconnection server.
//!
//! A web application that answers: "which direct or one-stop itineraries
//! connect two airports within a datetime window?"

pub mod cache;
pub mod domain;
pub mod planner;
pub mod routes;
pub mod schedules;
pub mod web;
