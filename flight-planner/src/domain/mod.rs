//! Domain types for the flight route planner.
//!
//! This module contains the core domain model types. All types enforce
//! their invariants at construction time, so code that receives these
//! types can trust their validity.

mod airport;
mod error;
mod flight;
mod route;
mod time;

pub use airport::{AirportCode, InvalidAirportCode};
pub use error::DomainError;
pub use flight::Flight;
pub use route::Route;
pub use time::{
    TIMESTAMP_OUTPUT_FORMAT, TimestampError, TravelTime, format_timestamp, parse_timestamp,
};
