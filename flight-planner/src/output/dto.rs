//! Data transfer objects for serialized search results.
//!
//! Field order here is the field order in the emitted JSON.

use serde::Serialize;

use crate::domain::{AirportCode, Flight, Route, TravelTime, format_timestamp};

/// A route in search results.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Flights in travel order
    pub flights: Vec<FlightResult>,

    /// Smallest bag allowance across all flights
    pub bags_allowed: u32,

    /// Bags the passenger travels with
    pub bags_count: u32,

    /// Final airport
    pub destination: AirportCode,

    /// First airport
    pub origin: AirportCode,

    /// Fares plus bag fees
    pub total_price: f64,

    /// First departure to last arrival, as H:MM:SS
    pub travel_time: TravelTime,
}

/// A flight within a route.
#[derive(Debug, Serialize)]
pub struct FlightResult {
    /// Flight number
    pub flight_no: String,

    /// Departure airport
    pub origin: AirportCode,

    /// Arrival airport
    pub destination: AirportCode,

    /// Departure time, YYYY-MM-DDTHH:MM:SS
    pub departure: String,

    /// Arrival time, YYYY-MM-DDTHH:MM:SS
    pub arrival: String,

    /// Fare without luggage
    pub base_price: f64,

    /// Fee per bag
    pub bag_price: f64,

    /// Bags the flight accepts
    pub bags_allowed: u32,
}

impl RouteResult {
    /// Create from a domain Route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            flights: route
                .flights()
                .iter()
                .map(|f| FlightResult::from_flight(f))
                .collect(),
            bags_allowed: route.bags_allowed(),
            bags_count: route.bags_count(),
            destination: route.destination(),
            origin: route.origin(),
            total_price: route.total_price(),
            travel_time: route.travel_time(),
        }
    }
}

impl FlightResult {
    /// Create from a domain Flight.
    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            flight_no: flight.flight_no.clone(),
            origin: flight.origin,
            destination: flight.destination,
            departure: format_timestamp(&flight.departure),
            arrival: format_timestamp(&flight.arrival),
            base_price: flight.base_price,
            bag_price: flight.bag_price,
            bags_allowed: flight.bags_allowed,
        }
    }
}
