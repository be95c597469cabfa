//! Route types.
//!
//! A `Route` is a finalized itinerary: one or more connected flights from
//! an origin to a destination, together with the figures a passenger
//! compares routes by.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDateTime;

use super::{AirportCode, DomainError, Flight, TravelTime};

/// A complete route from origin to destination.
///
/// Derived fields are computed once at construction and the route is
/// immutable afterwards.
///
/// # Invariants
///
/// - At least one flight
/// - Consecutive flights connect (destination of one = origin of next)
/// - No flight after the first lands at an airport already departed from
#[derive(Debug, Clone)]
pub struct Route {
    flights: Vec<Arc<Flight>>,
    bags_count: u32,
    bags_allowed: u32,
    total_price: f64,
    travel_time: TravelTime,
}

impl Route {
    /// Finalizes a route for a passenger travelling with `bags_count` bags.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - The flight list is empty
    /// - Flights don't connect (destination != next origin)
    /// - A flight after the first lands at an airport already departed from
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::domain::{AirportCode, Flight, Route, parse_timestamp};
    /// use std::sync::Arc;
    ///
    /// let flight = Flight::new(
    ///     "XC233",
    ///     AirportCode::parse("BTW").unwrap(),
    ///     AirportCode::parse("WTF").unwrap(),
    ///     parse_timestamp("2021-09-02T05:50:00").unwrap(),
    ///     parse_timestamp("2021-09-02T08:20:00").unwrap(),
    ///     67.0,
    ///     7.0,
    ///     2,
    /// )
    /// .unwrap();
    ///
    /// let route = Route::new(vec![Arc::new(flight)], 1).unwrap();
    /// assert_eq!(route.total_price(), 74.0);
    /// assert_eq!(route.travel_time().to_string(), "2:30:00");
    /// ```
    pub fn new(flights: Vec<Arc<Flight>>, bags_count: u32) -> Result<Self, DomainError> {
        let (first, last) = match (flights.first(), flights.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(DomainError::EmptyRoute),
        };

        for window in flights.windows(2) {
            if window[0].destination != window[1].origin {
                return Err(DomainError::Disconnected(
                    window[0].destination,
                    window[1].origin,
                ));
            }
        }

        let mut departed = HashSet::with_capacity(flights.len());
        departed.insert(first.origin);
        for flight in &flights[1..] {
            if departed.contains(&flight.destination) {
                return Err(DomainError::RevisitedAirport(flight.destination));
            }
            departed.insert(flight.origin);
        }

        let bags_allowed = flights.iter().map(|f| f.bags_allowed).min().unwrap_or(0);
        let base_total: f64 = flights.iter().map(|f| f.base_price).sum();
        let bags_total: f64 = flights.iter().map(|f| f.bag_price).sum();
        let total_price = base_total + f64::from(bags_count) * bags_total;
        let travel_time = TravelTime::between(first.departure, last.arrival);

        Ok(Self {
            flights,
            bags_count,
            bags_allowed,
            total_price,
            travel_time,
        })
    }

    /// Returns all flights in order.
    pub fn flights(&self) -> &[Arc<Flight>] {
        &self.flights
    }

    /// Returns the number of flights.
    pub fn flight_count(&self) -> usize {
        self.flights.len()
    }

    /// Returns the number of changes (flights - 1, or 0 for direct).
    pub fn change_count(&self) -> usize {
        self.flights.len().saturating_sub(1)
    }

    /// Returns the airport the route starts from.
    pub fn origin(&self) -> AirportCode {
        self.flights[0].origin
    }

    /// Returns the airport the route ends at.
    pub fn destination(&self) -> AirportCode {
        self.flights[self.flights.len() - 1].destination
    }

    /// Returns every airport departed from, in order.
    pub fn visited_airports(&self) -> Vec<AirportCode> {
        self.flights.iter().map(|f| f.origin).collect()
    }

    /// Returns the departure time of the first flight.
    pub fn departure_time(&self) -> NaiveDateTime {
        self.flights[0].departure
    }

    /// Returns the arrival time of the last flight.
    pub fn arrival_time(&self) -> NaiveDateTime {
        self.flights[self.flights.len() - 1].arrival
    }

    /// Returns the number of bags the passenger travels with.
    pub fn bags_count(&self) -> u32 {
        self.bags_count
    }

    /// Returns the smallest bag allowance across all flights.
    pub fn bags_allowed(&self) -> u32 {
        self.bags_allowed
    }

    /// Returns the sum of base fares plus bag fees for `bags_count` bags.
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Returns the time from first departure to last arrival.
    pub fn travel_time(&self) -> TravelTime {
        self.travel_time
    }
}
