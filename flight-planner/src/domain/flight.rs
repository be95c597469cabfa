//! Flight records.

use chrono::{Duration, NaiveDateTime};

use super::{AirportCode, DomainError};

/// A single scheduled flight.
///
/// Flights are immutable once loaded and shared between the timetable and
/// every route that uses them.
///
/// # Invariants
///
/// - `departure < arrival`
/// - `base_price` and `bag_price` are finite and non-negative
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    /// Flight number, e.g. "XC233"
    pub flight_no: String,
    /// Departure airport
    pub origin: AirportCode,
    /// Arrival airport
    pub destination: AirportCode,
    /// Local departure time
    pub departure: NaiveDateTime,
    /// Local arrival time
    pub arrival: NaiveDateTime,
    /// Fare without luggage
    pub base_price: f64,
    /// Fee per checked bag
    pub bag_price: f64,
    /// Maximum number of bags the flight accepts
    pub bags_allowed: u32,
}

impl Flight {
    /// Creates a flight, checking its invariants.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        flight_no: impl Into<String>,
        origin: AirportCode,
        destination: AirportCode,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
        base_price: f64,
        bag_price: f64,
        bags_allowed: u32,
    ) -> Result<Self, DomainError> {
        if departure >= arrival {
            return Err(DomainError::InvalidFlight(
                "departure must be before arrival",
            ));
        }
        if !base_price.is_finite() || base_price < 0.0 {
            return Err(DomainError::InvalidFlight(
                "base price must be a non-negative number",
            ));
        }
        if !bag_price.is_finite() || bag_price < 0.0 {
            return Err(DomainError::InvalidFlight(
                "bag price must be a non-negative number",
            ));
        }

        Ok(Self {
            flight_no: flight_no.into(),
            origin,
            destination,
            departure,
            arrival,
            base_price,
            bag_price,
            bags_allowed,
        })
    }

    /// Returns the time spent in the air.
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }

    /// Returns true if the flight accepts `bags` checked bags.
    pub fn accepts_bags(&self, bags: u32) -> bool {
        bags <= self.bags_allowed
    }

    /// Price of this flight for a passenger with `bags` checked bags.
    pub fn price_with_bags(&self, bags: u32) -> f64 {
        self.base_price + f64::from(bags) * self.bag_price
    }
}
