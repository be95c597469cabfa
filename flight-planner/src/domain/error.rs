//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from loading and query errors.

use super::AirportCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// A flight record breaks one of its invariants
    #[error("invalid flight: {0}")]
    InvalidFlight(&'static str),

    /// Route has no flights
    #[error("route must have at least one flight")]
    EmptyRoute,

    /// Consecutive flights don't share an airport
    #[error("flights arriving at {0} and departing from {1} do not connect")]
    Disconnected(AirportCode, AirportCode),

    /// The same airport is departed from twice
    #[error("route departs from {0} more than once")]
    RevisitedAirport(AirportCode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidFlight("departure must be before arrival");
        assert_eq!(
            err.to_string(),
            "invalid flight: departure must be before arrival"
        );

        let err = DomainError::EmptyRoute;
        assert_eq!(err.to_string(), "route must have at least one flight");

        let wtf = AirportCode::parse("WTF").unwrap();
        let rej = AirportCode::parse("REJ").unwrap();
        let err = DomainError::Disconnected(wtf, rej);
        assert_eq!(
            err.to_string(),
            "flights arriving at WTF and departing from REJ do not connect"
        );

        let err = DomainError::RevisitedAirport(wtf);
        assert_eq!(err.to_string(), "route departs from WTF more than once");
    }
}
