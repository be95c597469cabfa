//! Search configuration for the route planner.

use chrono::Duration;

use super::transfer::{BoundaryPolicy, TransferWindow};

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Shortest allowed layover between two flights (minutes).
    pub min_connection_mins: i64,

    /// Longest allowed layover between two flights (minutes).
    pub max_connection_mins: i64,

    /// Whether layovers of exactly the minimum or maximum are allowed.
    pub boundary: BoundaryPolicy,

    /// Wall-clock limit for a single search. `None` means unlimited.
    pub time_budget: Option<std::time::Duration>,

    /// Explore each first flight on its own worker.
    pub concurrent: bool,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        min_connection_mins: i64,
        max_connection_mins: i64,
        boundary: BoundaryPolicy,
        time_budget: Option<std::time::Duration>,
        concurrent: bool,
    ) -> Self {
        Self {
            min_connection_mins,
            max_connection_mins,
            boundary,
            time_budget,
            concurrent,
        }
    }

    /// Returns the minimum layover as a Duration.
    pub fn min_connection(&self) -> Duration {
        Duration::minutes(self.min_connection_mins)
    }

    /// Returns the maximum layover as a Duration.
    pub fn max_connection(&self) -> Duration {
        Duration::minutes(self.max_connection_mins)
    }

    /// Returns the layover window the search enforces.
    pub fn transfer_window(&self) -> TransferWindow {
        TransferWindow::new(self.min_connection(), self.max_connection(), self.boundary)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_connection_mins: 60,  // 1 hour
            max_connection_mins: 360, // 6 hours
            boundary: BoundaryPolicy::Exclusive,
            time_budget: None,
            concurrent: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.min_connection_mins, 60);
        assert_eq!(config.max_connection_mins, 360);
        assert_eq!(config.boundary, BoundaryPolicy::Exclusive);
        assert_eq!(config.time_budget, None);
        assert!(!config.concurrent);
    }

    #[test]
    fn duration_methods() {
        let config = SearchConfig::default();

        assert_eq!(config.min_connection(), Duration::hours(1));
        assert_eq!(config.max_connection(), Duration::hours(6));
    }

    #[test]
    fn custom_config() {
        let budget = std::time::Duration::from_secs(5);
        let config = SearchConfig::new(30, 120, BoundaryPolicy::Inclusive, Some(budget), true);

        assert_eq!(config.min_connection_mins, 30);
        assert_eq!(config.max_connection_mins, 120);
        assert_eq!(config.boundary, BoundaryPolicy::Inclusive);
        assert_eq!(config.time_budget, Some(budget));
        assert!(config.concurrent);

        let window = config.transfer_window();
        assert_eq!(window.min(), Duration::minutes(30));
        assert_eq!(window.max(), Duration::minutes(120));
    }
}
