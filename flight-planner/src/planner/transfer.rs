//! Layover feasibility between consecutive flights.

use chrono::{Duration, NaiveDateTime};

/// How the ends of the layover window are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Layovers must be strictly longer than the minimum and strictly
    /// shorter than the maximum.
    #[default]
    Exclusive,
    /// Layovers of exactly the minimum or maximum are also allowed.
    Inclusive,
}

/// The range of layovers a passenger can make between two flights.
///
/// # Examples
///
/// ```
/// use flight_planner::planner::{BoundaryPolicy, TransferWindow};
/// use chrono::{Duration, NaiveDate};
///
/// let window = TransferWindow::default();
/// let arrival = NaiveDate::from_ymd_opt(2021, 9, 2)
///     .unwrap()
///     .and_hms_opt(8, 20, 0)
///     .unwrap();
///
/// assert!(window.allows(arrival, arrival + Duration::minutes(165)));
/// assert!(!window.allows(arrival, arrival + Duration::hours(1)));
/// assert!(!window.allows(arrival, arrival + Duration::hours(6)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferWindow {
    min: Duration,
    max: Duration,
    boundary: BoundaryPolicy,
}

impl TransferWindow {
    /// Create a window between `min` and `max`.
    pub fn new(min: Duration, max: Duration, boundary: BoundaryPolicy) -> Self {
        Self { min, max, boundary }
    }

    /// Returns the shortest layover bound.
    pub fn min(&self) -> Duration {
        self.min
    }

    /// Returns the longest layover bound.
    pub fn max(&self) -> Duration {
        self.max
    }

    /// Returns the boundary policy.
    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// Returns true if a flight departing at `departure` can be caught
    /// after arriving at `arrival`.
    pub fn allows(&self, arrival: NaiveDateTime, departure: NaiveDateTime) -> bool {
        let gap = departure.signed_duration_since(arrival);
        match self.boundary {
            BoundaryPolicy::Exclusive => gap > self.min && gap < self.max,
            BoundaryPolicy::Inclusive => gap >= self.min && gap <= self.max,
        }
    }
}

impl Default for TransferWindow {
    fn default() -> Self {
        Self::new(Duration::hours(1), Duration::hours(6), BoundaryPolicy::Exclusive)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 9, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    const THREE_DAYS: i64 = 3 * 24 * 3600;

    proptest! {
        /// Gaps strictly between 1h and 6h are always feasible
        #[test]
        fn strictly_inside_is_feasible(offset in 0i64..THREE_DAYS, gap in 3601i64..21600) {
            let arrival = base() + Duration::seconds(offset);
            let departure = arrival + Duration::seconds(gap);
            prop_assert!(TransferWindow::default().allows(arrival, departure));
        }

        /// Gaps of exactly 1h or 6h are never feasible
        #[test]
        fn exact_bounds_are_infeasible(offset in 0i64..THREE_DAYS, six in any::<bool>()) {
            let arrival = base() + Duration::seconds(offset);
            let gap = if six { Duration::hours(6) } else { Duration::hours(1) };
            prop_assert!(!TransferWindow::default().allows(arrival, arrival + gap));
        }

        /// Gaps outside the window are never feasible
        #[test]
        fn outside_is_infeasible(
            offset in 0i64..THREE_DAYS,
            gap in prop_oneof![-86400i64..3600, 21601i64..172800],
        ) {
            let arrival = base() + Duration::seconds(offset);
            let departure = arrival + Duration::seconds(gap);
            prop_assert!(!TransferWindow::default().allows(arrival, departure));
        }
    }
}
