//! Timestamp parsing and travel time formatting.
//!
//! Timetables carry local ISO 8601 date-times without an offset, so all
//! times are `NaiveDateTime`. Route durations are shown as `H:MM:SS`
//! where the hour count is unbounded: days fold into hours.

use chrono::{Duration, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;

/// Error returned when parsing an invalid timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: expected YYYY-MM-DDTHH:MM:SS")]
pub struct TimestampError {
    input: String,
}

/// Accepted timestamp layouts, tried in order.
const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Layout used when writing timestamps back out.
pub const TIMESTAMP_OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a local ISO 8601 date-time such as `2021-09-02T05:50:00`.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::parse_timestamp;
///
/// let t = parse_timestamp("2021-09-02T05:50:00").unwrap();
/// assert_eq!(t.to_string(), "2021-09-02 05:50:00");
///
/// assert!(parse_timestamp("02/09/2021 05:50").is_err());
/// ```
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, TimestampError> {
    let trimmed = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| TimestampError {
            input: s.to_string(),
        })
}

/// Format a timestamp the way it is written in timetables.
pub fn format_timestamp(t: &NaiveDateTime) -> String {
    t.format(TIMESTAMP_OUTPUT_FORMAT).to_string()
}

/// Wall-clock duration of a route, from first departure to last arrival.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::TravelTime;
/// use chrono::Duration;
///
/// let t = TravelTime::new(Duration::hours(25) + Duration::minutes(5));
/// assert_eq!(t.to_string(), "25:05:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TravelTime(Duration);

impl TravelTime {
    /// Wrap a duration.
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    /// Travel time between a departure and an arrival.
    pub fn between(departure: NaiveDateTime, arrival: NaiveDateTime) -> Self {
        Self(arrival.signed_duration_since(departure))
    }

    /// Returns the underlying duration.
    pub fn duration(&self) -> Duration {
        self.0
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.num_seconds();
        let sign = if secs < 0 { "-" } else { "" };
        let secs = secs.unsigned_abs();
        write!(
            f,
            "{sign}{}:{:02}:{:02}",
            secs / 3600,
            secs / 60 % 60,
            secs % 60
        )
    }
}

impl Serialize for TravelTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        parse_timestamp(s).unwrap()
    }

    #[test]
    fn parse_iso_timestamp() {
        let t = ts("2021-09-02T05:50:00");
        assert_eq!(format_timestamp(&t), "2021-09-02T05:50:00");
    }

    #[test]
    fn parse_space_separated_timestamp() {
        assert_eq!(ts("2021-09-02 05:50:00"), ts("2021-09-02T05:50:00"));
    }

    #[test]
    fn parse_without_seconds() {
        assert_eq!(ts("2021-09-02T05:50"), ts("2021-09-02T05:50:00"));
    }

    #[test]
    fn reject_garbage() {
        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("2021-09-02").is_err());
        assert!(parse_timestamp("2021-13-02T05:50:00").is_err());
        assert!(parse_timestamp("2021-09-02T25:50:00").is_err());
    }

    #[test]
    fn travel_time_same_day_with_transfer() {
        let t = TravelTime::between(ts("2021-09-02T05:50:00"), ts("2021-09-02T12:45:00"));
        assert_eq!(t.to_string(), "6:55:00");
    }

    #[test]
    fn travel_time_direct() {
        let t = TravelTime::between(ts("2021-09-01T17:35:00"), ts("2021-09-01T21:05:00"));
        assert_eq!(t.to_string(), "3:30:00");
    }

    #[test]
    fn travel_time_folds_days_into_hours() {
        let t = TravelTime::between(ts("2021-09-01T17:35:00"), ts("2021-09-02T18:40:00"));
        assert_eq!(t.to_string(), "25:05:00");
    }

    #[test]
    fn travel_time_pads_minutes_and_seconds() {
        let t = TravelTime::new(Duration::seconds(3600 + 7));
        assert_eq!(t.to_string(), "1:00:07");
    }

    #[test]
    fn travel_time_serializes_as_string() {
        let t = TravelTime::new(Duration::minutes(90));
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"1:30:00\"");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The rendered components always reassemble into the original span
        #[test]
        fn display_reassembles(secs in 0i64..(30 * 24 * 3600)) {
            let rendered = TravelTime::new(Duration::seconds(secs)).to_string();
            let parts: Vec<&str> = rendered.split(':').collect();
            prop_assert_eq!(parts.len(), 3);
            prop_assert_eq!(parts[1].len(), 2);
            prop_assert_eq!(parts[2].len(), 2);

            let h: i64 = parts[0].parse().unwrap();
            let m: i64 = parts[1].parse().unwrap();
            let s: i64 = parts[2].parse().unwrap();
            prop_assert!(m < 60 && s < 60);
            prop_assert_eq!(h * 3600 + m * 60 + s, secs);
        }
    }
}
