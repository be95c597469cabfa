//! Flight timetable.
//!
//! A `Timetable` is built once from a CSV source and is read-only
//! afterwards. Flights are indexed by origin airport so the planner can
//! ask "what leaves from here?" without scanning the whole table.

mod error;
mod load;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::domain::{AirportCode, Flight};

pub use error::TimetableError;
pub use load::COLUMNS;

/// Immutable collection of flights, indexed by origin airport.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    /// Map from origin airport to its departures, in input order.
    departures: HashMap<AirportCode, Vec<Arc<Flight>>>,
    flight_count: usize,
}

impl Timetable {
    /// Build a timetable from already validated flights.
    ///
    /// Departures from each airport keep the order they are given in.
    pub fn from_flights(flights: impl IntoIterator<Item = Flight>) -> Self {
        let mut departures: HashMap<AirportCode, Vec<Arc<Flight>>> = HashMap::new();
        let mut flight_count = 0;

        for flight in flights {
            departures
                .entry(flight.origin)
                .or_default()
                .push(Arc::new(flight));
            flight_count += 1;
        }

        Self {
            departures,
            flight_count,
        }
    }

    /// Load a timetable from a CSV file.
    ///
    /// # Errors
    ///
    /// - [`TimetableError::SourceUnavailable`] if the file cannot be opened
    /// - [`TimetableError::MalformedInput`] if any record is invalid
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TimetableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TimetableError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let timetable = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            flights = timetable.len(),
            airports = timetable.departures.len(),
            "Loaded timetable"
        );
        Ok(timetable)
    }

    /// Load a timetable from CSV data.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::domain::AirportCode;
    /// use flight_planner::timetable::Timetable;
    ///
    /// let csv = concat!(
    ///     "flight_no,origin,destination,departure,arrival,base_price,bag_price,bags_allowed\n",
    ///     "XC233,BTW,WTF,2021-09-02T05:50:00,2021-09-02T08:20:00,67.0,7,2\n",
    /// );
    /// let timetable = Timetable::from_reader(csv.as_bytes()).unwrap();
    ///
    /// let btw = AirportCode::parse("BTW").unwrap();
    /// assert_eq!(timetable.outgoing(&btw).len(), 1);
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TimetableError> {
        load::read_flights(reader).map(Self::from_flights)
    }

    /// Returns the flights departing from `airport`.
    ///
    /// Unknown airports and airports without departures give an empty slice.
    pub fn outgoing(&self, airport: &AirportCode) -> &[Arc<Flight>] {
        self.departures
            .get(airport)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if any flight departs from `airport`.
    pub fn has_departures(&self, airport: &AirportCode) -> bool {
        self.departures.contains_key(airport)
    }

    /// Returns the total number of flights.
    pub fn len(&self) -> usize {
        self.flight_count
    }

    /// Returns true if the timetable has no flights.
    pub fn is_empty(&self) -> bool {
        self.flight_count == 0
    }
}
