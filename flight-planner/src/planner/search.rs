//! Depth-first route enumeration.
//!
//! Finds every simple path of flights from an origin to a destination
//! where each flight takes the passenger's bags and each layover falls
//! inside the transfer window.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, trace};

use crate::domain::{AirportCode, DomainError, Flight, Route};
use crate::timetable::Timetable;

use super::config::SearchConfig;
use super::rank::rank_routes;
use super::transfer::TransferWindow;

/// Error from route search.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// The query was rejected before searching
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The search ran past its time budget
    #[error("search exceeded its time budget of {budget:?}")]
    Timeout { budget: std::time::Duration },

    /// A search worker stopped without producing results
    #[error("search worker failed: {0}")]
    Worker(String),

    /// A found path could not be finalized into a route
    #[error("found an inconsistent route: {0}")]
    InvalidRoute(#[from] DomainError),
}

/// Request for route search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    /// Airport the passenger starts from.
    pub origin: AirportCode,

    /// Airport the passenger wants to reach.
    pub destination: AirportCode,

    /// Number of checked bags.
    pub bags: u32,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(origin: AirportCode, destination: AirportCode, bags: u32) -> Self {
        Self {
            origin,
            destination,
            bags,
        }
    }

    /// Build a request from user input.
    ///
    /// Codes must be exactly 3 characters as given, with no surrounding
    /// whitespace, and are then upper-cased.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::planner::SearchRequest;
    ///
    /// let request = SearchRequest::parse("btw", "REJ", 1).unwrap();
    /// assert_eq!(request.origin.as_str(), "BTW");
    ///
    /// assert!(SearchRequest::parse("BT", "REJ", 0).is_err());
    /// assert!(SearchRequest::parse(" BTW ", "REJ", 0).is_err());
    /// ```
    pub fn parse(origin: &str, destination: &str, bags: u32) -> Result<Self, SearchError> {
        let code = |label: &str, value: &str| {
            AirportCode::parse(value)
                .and_then(|_| AirportCode::parse(&value.to_uppercase()))
                .map_err(|e| {
                    SearchError::InvalidQuery(format!(
                        "{label} {value:?} should be a three letter code ({e})"
                    ))
                })
        };

        Ok(Self::new(
            code("origin", origin)?,
            code("destination", destination)?,
            bags,
        ))
    }
}

/// Result of route search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Found routes, cheapest first.
    pub routes: Vec<Route>,

    /// Number of flights tried as extensions during search.
    pub routes_explored: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            routes_explored: 0,
        }
    }

    /// Finalize raw paths into routes and rank them.
    pub(super) fn from_paths(
        paths: Vec<Vec<Arc<Flight>>>,
        bags: u32,
        routes_explored: usize,
    ) -> Result<Self, SearchError> {
        let routes = paths
            .into_iter()
            .map(|flights| Route::new(flights, bags))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            routes: rank_routes(routes),
            routes_explored,
        })
    }
}

/// Point in time after which a search gives up.
#[derive(Debug, Clone, Copy)]
pub(super) struct Deadline {
    at: Instant,
    budget: std::time::Duration,
}

impl Deadline {
    pub(super) fn from_config(config: &SearchConfig) -> Option<Self> {
        config.time_budget.map(|budget| Self {
            at: Instant::now() + budget,
            budget,
        })
    }

    fn check(&self) -> Result<(), SearchError> {
        if Instant::now() >= self.at {
            return Err(SearchError::Timeout {
                budget: self.budget,
            });
        }
        Ok(())
    }
}

/// Recursive explorer for one search.
///
/// Every branch owns its own copy of the path taken so far, so sibling
/// branches never see each other's extensions.
pub(super) struct Explorer<'a> {
    timetable: &'a Timetable,
    window: TransferWindow,
    destination: AirportCode,
    bags: u32,
    deadline: Option<Deadline>,
    explored: usize,
}

impl<'a> Explorer<'a> {
    pub(super) fn new(
        timetable: &'a Timetable,
        request: &SearchRequest,
        window: TransferWindow,
        deadline: Option<Deadline>,
    ) -> Self {
        Self {
            timetable,
            window,
            destination: request.destination,
            bags: request.bags,
            deadline,
            explored: 0,
        }
    }

    /// Number of flights tried as extensions so far.
    pub(super) fn explored(&self) -> usize {
        self.explored
    }

    /// Returns true if `flight` can extend `path`.
    fn can_extend(&self, path: &[Arc<Flight>], flight: &Flight) -> bool {
        if !flight.accepts_bags(self.bags) {
            return false;
        }

        match path.last() {
            // The first flight has no layover to respect
            None => true,
            Some(previous) => {
                self.window.allows(previous.arrival, flight.departure)
                    && !path.iter().any(|f| f.origin == flight.destination)
            }
        }
    }

    /// Flights that can extend `path` from `airport`, in timetable order.
    pub(super) fn candidates(
        &self,
        airport: &AirportCode,
        path: &[Arc<Flight>],
    ) -> Vec<Arc<Flight>> {
        self.timetable
            .outgoing(airport)
            .iter()
            .filter(|flight| self.can_extend(path, flight))
            .cloned()
            .collect()
    }

    /// Enumerate every completion of `path`, which ends at `airport`.
    ///
    /// An empty `path` starts a search from `airport`.
    pub(super) fn explore(
        &mut self,
        airport: AirportCode,
        path: &[Arc<Flight>],
    ) -> Result<Vec<Vec<Arc<Flight>>>, SearchError> {
        if let Some(deadline) = &self.deadline {
            deadline.check()?;
        }

        let mut found = Vec::new();

        for flight in self.candidates(&airport, path) {
            self.explored += 1;

            let mut extended = Vec::with_capacity(path.len() + 1);
            extended.extend_from_slice(path);
            extended.push(flight.clone());

            if flight.destination == self.destination {
                trace!(
                    legs = extended.len(),
                    last = %flight.flight_no,
                    "Reached destination"
                );
                found.push(extended);
            } else {
                found.extend(self.explore(flight.destination, &extended)?);
            }
        }

        Ok(found)
    }
}

/// Route planner over a loaded timetable.
pub struct Planner<'a> {
    timetable: &'a Timetable,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(timetable: &'a Timetable, config: &'a SearchConfig) -> Self {
        Self { timetable, config }
    }

    /// Search for every route matching the request, cheapest first.
    ///
    /// Routes with equal price keep the order they were found in. An
    /// origin missing from the timetable simply yields no routes.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        let (paths, explored) = self.enumerate(request)?;
        SearchResult::from_paths(paths, request.bags, explored)
    }

    /// Enumerate raw flight paths in discovery order, without ranking.
    ///
    /// Returns the paths and the number of extensions tried.
    pub fn enumerate(
        &self,
        request: &SearchRequest,
    ) -> Result<(Vec<Vec<Arc<Flight>>>, usize), SearchError> {
        if !self.timetable.has_departures(&request.origin) {
            debug!(origin = %request.origin, "Origin has no departures");
        }

        let deadline = Deadline::from_config(self.config);
        let mut explorer = Explorer::new(
            self.timetable,
            request,
            self.config.transfer_window(),
            deadline,
        );

        let paths = explorer.explore(request.origin, &[])?;

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            bags = request.bags,
            routes = paths.len(),
            explored = explorer.explored(),
            "Route enumeration complete"
        );

        Ok((paths, explorer.explored()))
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
