//! Concurrent route search.
//!
//! Subtrees below different first flights never share state, so each
//! first flight is explored on its own blocking worker. Results are
//! collected in first-flight order, which keeps discovery order (and
//! therefore tie order after ranking) identical to the sequential search.

use std::sync::Arc;

use futures::future::join_all;
use tracing::debug;

use super::config::SearchConfig;
use super::search::{Deadline, Explorer, SearchError, SearchRequest, SearchResult};
use crate::timetable::Timetable;

/// Search for every route matching the request, fanning out the first
/// level of the search across worker threads.
pub async fn search_concurrent(
    timetable: Arc<Timetable>,
    request: SearchRequest,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    let window = config.transfer_window();
    let deadline = Deadline::from_config(config);

    let first_legs =
        Explorer::new(&timetable, &request, window, deadline).candidates(&request.origin, &[]);

    if first_legs.is_empty() {
        debug!(origin = %request.origin, "No usable departures from origin");
        return Ok(SearchResult::empty());
    }

    debug!(workers = first_legs.len(), "Spawning search workers");

    let workers = first_legs.into_iter().map(|flight| {
        let timetable = Arc::clone(&timetable);
        tokio::task::spawn_blocking(move || {
            let path = vec![flight.clone()];
            if flight.destination == request.destination {
                return Ok((vec![path], 1));
            }

            let mut explorer = Explorer::new(&timetable, &request, window, deadline);
            let found = explorer.explore(flight.destination, &path)?;
            Ok::<_, SearchError>((found, explorer.explored() + 1))
        })
    });

    let mut paths = Vec::new();
    let mut explored = 0;

    for result in join_all(workers).await {
        let (found, count) = result.map_err(|e| SearchError::Worker(e.to_string()))??;
        paths.extend(found);
        explored += count;
    }

    debug!(
        routes = paths.len(),
        explored, "Concurrent route enumeration complete"
    );

    SearchResult::from_paths(paths, request.bags, explored)
}
