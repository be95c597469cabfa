//! Rendering of search results.
//!
//! Routes are rendered either as pretty-printed JSON or as a plain text
//! itinerary. An empty result is never rendered as an empty payload: the
//! caller gets a sentence saying there are no options instead.

mod dto;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::domain::{AirportCode, Flight, Route, format_timestamp};

pub use dto::{FlightResult, RouteResult};

/// Output format for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of routes
    #[default]
    Json,
    /// One summary line per route followed by its flights
    Text,
}

/// Sentence shown when a search finds nothing.
pub fn no_options_message(origin: AirportCode, destination: AirportCode) -> String {
    format!("There are no options for such a journey from {origin} to {destination}")
}

/// Render routes in the requested format.
///
/// Empty input renders the "no options" sentence in every format.
pub fn render(
    routes: &[Route],
    origin: AirportCode,
    destination: AirportCode,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    if routes.is_empty() {
        return Ok(no_options_message(origin, destination));
    }

    match format {
        OutputFormat::Json => render_json(routes),
        OutputFormat::Text => Ok(render_text(routes)),
    }
}

/// Render routes as a JSON array indented by four spaces.
pub fn render_json(routes: &[Route]) -> Result<String, serde_json::Error> {
    let results: Vec<RouteResult> = routes.iter().map(RouteResult::from_route).collect();

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    results.serialize(&mut serializer)?;

    // serde_json only ever writes UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Render routes as a human readable itinerary.
pub fn render_text(routes: &[Route]) -> String {
    let mut out = String::new();

    for (i, route) in routes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&summary_line(route));
        out.push('\n');
        for flight in route.flights() {
            out.push_str("  ");
            out.push_str(&schedule_line(flight));
            out.push('\n');
        }
    }

    out
}

/// One-line summary of a route's figures.
pub fn summary_line(route: &Route) -> String {
    let via: Vec<&str> = route
        .flights()
        .iter()
        .map(|f| f.origin.as_str())
        .collect();

    format!(
        "{} -> {}: {} flight(s) via {} | total {:.2} | {} | {} bag(s) allowed",
        route.origin(),
        route.destination(),
        route.flight_count(),
        via.join(", "),
        route.total_price(),
        route.travel_time(),
        route.bags_allowed(),
    )
}

/// One-line schedule summary for a flight.
pub fn schedule_line(flight: &Flight) -> String {
    format!(
        "{}: {} ({}) -> ({}) {} (allowed {} bag(s))",
        flight.flight_no,
        flight.origin,
        format_timestamp(&flight.departure),
        format_timestamp(&flight.arrival),
        flight.destination,
        flight.bags_allowed,
    )
}
