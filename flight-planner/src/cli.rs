//! Command-line interface.
//!
//! `flight-planner <FILE> <ORIGIN> <DESTINATION> [--bags N]` loads the
//! timetable, searches every route and renders the result.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use crate::output::{OutputFormat, render};
use crate::planner::{
    BoundaryPolicy, Planner, SearchConfig, SearchError, SearchRequest, search_concurrent,
};
use crate::timetable::{Timetable, TimetableError};

/// Find every flight route between two airports, cheapest first
#[derive(Debug, Parser)]
#[command(name = "flight-planner")]
#[command(version)]
#[command(about = "Finds all possible routes between origin and destination for a number of bags")]
pub struct Args {
    /// CSV file with the flight timetable
    pub file: PathBuf,

    /// Origin airport (three letter code)
    pub origin: String,

    /// Destination airport (three letter code)
    pub destination: String,

    /// Number of checked bags
    #[arg(short, long, default_value_t = 0)]
    pub bags: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Also accept layovers of exactly 1 or exactly 6 hours
    #[arg(long)]
    pub inclusive_transfer: bool,

    /// Give up if the search takes longer than this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Explore each first flight on a separate worker thread
    #[arg(long)]
    pub parallel: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Search settings selected by the flags.
    pub fn search_config(&self) -> SearchConfig {
        let boundary = if self.inclusive_transfer {
            BoundaryPolicy::Inclusive
        } else {
            BoundaryPolicy::Exclusive
        };

        SearchConfig {
            boundary,
            time_budget: self.timeout_secs.map(std::time::Duration::from_secs),
            concurrent: self.parallel,
            ..SearchConfig::default()
        }
    }
}

/// Errors that end a command-line run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The timetable could not be loaded
    #[error(transparent)]
    Timetable(#[from] TimetableError),

    /// The query was rejected or the search failed
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Results could not be serialized
    #[error("cannot render results: {0}")]
    Render(#[from] serde_json::Error),
}

/// Run one search and return the rendered output.
///
/// An empty result is not an error: it renders as a "no options" sentence.
pub async fn run(args: &Args) -> Result<String, CliError> {
    let request = SearchRequest::parse(&args.origin, &args.destination, args.bags)?;
    let config = args.search_config();
    let timetable = Timetable::load(&args.file)?;

    let result = if config.concurrent {
        search_concurrent(Arc::new(timetable), request, &config).await?
    } else {
        Planner::new(&timetable, &config).search(&request)?
    };

    info!(
        origin = %request.origin,
        destination = %request.destination,
        bags = request.bags,
        routes = result.routes.len(),
        explored = result.routes_explored,
        "Search complete"
    );

    Ok(render(
        &result.routes,
        request.origin,
        request.destination,
        args.format,
    )?)
}
