//! Route planner using depth-first search.
//!
//! This module implements the core planning algorithm that answers:
//! "Which flight combinations take me and my bags from here to there?"
//!
//! The search enumerates every simple path through the flight graph,
//! keeping only flights that accept the passenger's bags and layovers
//! that fit the transfer window, then ranks the routes by price.

mod concurrent;
mod config;
mod rank;
mod search;
mod transfer;

pub use concurrent::search_concurrent;
pub use config::SearchConfig;
pub use rank::rank_routes;
pub use search::{Planner, SearchError, SearchRequest, SearchResult};
pub use transfer::{BoundaryPolicy, TransferWindow};
