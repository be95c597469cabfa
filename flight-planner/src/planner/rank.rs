//! Route ranking for search results.

use crate::domain::Route;

/// Rank routes by total price, cheapest first.
///
/// The sort is stable: routes with the same price stay in the order
/// the search discovered them.
pub fn rank_routes(mut routes: Vec<Route>) -> Vec<Route> {
    routes.sort_by(|a, b| a.total_price().total_cmp(&b.total_price()));
    routes
}
