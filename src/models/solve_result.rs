//! Solve result type.

use serde::{Deserialize, Serialize};

use super::Route;

/// The outcome of one solve call: a visiting order and its total distance.
///
/// The total distance covers the full round trip, including the
/// school-to-first-stop and last-stop-to-school legs. A result is built
/// fresh by each solve invocation and is immutable once returned.
///
/// # Examples
///
/// ```
/// use busroute::models::{Route, SolveResult};
///
/// let result = SolveResult::new(Route::new(vec![1, 0]), 12.5);
/// assert_eq!(result.route().stops(), &[1, 0]);
/// assert_eq!(result.total_distance(), 12.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    route: Route,
    total_distance: f64,
}

impl SolveResult {
    /// Creates a result from a route and its evaluated total distance.
    pub fn new(route: Route, total_distance: f64) -> Self {
        Self {
            route,
            total_distance,
        }
    }

    /// The visiting order.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Total round-trip distance, both school legs included.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }
}
