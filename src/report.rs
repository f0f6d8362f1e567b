//! Text rendering of solve results.
//!
//! Pure functions of a [`SolveResult`]; the engine is never touched. Stops
//! are labelled `S1..Sn` (one-based, matching how the stops are shown to the
//! user) and the distance is formatted to two decimal places.

use std::fmt::Write;

use crate::models::SolveResult;

/// Renders the visiting order as `School -> S1 -> ... -> School` with the
/// total distance on a second line.
///
/// An empty route renders as `School -> School` with distance 0.00.
///
/// # Examples
///
/// ```
/// use busroute::models::{Route, SolveResult};
/// use busroute::report::route_summary;
///
/// let result = SolveResult::new(Route::new(vec![1, 0]), 12.345);
/// assert_eq!(
///     route_summary(&result),
///     "School -> S2 -> S1 -> School\nDistance: 12.35"
/// );
/// ```
pub fn route_summary(result: &SolveResult) -> String {
    let mut out = String::from("School");
    for &id in result.route().stops() {
        // Cannot fail when writing into a String.
        let _ = write!(out, " -> S{}", id + 1);
    }
    let _ = write!(out, " -> School\nDistance: {:.2}", result.total_distance());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Route;

    #[test]
    fn test_summary_labels_are_one_based() {
        let result = SolveResult::new(Route::new(vec![0, 4, 2]), 17.137962);
        assert_eq!(
            route_summary(&result),
            "School -> S1 -> S5 -> S3 -> School\nDistance: 17.14"
        );
    }

    #[test]
    fn test_summary_empty_route() {
        let result = SolveResult::new(Route::empty(), 0.0);
        assert_eq!(route_summary(&result), "School -> School\nDistance: 0.00");
    }

    #[test]
    fn test_summary_two_decimals() {
        let result = SolveResult::new(Route::new(vec![0]), 2.0);
        assert!(route_summary(&result).ends_with("Distance: 2.00"));
    }
}
