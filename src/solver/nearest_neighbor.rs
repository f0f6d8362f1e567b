//! Nearest-neighbor constructive heuristic.
//!
//! Builds the route greedily: always drive to the closest stop not yet
//! visited. The walk starts at stop 0 (not the school) — preserved behavior
//! from the original program; the choice of start affects solution quality
//! but not correctness.
//!
//! # Complexity
//!
//! O(N²) time, O(N) extra space for the visited partition.

use crate::distance::DistanceMatrix;
use crate::models::{Route, SolveResult};

/// Constructs a route with the nearest-neighbor heuristic.
///
/// Starts at stop 0 and repeatedly appends the nearest unvisited stop. The
/// scan runs over ascending ids with a strict less-than comparison, so ties
/// go to the lowest id and two calls on the same matrix always produce the
/// same route. The total includes both school legs. No optimality guarantee.
///
/// NaN distances never panic here: when every comparison fails, the first
/// unvisited candidate is taken and the garbage total propagates to the
/// caller.
///
/// # Examples
///
/// ```
/// use busroute::models::Point;
/// use busroute::distance::DistanceMatrix;
/// use busroute::solver::nearest_neighbor;
///
/// let stops = vec![
///     Point::new(1.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(2.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&stops, &Point::new(0.0, 0.0));
/// let result = nearest_neighbor(&dm);
/// // From stop 0 the closest is stop 2, then stop 1.
/// assert_eq!(result.route().stops(), &[0, 2, 1]);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix) -> SolveResult {
    let n = distances.num_stops();
    if n == 0 {
        return SolveResult::new(Route::empty(), 0.0);
    }

    let origin = distances.origin();
    let mut visited = vec![false; n];
    let mut stops = Vec::with_capacity(n);
    let mut current = 0;
    visited[0] = true;
    stops.push(0);
    let mut total = distances.get(origin, 0);

    while stops.len() < n {
        let mut best: Option<(usize, f64)> = None;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let d = distances.get(current, candidate);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((candidate, d));
            }
        }
        match best {
            Some((next, d)) => {
                visited[next] = true;
                stops.push(next);
                total += d;
                current = next;
            }
            None => break,
        }
    }

    total += distances.get(current, origin);
    SolveResult::new(Route::new(stops), total)
}
