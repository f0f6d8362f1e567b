//! Strategy selection and the solve entry point.
//!
//! The engine is the boundary the presentation layer talks to: it takes an
//! immutable snapshot of the input (stops plus school), builds one distance
//! matrix, and dispatches to the selected solver. Each call is stateless and
//! owns its buffers; nothing is shared between invocations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::distance::DistanceMatrix;
use crate::models::{Point, SolveResult};
use crate::solver::{brute_force, nearest_neighbor};

/// Solving mode: exact search or the greedy heuristic.
///
/// Exactly two strategies are recognized. Text selectors (the original
/// program's combo-box labels, or kebab-case equivalents) parse via
/// [`FromStr`]; anything else is rejected with [`ParseStrategyError`].
///
/// # Examples
///
/// ```
/// use busroute::engine::Strategy;
///
/// assert_eq!("Brute Force".parse::<Strategy>().unwrap(), Strategy::Exact);
/// assert_eq!(
///     "nearest-neighbor".parse::<Strategy>().unwrap(),
///     Strategy::NearestNeighbor,
/// );
/// assert!("simulated annealing".parse::<Strategy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Brute-force enumeration of all N! visiting orders.
    Exact,
    /// Greedy nearest-neighbor construction from stop 0.
    NearestNeighbor,
}

/// Unrecognized strategy selector.
///
/// Fatal to the call that produced it; retrying with the same text cannot
/// succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy {0:?}, expected \"brute-force\" or \"nearest-neighbor\"")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" | "brute force" | "brute-force" => Ok(Strategy::Exact),
            "nearest neighbor" | "nearest-neighbor" => Ok(Strategy::NearestNeighbor),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// Computes a visiting order for `stops` starting and ending at `school`.
///
/// Builds the distance matrix once, then delegates to the solver selected by
/// `strategy`. Total over every input size: zero stops yield an empty route
/// with distance 0 rather than an error. Coordinate validity is the caller's
/// responsibility — NaN or infinite coordinates produce a nonsensical but
/// non-panicking result.
///
/// The exact strategy runs in O(N!·N) with no internal cap on N; callers
/// needing responsiveness must bound N or run the call on a worker of their
/// own.
///
/// # Examples
///
/// ```
/// use busroute::engine::{solve, Strategy};
/// use busroute::models::Point;
///
/// let stops = vec![Point::new(1.0, 1.0), Point::new(2.0, 4.0)];
/// let school = Point::new(0.0, 0.0);
///
/// let result = solve(&stops, &school, Strategy::Exact);
/// assert_eq!(result.route().len(), 2);
/// assert!(result.total_distance() > 0.0);
/// ```
pub fn solve(stops: &[Point], school: &Point, strategy: Strategy) -> SolveResult {
    let distances = DistanceMatrix::from_points(stops, school);
    match strategy {
        Strategy::Exact => brute_force(&distances),
        Strategy::NearestNeighbor => nearest_neighbor(&distances),
    }
}
