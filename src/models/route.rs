//! Route type.

use serde::{Deserialize, Serialize};

/// An ordered sequence of stop ids describing the visiting order.
///
/// A route holds a permutation of the `N` stop ids `0..N-1`. The school is
/// not stored: it is implied as predecessor of the first stop and successor
/// of the last.
///
/// # Examples
///
/// ```
/// use busroute::models::Route;
///
/// let route = Route::new(vec![2, 0, 1]);
/// assert_eq!(route.len(), 3);
/// assert!(route.is_permutation());
/// assert_eq!(route.stops(), &[2, 0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    stops: Vec<usize>,
}

impl Route {
    /// Creates a route from a sequence of stop ids.
    pub fn new(stops: Vec<usize>) -> Self {
        Self { stops }
    }

    /// Creates an empty route (the N=0 degenerate case).
    pub fn empty() -> Self {
        Self { stops: Vec::new() }
    }

    /// Returns the stop ids in visiting order.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Number of stops on this route.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if this route visits no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Returns `true` if this route is a permutation of `0..len()`.
    ///
    /// Every valid route satisfies this; solvers use it as a sanity check
    /// and tests assert it directly.
    pub fn is_permutation(&self) -> bool {
        let n = self.stops.len();
        let mut seen = vec![false; n];
        for &id in &self.stops {
            if id >= n || seen[id] {
                return false;
            }
            seen[id] = true;
        }
        true
    }
}
