//! Route evaluator that scores a visiting order.

use crate::distance::DistanceMatrix;

/// Computes the total round-trip cost of a visiting order.
///
/// The cost of a route `r` over `n` stops is
/// `d(school, r[0]) + Σ d(r[i], r[i+1]) + d(r[n-1], school)`; the two school
/// legs are always included. Pure function of the route, O(n) per call.
///
/// # Examples
///
/// ```
/// use busroute::models::Point;
/// use busroute::distance::DistanceMatrix;
/// use busroute::evaluation::RouteEvaluator;
///
/// let stops = vec![Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
/// let dm = DistanceMatrix::from_points(&stops, &Point::new(0.0, 0.0));
/// let eval = RouteEvaluator::new(&dm);
/// // school → (1,0) → (2,0) → school = 1 + 1 + 2
/// assert!((eval.total_distance(&[0, 1]) - 4.0).abs() < 1e-10);
/// ```
pub struct RouteEvaluator<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator over the given matrix.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Total distance of the route described by `stops`, school legs included.
    ///
    /// An empty route costs 0: the bus never leaves the school.
    pub fn total_distance(&self, stops: &[usize]) -> f64 {
        let Some((&first, rest)) = stops.split_first() else {
            return 0.0;
        };
        let origin = self.distances.origin();
        let mut total = self.distances.get(origin, first);
        let mut prev = first;
        for &next in rest {
            total += self.distances.get(prev, next);
            prev = next;
        }
        total + self.distances.get(prev, origin)
    }
}
