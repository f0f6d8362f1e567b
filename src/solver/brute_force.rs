//! Exact brute-force solver.
//!
//! # Algorithm
//!
//! Enumerates every permutation of the stop ids in lexicographic order,
//! scores each with [`RouteEvaluator`], and keeps the first strict minimum.
//! The generator is iterative (classic next-permutation), so stack depth is
//! constant regardless of N.
//!
//! # Complexity
//!
//! O(N!·N). There is no internal cap on N: callers must bound instance size
//! themselves, since runtime grows factorially.

use crate::distance::DistanceMatrix;
use crate::evaluation::RouteEvaluator;
use crate::models::{Route, SolveResult};

/// Finds the globally shortest route by exhaustive search.
///
/// Ties are broken toward the permutation encountered first in lexicographic
/// order over the stop ids, so the result is deterministic. N=0 yields an
/// empty route with distance 0; N=1 yields the single stop with the full
/// round-trip distance.
///
/// # Examples
///
/// ```
/// use busroute::models::Point;
/// use busroute::distance::DistanceMatrix;
/// use busroute::solver::brute_force;
///
/// let stops = vec![
///     Point::new(0.0, 2.0),
///     Point::new(0.0, 1.0),
///     Point::new(0.0, 3.0),
/// ];
/// let dm = DistanceMatrix::from_points(&stops, &Point::new(0.0, 0.0));
/// let result = brute_force(&dm);
/// // Stops lie on a line: out and back is optimal, 3 + 3 = 6.
/// assert!((result.total_distance() - 6.0).abs() < 1e-10);
/// ```
pub fn brute_force(distances: &DistanceMatrix) -> SolveResult {
    let n = distances.num_stops();
    if n == 0 {
        return SolveResult::new(Route::empty(), 0.0);
    }

    let evaluator = RouteEvaluator::new(distances);
    let mut perm: Vec<usize> = (0..n).collect();
    let mut best = perm.clone();
    let mut best_distance = evaluator.total_distance(&perm);

    while next_permutation(&mut perm) {
        let distance = evaluator.total_distance(&perm);
        if distance < best_distance {
            best_distance = distance;
            best.copy_from_slice(&perm);
        }
    }

    SolveResult::new(Route::new(best), best_distance)
}

/// Advances `seq` to its lexicographic successor in place.
///
/// Returns `false` once `seq` is the last (descending) permutation.
fn next_permutation(seq: &mut [usize]) -> bool {
    let n = seq.len();
    if n < 2 {
        return false;
    }
    // Longest descending suffix starts at `pivot + 1`.
    let mut pivot = n - 1;
    while pivot > 0 && seq[pivot - 1] >= seq[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }
    // Smallest suffix element greater than the pivot value.
    let mut j = n - 1;
    while seq[j] <= seq[pivot - 1] {
        j -= 1;
    }
    seq.swap(pivot - 1, j);
    seq[pivot..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    #[test]
    fn test_next_permutation_order() {
        let mut seq = vec![0, 1, 2];
        let mut seen = vec![seq.clone()];
        while next_permutation(&mut seq) {
            seen.push(seq.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_next_permutation_degenerate() {
        let mut empty: Vec<usize> = vec![];
        assert!(!next_permutation(&mut empty));
        let mut single = vec![0];
        assert!(!next_permutation(&mut single));
    }

    #[test]
    fn test_no_stops() {
        let dm = DistanceMatrix::from_points(&[], &Point::new(0.0, 0.0));
        let result = brute_force(&dm);
        assert!(result.route().is_empty());
        assert_eq!(result.total_distance(), 0.0);
    }

    #[test]
    fn test_single_stop() {
        let stops = vec![Point::new(3.0, 4.0)];
        let dm = DistanceMatrix::from_points(&stops, &Point::new(0.0, 0.0));
        let result = brute_force(&dm);
        assert_eq!(result.route().stops(), &[0]);
        assert!((result.total_distance() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_finds_global_minimum() {
        // School (0,0), five stops; optimum 17.13796241745877 via
        // 0 → 1 → 4 → 2 → 3 (verified against the convex-hull order with
        // the single interior stop inserted on its cheapest edge).
        let stops = vec![
            Point::new(1.0, 1.0),
            Point::new(2.0, 4.0),
            Point::new(5.0, 3.0),
            Point::new(6.0, 1.0),
            Point::new(3.0, 5.0),
        ];
        let dm = DistanceMatrix::from_points(&stops, &Point::new(0.0, 0.0));
        let result = brute_force(&dm);
        assert!((result.total_distance() - 17.13796241745877).abs() < 1e-9);
        assert!(result.route().is_permutation());
        // Lexicographic tie-break: the forward traversal comes before its
        // reverse in enumeration order.
        assert_eq!(result.route().stops(), &[0, 1, 4, 2, 3]);
    }

    #[test]
    fn test_tie_break_is_first_in_enumeration_order() {
        // Four stops at the corners of a square: both rotations of the
        // perimeter tie, so the lexicographically first must win.
        let stops = vec![
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 0.0),
        ];
        let dm = DistanceMatrix::from_points(&stops, &Point::new(0.0, 0.0));
        let a = brute_force(&dm);
        let b = brute_force(&dm);
        assert_eq!(a.route().stops(), b.route().stops());
    }

    #[test]
    fn test_nan_input_does_not_panic() {
        let stops = vec![Point::new(f64::NAN, 0.0), Point::new(1.0, 1.0)];
        let dm = DistanceMatrix::from_points(&stops, &Point::new(0.0, 0.0));
        let result = brute_force(&dm);
        assert_eq!(result.route().len(), 2);
        assert!(result.total_distance().is_nan());
    }
}
