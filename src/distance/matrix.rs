//! Dense distance matrix.

use crate::models::Point;

/// A dense `(N+1)×(N+1)` Euclidean distance matrix stored in row-major order.
///
/// Indices `0..N-1` are the student stops in input order; index `N` is the
/// school. The matrix is symmetric with a zero diagonal, built once per
/// solve call and read-only afterwards.
///
/// Coordinates are not validated: NaN or infinite inputs produce NaN or
/// infinite distances, which propagate through evaluation unchanged.
///
/// # Examples
///
/// ```
/// use busroute::models::Point;
/// use busroute::distance::DistanceMatrix;
///
/// let stops = vec![Point::new(3.0, 4.0), Point::new(0.0, 8.0)];
/// let dm = DistanceMatrix::from_points(&stops, &Point::new(0.0, 0.0));
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.origin(), 2);
/// assert!((dm.get(dm.origin(), 0) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the distance matrix for the given stops and school location.
    ///
    /// O(N²) time and space. The school lands at index `num_stops()`.
    pub fn from_points(stops: &[Point], school: &Point) -> Self {
        let size = stops.len() + 1;
        let mut dm = Self {
            data: vec![0.0; size * size],
            size,
        };
        let point_at = |i: usize| if i == stops.len() { school } else { &stops[i] };
        for i in 0..size {
            for j in (i + 1)..size {
                let d = point_at(i).distance_to(point_at(j));
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance between locations `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix (stops plus the school).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the school (one past the last stop id).
    pub fn origin(&self) -> usize {
        self.size - 1
    }

    /// Number of student stops (excluding the school).
    pub fn num_stops(&self) -> usize {
        self.size - 1
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
