//! Plane coordinate type.

use serde::{Deserialize, Serialize};

/// A location on the plane: a student stop or the school itself.
///
/// Points carry no identity of their own; a stop is identified by its index
/// in the input slice (its node id). Coordinates are not validated — NaN or
/// infinite values propagate into distances rather than being rejected.
///
/// # Examples
///
/// ```
/// use busroute::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(2.0, 4.0);
        assert_eq!(p.x(), 2.0);
        assert_eq!(p.y(), 4.0);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Point::new(1.5, -2.5);
        assert_eq!(p.distance_to(&p), 0.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_from_tuple() {
        let p: Point = (3.0, 5.0).into();
        assert_eq!(p, Point::new(3.0, 5.0));
    }

    #[test]
    fn test_nan_coordinates_propagate() {
        let a = Point::new(f64::NAN, 0.0);
        let b = Point::new(1.0, 1.0);
        assert!(a.distance_to(&b).is_nan());
    }
}
