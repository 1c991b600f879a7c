//! 2D drawing coordinates.

use crate::tolerance::round_coordinate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Neg;

/// A 2D point in machine length units (mm).
///
/// Both components are rounded to [`crate::tolerance::POINT_PRECISION`]
/// decimal places when the point is built, so equality is exact: two points
/// are equal iff their rounded components are equal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Create a point, rounding both components
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: round_coordinate(x),
            y: round_coordinate(y),
        }
    }

    /// The origin `(0, 0)`
    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// X component
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y component
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Self::Output {
        Point::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawPoint {
            x: f64,
            y: f64,
        }

        let raw = RawPoint::deserialize(deserializer)?;
        Ok(Point::new(raw.x, raw.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_rounds_on_construction() {
        let p = Point::new(1.004, 2.996);
        assert_eq!(p.x(), 1.0);
        assert_eq!(p.y(), 3.0);
    }

    #[test]
    fn test_point_equality_after_rounding() {
        assert_eq!(Point::new(1.001, 1.0), Point::new(0.999, 1.0));
        assert_ne!(Point::new(1.01, 1.0), Point::new(1.0, 1.0));
    }

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn test_negation_and_display() {
        let p = -Point::new(12.5, -3.0);
        assert_eq!(p, Point::new(-12.5, 3.0));
        assert_eq!(p.to_string(), "[-12.5,3]");
    }

    #[test]
    fn test_deserialize_rounds() {
        let p: Point = serde_json::from_str(r#"{"x": 1.2345, "y": -0.001}"#).unwrap();
        assert_eq!(p, Point::new(1.23, 0.0));
    }
}
