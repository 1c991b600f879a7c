//! Coordinate comparison tolerance.
//!
//! Every position and depth check goes through [`coordinate_equals`] so the
//! "already there" decisions agree with each other.

/// Largest difference at which two coordinates are considered equal (mm).
pub const COORDINATE_EPSILON: f64 = 0.001;

/// Decimal places kept by [`crate::Point`] components.
pub const POINT_PRECISION: i32 = 2;

/// Compare two coordinates using [`COORDINATE_EPSILON`].
pub fn coordinate_equals(a: f64, b: f64) -> bool {
    (a - b).abs() <= COORDINATE_EPSILON
}

/// Round a coordinate to [`POINT_PRECISION`] decimal places.
///
/// Negative zero is normalized to zero.
pub fn round_coordinate(value: f64) -> f64 {
    let scale = 10f64.powi(POINT_PRECISION);
    (value * scale).round() / scale + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_equals_within_epsilon() {
        assert!(coordinate_equals(1.0, 1.0));
        assert!(coordinate_equals(1.0, 1.0005));
        assert!(coordinate_equals(-3.2, -3.2009));
        assert!(!coordinate_equals(1.0, 1.01));
    }

    #[test]
    fn test_round_coordinate() {
        assert_eq!(round_coordinate(1.234), 1.23);
        assert_eq!(round_coordinate(1.235_1), 1.24);
        assert_eq!(round_coordinate(-0.004), 0.0);
        assert_eq!(round_coordinate(10.0), 10.0);
    }
}
