//! # Orientation Predicate
//!
//! Signed volume of four points, computed as the determinant of the 4x4
//! matrix whose rows are `[x, y, z, 1]`.
//!
//! ## Sign Convention
//!
//! The determinant equals `-((p1 - p0) × (p2 - p0)) · (p3 - p0)`:
//!
//! - negative: `p3` lies on the side from which `(p0, p1, p2)` winds
//!   counter-clockwise (in front of the triangle's right-hand normal)
//! - positive: `p3` lies behind the triangle
//! - zero: the four points are coplanar
//!
//! Hull faces are wound counter-clockwise seen from outside, so every point
//! inside the hull yields a positive determinant against every face.

use super::point::Point;
use glam::DMat4;

/// Determinant of the matrix with rows `[x_i, y_i, z_i, 1]`.
///
/// # Examples
/// ```
/// use incremental_hull::geometry::{orientation, Point};
/// let det = orientation(Point::ZERO, Point::X, Point::Y, Point::Z);
/// assert_eq!(det, -1.0);
/// ```
#[inline]
pub fn orientation(p0: Point, p1: Point, p2: Point, p3: Point) -> f64 {
    // det(M) == det(M^T), so the points can go in as columns
    DMat4::from_cols(
        p0.extend(1.0),
        p1.extend(1.0),
        p2.extend(1.0),
        p3.extend(1.0),
    )
    .determinant()
}

/// Inclusive visibility test of `point` against the triangle `(a, b, c)`.
///
/// Returns true unless the determinant is strictly greater than `tolerance`;
/// points on the triangle's plane see it.
///
/// # Examples
/// ```
/// use incremental_hull::geometry::{sees_points, Point};
/// let (a, b, c) = (Point::ZERO, Point::X, Point::Y);
/// assert!(sees_points(a, b, c, Point::Z, f64::EPSILON));
/// assert!(sees_points(a, b, c, Point::new(0.3, 0.3, 0.0), f64::EPSILON));
/// assert!(!sees_points(a, b, c, -Point::Z, f64::EPSILON));
/// ```
#[inline]
pub fn sees_points(a: Point, b: Point, c: Point, point: Point, tolerance: f64) -> bool {
    orientation(a, b, c, point) <= tolerance
}
