//! Thin wrapper around `glam::DVec3` shared across kernel modules.
//!
//! `PointKey` gives points an exact identity: two keys are equal iff their
//! coordinates are bitwise equal floats (after folding `-0.0` into `0.0`),
//! and keys are totally ordered so they can live in ordered collections.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

pub use glam::DVec3 as Point;

// =============================================================================
// POINT KEY
// =============================================================================

/// Exact, totally ordered identity of a point.
///
/// Only finite coordinates are meaningful; the hull builder rejects NaN and
/// infinite input before any key is created.
///
/// # Examples
/// ```
/// use incremental_hull::geometry::{Point, PointKey};
/// let a = PointKey::new(Point::new(0.0, 1.0, 2.0));
/// let b = PointKey::new(Point::new(-0.0, 1.0, 2.0));
/// assert_eq!(a, b);
/// assert!(a < PointKey::new(Point::new(0.0, 1.0, 3.0)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PointKey(Point);

impl PointKey {
    /// Wraps a point, normalizing signed zeros.
    pub fn new(point: Point) -> Self {
        // -0.0 + 0.0 == +0.0
        Self(point + Point::ZERO)
    }

    /// Returns the wrapped coordinates.
    #[inline]
    pub fn point(self) -> Point {
        self.0
    }

    fn bits(&self) -> [u64; 3] {
        [self.0.x.to_bits(), self.0.y.to_bits(), self.0.z.to_bits()]
    }
}

impl From<Point> for PointKey {
    fn from(point: Point) -> Self {
        Self::new(point)
    }
}

impl PartialEq for PointKey {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for PointKey {}

impl PartialOrd for PointKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PointKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .x
            .total_cmp(&other.0.x)
            .then_with(|| self.0.y.total_cmp(&other.0.y))
            .then_with(|| self.0.z.total_cmp(&other.0.z))
    }
}

impl Hash for PointKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

// =============================================================================
// BOUNDING BOX
// =============================================================================

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Point,
    /// Maximum corner.
    pub max: Point,
}

impl BoundingBox {
    /// Creates a box from explicit corners.
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates an inverted box that any `expand` call will overwrite.
    pub fn empty() -> Self {
        Self {
            min: Point::splat(f64::INFINITY),
            max: Point::splat(f64::NEG_INFINITY),
        }
    }

    /// Smallest box containing every point of the iterator.
    ///
    /// # Examples
    /// ```
    /// use incremental_hull::geometry::{BoundingBox, Point};
    /// let bbox = BoundingBox::from_points([Point::ZERO, Point::new(1.0, -2.0, 3.0)]);
    /// assert_eq!(bbox.min, Point::new(0.0, -2.0, 0.0));
    /// assert_eq!(bbox.max, Point::new(1.0, 0.0, 3.0));
    /// ```
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut bbox = Self::empty();
        for p in points {
            bbox.expand(p);
        }
        bbox
    }

    /// Grows the box to contain `point`.
    pub fn expand(&mut self, point: Point) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// False for the empty box.
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    /// Center of the box.
    pub fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }

    /// Vector from `min` to `max`.
    pub fn diagonal(&self) -> Point {
        self.max - self.min
    }

    /// True if `point` lies inside or on the box.
    pub fn contains(&self, point: Point) -> bool {
        self.min.cmple(point).all() && point.cmple(self.max).all()
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}
