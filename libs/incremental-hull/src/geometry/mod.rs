//! Geometric primitives consumed by the mesh and the hull builder.
//!
//! Includes the point alias (`Point`), an exact point identity usable as a
//! map key (`PointKey`), the axis-aligned `BoundingBox` and the orientation
//! predicate.

pub mod point;
pub mod predicates;

pub use point::{BoundingBox, Point, PointKey};
pub use predicates::{orientation, sees_points};
