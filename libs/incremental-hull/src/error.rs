//! # Error Types
//!
//! Error types for hull construction. All errors are explicit and abort the
//! whole construction; no partial hull is ever returned.
//!
//! ## Error Policy
//!
//! - Degenerate input is reported, never patched up
//! - Broken mesh invariants surface as `InvariantViolation` or `Topology`
//!   and are never retried

use crate::mesh::TopologyError;
use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building a convex hull.
///
/// ## Example
///
/// ```rust
/// use incremental_hull::{convex_hull, HullError};
/// use incremental_hull::geometry::Point;
///
/// match convex_hull(&[Point::ZERO, Point::X, Point::Y]) {
///     Err(HullError::DegenerateInput { message }) => assert!(message.contains("4")),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum HullError {
    /// Fewer than four points, or no non-coplanar quadruple was found
    /// within the configured number of attempts.
    #[error("Degenerate input: {message}")]
    DegenerateInput {
        /// What made the input unusable
        message: String,
    },

    /// An input coordinate is NaN or infinite.
    #[error("Input point {index} has a non-finite coordinate")]
    NonFiniteInput {
        /// Position of the offending point in the input slice
        index: usize,
    },

    /// The mesh or conflict graph reached a state the algorithm never
    /// produces on consistent data.
    #[error("Internal invariant violated: {message}")]
    InvariantViolation {
        /// Which invariant broke
        message: String,
    },

    /// A mesh access failed.
    #[error("Topology error: {0}")]
    Topology(#[from] TopologyError),

    /// The supplied configuration was rejected.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl HullError {
    /// Creates a degenerate input error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateInput {
            message: message.into(),
        }
    }

    /// Creates an invariant violation error.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for hull operations.
pub type HullResult<T> = Result<T, HullError>;

// =============================================================================
// TESTS
// =============================================================================
