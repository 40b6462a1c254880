//! Centralized configuration values shared across the hull workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Upper bound of the inclusive visibility test.
///
/// A point sees a face when the orientation determinant of the face's three
/// vertices and the point is less than or equal to this value. Points lying
/// exactly on a face's plane therefore count as seeing it.
///
/// # Examples
/// ```
/// use config::constants::ORIENTATION_EPSILON;
/// assert_eq!(ORIENTATION_EPSILON, f64::EPSILON);
/// ```
pub const ORIENTATION_EPSILON: f64 = f64::EPSILON;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of random quadruples drawn while looking for a
/// non-coplanar seed tetrahedron.
///
/// Exhausting the attempts means the input is treated as degenerate.
///
/// # Examples
/// ```
/// use config::constants::MAX_SEED_ATTEMPTS;
/// assert!(MAX_SEED_ATTEMPTS >= 100);
/// ```
pub const MAX_SEED_ATTEMPTS: u32 = 10_000;

/// Candidate-set size from which new-face visibility checks run on the
/// rayon thread pool instead of sequentially.
///
/// # Examples
/// ```
/// use config::constants::PARALLEL_VISIBILITY_THRESHOLD;
/// let candidates = 16;
/// assert!(candidates < PARALLEL_VISIBILITY_THRESHOLD);
/// ```
pub const PARALLEL_VISIBILITY_THRESHOLD: usize = 512;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Color assigned to every face created by the hull builder (mid grey).
///
/// RGBA values in range [0.0, 1.0].
pub const DEFAULT_FACE_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Inclusive visibility tolerance propagated into the orientation predicate.
    pub tolerance: f64,
    /// Cap on seed-tetrahedron sampling attempts.
    pub max_seed_attempts: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and attempt cap.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-12, 64).expect("valid config");
    /// assert_eq!(cfg.max_seed_attempts, 64);
    /// ```
    pub fn new(tolerance: f64, max_seed_attempts: u32) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if max_seed_attempts == 0 {
            return Err(ConfigError::InvalidSeedAttempts(max_seed_attempts));
        }
        Ok(Self {
            tolerance,
            max_seed_attempts,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: ORIENTATION_EPSILON,
            max_seed_attempts: MAX_SEED_ATTEMPTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is negative or not finite.
    InvalidTolerance(f64),
    /// Raised when zero seed attempts are requested.
    InvalidSeedAttempts(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be finite and non-negative: {value}")
            }
            ConfigError::InvalidSeedAttempts(value) => {
                write!(f, "max_seed_attempts must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
