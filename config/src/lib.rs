//! # Config Crate
//!
//! Centralized configuration constants for the incremental convex hull
//! workspace. Tolerances, sampling limits and tuning thresholds live here so
//! the geometry crates never carry literal magic numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, MAX_SEED_ATTEMPTS, ORIENTATION_EPSILON};
//!
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.tolerance, ORIENTATION_EPSILON);
//! assert_eq!(cfg.max_seed_attempts, MAX_SEED_ATTEMPTS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: `GlobalConfig` rejects unusable values up front

pub mod constants;
