//! Builder-level configuration on top of the shared `config` crate.
//!
//! The workspace constants provide the defaults; `HullConfig` adds the
//! per-run knobs (RNG seed, parallel threshold).

use config::constants::{
    ConfigError, GlobalConfig, MAX_SEED_ATTEMPTS, ORIENTATION_EPSILON,
    PARALLEL_VISIBILITY_THRESHOLD,
};

/// Hull construction settings.
///
/// # Examples
/// ```
/// use incremental_hull::HullConfig;
/// let cfg = HullConfig::default().with_seed(7);
/// assert_eq!(cfg.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HullConfig {
    /// Inclusive visibility tolerance; also the coplanarity cut-off for the
    /// seed tetrahedron.
    pub tolerance: f64,
    /// Cap on random quadruples tried before the input is declared degenerate.
    pub max_seed_attempts: u32,
    /// Fixed RNG seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Candidate count from which new-face visibility runs in parallel.
    pub parallel_threshold: usize,
}

impl HullConfig {
    /// Creates a configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use incremental_hull::HullConfig;
    /// let cfg = HullConfig::new(0.0, 32).unwrap();
    /// assert_eq!(cfg.max_seed_attempts, 32);
    /// assert!(HullConfig::new(-1.0, 32).is_err());
    /// ```
    pub fn new(tolerance: f64, max_seed_attempts: u32) -> Result<Self, ConfigError> {
        GlobalConfig::new(tolerance, max_seed_attempts).map(|cfg| Self {
            tolerance: cfg.tolerance,
            max_seed_attempts: cfg.max_seed_attempts,
            ..Self::default()
        })
    }

    /// Fixes the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the parallel visibility threshold.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Re-validates fields that may have been edited directly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        GlobalConfig::new(self.tolerance, self.max_seed_attempts).map(|_| ())
    }
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            tolerance: ORIENTATION_EPSILON,
            max_seed_attempts: MAX_SEED_ATTEMPTS,
            seed: None,
            parallel_threshold: PARALLEL_VISIBILITY_THRESHOLD,
        }
    }
}
