//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane.
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.tolerance >= 0.0);
    assert!(cfg.max_seed_attempts >= 1);
}

#[test]
fn face_color_is_opaque() {
    assert_eq!(DEFAULT_FACE_COLOR[3], 1.0);
    assert!(DEFAULT_FACE_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// assert!(GlobalConfig::new(-1.0, 24).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(-1.0, 24).unwrap_err(),
        ConfigError::InvalidTolerance(-1.0)
    );
    assert!(matches!(
        GlobalConfig::new(f64::NAN, 24),
        Err(ConfigError::InvalidTolerance(_))
    ));
    assert_eq!(
        GlobalConfig::new(1.0e-9, 0).unwrap_err(),
        ConfigError::InvalidSeedAttempts(0)
    );
}

#[test]
fn zero_tolerance_is_allowed() {
    let cfg = GlobalConfig::new(0.0, 1).unwrap();
    assert_eq!(cfg.tolerance, 0.0);
}

#[test]
fn error_display_names_the_field() {
    assert!(ConfigError::InvalidSeedAttempts(0)
        .to_string()
        .contains("max_seed_attempts"));
}
