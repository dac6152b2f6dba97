//! # Tests for Viewer Settings
//!
//! Unit tests verifying [`ViewerConfig`] validation and the text helpers.

use crate::constants::*;
use crate::settings::{ConfigError, ViewerConfig};

// =============================================================================
// VIEWER CONFIG TESTS
// =============================================================================

#[test]
fn test_default_config_matches_constants() {
    let cfg = ViewerConfig::default();
    assert_eq!(cfg.fov_degrees, CAMERA_FOV_DEGREES);
    assert_eq!(cfg.fit_padding, FIT_PADDING);
    assert_eq!(cfg.tick_interval_ms, PROGRESS_TICK_MS);
    assert_eq!(cfg.run_duration_ms, OPTIMIZATION_DURATION_MS);
    assert_eq!(cfg.progress_ceiling, PROGRESS_CEILING);
}

#[test]
fn test_default_config_passes_validation() {
    let cfg = ViewerConfig::default();
    let rebuilt = ViewerConfig::new(
        cfg.fov_degrees,
        cfg.fit_padding,
        cfg.tick_interval_ms,
        cfg.run_duration_ms,
        cfg.max_increment,
        cfg.progress_ceiling,
    );
    assert_eq!(rebuilt, Ok(cfg));
}

#[test]
fn test_rejects_bad_field_of_view() {
    assert_eq!(
        ViewerConfig::new(180.0, 2.5, 250, 10_000, 5.0, 99.0).unwrap_err(),
        ConfigError::InvalidFieldOfView(180.0)
    );
}

#[test]
fn test_rejects_bad_padding() {
    assert_eq!(
        ViewerConfig::new(60.0, -1.0, 250, 10_000, 5.0, 99.0).unwrap_err(),
        ConfigError::InvalidPadding(-1.0)
    );
}

#[test]
fn test_rejects_zero_tick_interval() {
    assert!(matches!(
        ViewerConfig::new(60.0, 2.5, 0, 10_000, 5.0, 99.0),
        Err(ConfigError::InvalidTiming { .. })
    ));
}

#[test]
fn test_rejects_ceiling_at_completion() {
    // A ceiling of 100 would let ticks finish the run on their own
    assert_eq!(
        ViewerConfig::new(60.0, 2.5, 250, 10_000, 5.0, 100.0).unwrap_err(),
        ConfigError::InvalidCeiling(100.0)
    );
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidTiming {
        tick_interval_ms: 0,
        run_duration_ms: 10,
    };
    assert!(err.to_string().contains("tick interval"));
}

// =============================================================================
// TEXT TESTS
// =============================================================================

#[test]
fn test_completion_status_uses_reduction_constants() {
    let status = completion_status();
    assert!(status.starts_with("Optimization complete!"));
    assert!(status.contains(&format!("{MATERIAL_REDUCTION_PERCENT}%")));
    assert!(status.contains(&format!("{WEIGHT_REDUCTION_PERCENT}%")));
}

#[test]
fn test_phase_thresholds_are_ordered() {
    assert!(RUNNING_THRESHOLD < FINALIZING_THRESHOLD);
    assert!(FINALIZING_THRESHOLD < PROGRESS_CEILING);
}

#[test]
fn test_approx_helpers() {
    assert!(approx_zero(EPSILON / 2.0));
    assert!(!approx_zero(EPSILON * 2.0));
}
