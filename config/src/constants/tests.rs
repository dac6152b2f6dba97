//! Tests for the centralized viewer constants.

use super::*;

/// The optimized model must render smaller than the original.
#[test]
fn test_optimized_scale_is_more_aggressive() {
    assert!(OPTIMIZED_SCALE < ORIGINAL_SCALE);
    assert!(OPTIMIZED_SCALE > 0.0);
}

/// The two slots must stay distinguishable, loaded or not.
#[test]
fn test_model_colors_are_distinct() {
    assert_ne!(ORIGINAL_COLOR, OPTIMIZED_COLOR);
}

#[test]
fn test_run_duration_is_whole_number_of_ticks() {
    assert_eq!(OPTIMIZATION_DURATION_MS % PROGRESS_TICK_MS, 0);
}

#[test]
fn test_hex_to_rgb_splits_channels() {
    let [r, g, b] = hex_to_rgb(0x10b981);
    assert!((r - 16.0 / 255.0).abs() < 1e-6);
    assert!((g - 185.0 / 255.0).abs() < 1e-6);
    assert!((b - 129.0 / 255.0).abs() < 1e-6);
}
