//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// GUARD TESTS
// =============================================================================

#[test]
fn test_min_extent_matches_editor_guard() {
    assert_eq!(MIN_EXTENT, 0.001);
}

#[test]
fn test_min_point_count_allows_an_extent() {
    // One point has zero extent on every axis.
    assert!(MIN_POINT_COUNT >= 2, "a single point cannot be rescaled");
}

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_target_dimension_is_unit() {
    assert_eq!(DEFAULT_TARGET_DIMENSION, 1.0);
}

#[test]
fn test_constraints_default_on() {
    assert!(DEFAULT_CONSTRAIN);
}

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_tolerance_is_below_guard() {
    assert!(
        EXTENT_TOLERANCE < MIN_EXTENT,
        "EXTENT_TOLERANCE must be finer than MIN_EXTENT"
    );
}

#[test]
fn test_approx_equal() {
    assert!(approx_equal(2.0, 2.0 + 1e-9));
    assert!(!approx_equal(2.0, 2.001));
}
