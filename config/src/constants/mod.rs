//! Centralized configuration values shared across the extent scaler crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// GUARD CONSTANTS
// =============================================================================

/// Smallest driving-axis extent that can be rescaled.
///
/// Absolute and unit-agnostic. Anything below it would make the scale factor
/// unbounded or NaN.
///
/// # Examples
/// ```
/// use config::constants::MIN_EXTENT;
/// assert_eq!(MIN_EXTENT, 0.001);
/// ```
pub const MIN_EXTENT: f64 = 0.001;

/// Minimum number of points a selection needs before it can be rescaled.
///
/// # Examples
/// ```
/// use config::constants::MIN_POINT_COUNT;
/// assert_eq!(MIN_POINT_COUNT, 2);
/// ```
pub const MIN_POINT_COUNT: usize = 2;

// =============================================================================
// REQUEST DEFAULTS
// =============================================================================

/// Target dimension pre-filled in the operator dialog.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_TARGET_DIMENSION;
/// assert_eq!(DEFAULT_TARGET_DIMENSION, 1.0);
/// ```
pub const DEFAULT_TARGET_DIMENSION: f64 = 1.0;

/// Default state of each per-axis constrain flag.
pub const DEFAULT_CONSTRAIN: bool = true;

// =============================================================================
// PRECISION
// =============================================================================

/// Tolerance used when checking a post-scale extent against its target.
///
/// # Examples
/// ```
/// use config::constants::{approx_equal, EXTENT_TOLERANCE};
/// assert!(EXTENT_TOLERANCE < 1.0e-3);
/// assert!(approx_equal(4.0, 4.0 + 1.0e-9));
/// ```
pub const EXTENT_TOLERANCE: f64 = 1.0e-6;

/// Checks if two f64 values are equal within [`EXTENT_TOLERANCE`].
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EXTENT_TOLERANCE
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the guard settings that can be shared between
/// crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.min_extent > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Smallest driving-axis extent accepted by the scaler.
    pub min_extent: f64,
    /// Smallest selection size accepted by the scaler.
    pub min_points: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// thresholds.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-4, 3).expect("valid config");
    /// assert_eq!(cfg.min_points, 3);
    /// ```
    pub fn new(min_extent: f64, min_points: usize) -> Result<Self, ConfigError> {
        if min_extent <= 0.0 || !min_extent.is_finite() {
            return Err(ConfigError::InvalidMinExtent(min_extent));
        }
        if min_points < MIN_POINT_COUNT {
            return Err(ConfigError::InvalidMinPoints(min_points));
        }
        Ok(Self {
            min_extent,
            min_points,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            min_extent: MIN_EXTENT,
            min_points: MIN_POINT_COUNT,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when the minimum extent is zero, negative or not finite.
    InvalidMinExtent(f64),
    /// Raised when the minimum point count is below [`MIN_POINT_COUNT`].
    InvalidMinPoints(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMinExtent(value) => {
                write!(f, "min_extent must be positive and finite: {value}")
            }
            ConfigError::InvalidMinPoints(value) => {
                write!(f, "min_points must be >= {MIN_POINT_COUNT}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
