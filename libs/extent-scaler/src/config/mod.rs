//! Kernel-level configuration helpers building on the shared `config` crate.
//!
//! The module wraps the workspace configuration so the scaler guards can stay
//! decoupled from literal constants.

use config::constants::{GlobalConfig, MIN_EXTENT, MIN_POINT_COUNT};

use crate::error::ScalerResult;

/// Guard thresholds consulted by [`crate::scale_to_extent_with`].
///
/// # Examples
/// ```
/// use extent_scaler::config::KernelConfig;
/// let cfg = KernelConfig::default();
/// assert_eq!(cfg.min_extent, 0.001);
/// assert_eq!(cfg.min_points, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Driving-axis extents below this value cancel the scale.
    pub min_extent: f64,
    /// Selections smaller than this cancel the scale.
    pub min_points: usize,
}

impl KernelConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use extent_scaler::config::KernelConfig;
    /// let cfg = KernelConfig::new(1.0e-4, 3).unwrap();
    /// assert_eq!(cfg.min_points, 3);
    /// assert!(KernelConfig::new(0.0, 2).is_err());
    /// ```
    pub fn new(min_extent: f64, min_points: usize) -> ScalerResult<Self> {
        let cfg = GlobalConfig::new(min_extent, min_points)?;
        Ok(Self::from(cfg))
    }
}

impl From<GlobalConfig> for KernelConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            min_extent: cfg.min_extent,
            min_points: cfg.min_points,
        }
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            min_extent: MIN_EXTENT,
            min_points: MIN_POINT_COUNT,
        }
    }
}
