//! # Error Types
//!
//! Error types for extent scaler operations.
//!
//! ## Error Policy
//!
//! - Cancelled scales are outcomes, not errors (see [`crate::Outcome`])
//! - Errors are reserved for malformed input handed over by a host
//! - Errors include context for debugging

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while preparing or running a scale.
///
/// ## Example
///
/// ```rust
/// use extent_scaler::{compute_bounding_box, ScalerError, Vec3};
///
/// let points: Vec<Vec3> = Vec::new();
/// match compute_bounding_box(&points) {
///     Ok(bbox) => println!("extent: {:?}", bbox.extent()),
///     Err(ScalerError::EmptyInput) => eprintln!("nothing selected"),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScalerError {
    /// A bounding box was requested for an empty point sequence.
    #[error("Cannot compute a bounding box of an empty point set")]
    EmptyInput,

    /// A flat position buffer whose length is not a multiple of three.
    #[error("Position buffer length {0} is not a multiple of 3")]
    InvalidPositionBuffer(usize),

    /// The scale request could not be decoded.
    #[error("Invalid scale request: {0}")]
    InvalidRequest(String),

    /// An axis name other than `x`, `y` or `z`.
    #[error("Unknown axis '{0}', expected x, y or z")]
    InvalidAxis(String),

    /// Guard thresholds rejected by the shared configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for extent scaler operations.
///
/// ## Example
///
/// ```rust
/// use extent_scaler::{compute_bounding_box, BoundingBox, ScalerResult, Vec3};
///
/// fn bounds_of(points: &[Vec3]) -> ScalerResult<BoundingBox> {
///     compute_bounding_box(points)
/// }
/// # assert!(bounds_of(&[Vec3::ZERO]).is_ok());
/// ```
pub type ScalerResult<T> = Result<T, ScalerError>;

// =============================================================================
// TESTS
// =============================================================================
