//! Scale-to-extent operation.
//!
//! Rescales a point selection so its extent along a driving axis matches a
//! target dimension. The scale is taken about the bounding-box center, and
//! the constrain flags pull additional axes along with the same factor.

use std::fmt;

use config::constants::{DEFAULT_CONSTRAIN, DEFAULT_TARGET_DIMENSION, MIN_POINT_COUNT};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::bounds::compute_bounding_box;
use crate::config::KernelConfig;
use crate::core::{axis::Axis, point::Positioned, vec3::Vec3};
use crate::transform::scale_about;

// =============================================================================
// REQUEST
// =============================================================================

/// Parameters of a single scale.
///
/// Missing fields fall back to the editor dialog defaults when deserialized.
///
/// # Examples
/// ```
/// use extent_scaler::{Axis, ScaleRequest};
///
/// let request = ScaleRequest::new(2.5, Axis::Z).with_constraints(false, false, true);
/// assert!(request.constrains(Axis::Z));
/// assert!(!request.constrains(Axis::X));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleRequest {
    /// Desired extent along `axis`.
    pub target_dimension: f64,
    /// Driving axis; always scaled.
    pub axis: Axis,
    /// Also scale X by the driving factor.
    pub constrain_x: bool,
    /// Also scale Y by the driving factor.
    pub constrain_y: bool,
    /// Also scale Z by the driving factor.
    pub constrain_z: bool,
}

impl ScaleRequest {
    /// Request with every constrain flag on (a uniform scale).
    #[must_use]
    pub fn new(target_dimension: f64, axis: Axis) -> Self {
        Self {
            target_dimension,
            axis,
            ..Self::default()
        }
    }

    /// Replaces the three constrain flags.
    #[must_use]
    pub fn with_constraints(mut self, x: bool, y: bool, z: bool) -> Self {
        self.constrain_x = x;
        self.constrain_y = y;
        self.constrain_z = z;
        self
    }

    /// Constrain flag for `axis`.
    ///
    /// This is the raw flag; the driving axis is scaled regardless.
    pub fn constrains(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.constrain_x,
            Axis::Y => self.constrain_y,
            Axis::Z => self.constrain_z,
        }
    }
}

impl Default for ScaleRequest {
    fn default() -> Self {
        Self {
            target_dimension: DEFAULT_TARGET_DIMENSION,
            axis: Axis::default(),
            constrain_x: DEFAULT_CONSTRAIN,
            constrain_y: DEFAULT_CONSTRAIN,
            constrain_z: DEFAULT_CONSTRAIN,
        }
    }
}

// =============================================================================
// OUTCOME
// =============================================================================

/// Why a scale was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancelReason {
    /// Fewer points than the configured minimum.
    InsufficientPoints,
    /// Driving-axis extent below the configured minimum.
    DegenerateExtent,
}

impl CancelReason {
    /// Snake-case name used by host bindings.
    pub fn as_str(self) -> &'static str {
        match self {
            CancelReason::InsufficientPoints => "insufficient_points",
            CancelReason::DegenerateExtent => "degenerate_extent",
        }
    }
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`scale_to_extent`].
///
/// Both variants are ordinary outcomes. A cancelled call never touches the
/// points.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Every point was transformed.
    Finished,
    /// No point was transformed.
    Cancelled(CancelReason),
}

impl Outcome {
    /// True for [`Outcome::Finished`].
    pub fn is_finished(&self) -> bool {
        matches!(self, Outcome::Finished)
    }
}

// =============================================================================
// OPERATION
// =============================================================================

/// Per-axis scale applied for `request` once the driving factor is known.
///
/// An axis gets `scale_factor` when it is the driving axis or its constrain
/// flag is set, and `1.0` otherwise.
///
/// # Examples
/// ```
/// use extent_scaler::{scale_vector, Axis, ScaleRequest, Vec3};
///
/// let request = ScaleRequest::new(4.0, Axis::X).with_constraints(false, false, true);
/// assert_eq!(scale_vector(&request, 2.0), Vec3::new(2.0, 1.0, 2.0));
/// ```
pub fn scale_vector(request: &ScaleRequest, scale_factor: f64) -> Vec3 {
    let mut scale = Vec3::ONE;
    for axis in Axis::ALL {
        if request.constrains(axis) || axis == request.axis {
            axis.set(&mut scale, scale_factor);
        }
    }
    scale
}

/// Scales `points` in place so their extent along `request.axis` becomes
/// `request.target_dimension`.
///
/// Uses the default guards: at least two points, and a driving-axis extent of
/// at least `0.001`.
///
/// # Examples
/// ```
/// use extent_scaler::{scale_to_extent, Axis, CancelReason, Outcome, ScaleRequest, Vec3};
///
/// let mut points = vec![Vec3::ZERO];
/// let outcome = scale_to_extent(&mut points, &ScaleRequest::new(1.0, Axis::X));
/// assert_eq!(outcome, Outcome::Cancelled(CancelReason::InsufficientPoints));
/// ```
pub fn scale_to_extent<P: Positioned>(points: &mut [P], request: &ScaleRequest) -> Outcome {
    scale_to_extent_with(points, request, &KernelConfig::default())
}

/// [`scale_to_extent`] with explicit guard thresholds.
///
/// The thresholds only tighten the guards: fewer than two points, or a
/// driving-axis extent that is not strictly positive, always cancel.
///
/// The bounding box is computed once, before any point is written, so either
/// every point is transformed from the same snapshot or none is.
pub fn scale_to_extent_with<P: Positioned>(
    points: &mut [P],
    request: &ScaleRequest,
    config: &KernelConfig,
) -> Outcome {
    let min_points = config.min_points.max(MIN_POINT_COUNT);
    if points.len() < min_points {
        debug!(
            points = points.len(),
            min_points,
            "scale cancelled: not enough points"
        );
        return Outcome::Cancelled(CancelReason::InsufficientPoints);
    }

    let Ok(bbox) = compute_bounding_box(points) else {
        return Outcome::Cancelled(CancelReason::InsufficientPoints);
    };

    let current = bbox.extent_along(request.axis);
    if !(current >= config.min_extent && current > 0.0) {
        debug!(
            axis = %request.axis,
            extent = current,
            min_extent = config.min_extent,
            "scale cancelled: degenerate extent"
        );
        return Outcome::Cancelled(CancelReason::DegenerateExtent);
    }

    let scale_factor = request.target_dimension / current;
    let scale = scale_vector(request, scale_factor);
    let center = bbox.center();

    scale_about(points, center, scale);

    trace!(
        axis = %request.axis,
        scale_factor,
        ?center,
        ?scale,
        points = points.len(),
        "scaled to extent"
    );
    Outcome::Finished
}
