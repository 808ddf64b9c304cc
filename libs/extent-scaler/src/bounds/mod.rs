//! Axis-aligned bounds of a point set.

use serde::{Deserialize, Serialize};

use crate::core::{axis::Axis, point::Positioned, vec3::abs_diff, vec3::Vec3};
use crate::error::{ScalerError, ScalerResult};

/// Tightest axis-aligned box around a set of points.
///
/// # Examples
/// ```
/// use extent_scaler::{BoundingBox, Vec3};
/// let bbox = BoundingBox::new(Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0));
/// assert_eq!(bbox.center(), Vec3::new(1.0, 2.0, 3.0));
/// assert_eq!(bbox.extent(), Vec3::new(2.0, 4.0, 6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl BoundingBox {
    /// Creates a box from explicit corners.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Degenerate box holding a single point.
    #[must_use]
    pub fn from_point(point: Vec3) -> Self {
        Self::new(point, point)
    }

    /// Grows the box to contain `point`.
    pub fn include(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Midpoint of the two corners.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    /// Size of the box on each axis.
    #[must_use]
    pub fn extent(&self) -> Vec3 {
        abs_diff(self.max, self.min)
    }

    /// Size of the box on a single axis.
    #[must_use]
    pub fn extent_along(&self, axis: Axis) -> f64 {
        axis.get(self.extent())
    }
}

/// Computes the bounding box of a non-empty point sequence.
///
/// Starts from the first point and folds the remainder in a single pass.
///
/// # Errors
/// Returns [`ScalerError::EmptyInput`] when `points` is empty.
///
/// # Examples
/// ```
/// use extent_scaler::{compute_bounding_box, Vec3};
///
/// let points = [Vec3::new(2.0, -1.0, 0.0), Vec3::new(0.0, 3.0, 1.0)];
/// let bbox = compute_bounding_box(&points).unwrap();
/// assert_eq!(bbox.min, Vec3::new(0.0, -1.0, 0.0));
/// assert_eq!(bbox.max, Vec3::new(2.0, 3.0, 1.0));
/// ```
pub fn compute_bounding_box<P: Positioned>(points: &[P]) -> ScalerResult<BoundingBox> {
    let (first, rest) = points.split_first().ok_or(ScalerError::EmptyInput)?;

    let mut bbox = BoundingBox::from_point(first.position());
    for point in rest {
        bbox.include(point.position());
    }

    Ok(bbox)
}

#[cfg(test)]
mod tests;
