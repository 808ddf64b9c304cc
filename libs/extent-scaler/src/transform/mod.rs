//! Transform helpers for applying a centered scale to caller-owned points.
//!
//! Kept apart from the guard logic in `ops` so hosts that already know their
//! scale vector can reuse the same in-place transform.

use glam::DMat4;

use crate::core::{point::Positioned, vec3::Vec3};

/// Scales every point about `center`, independently per axis.
///
/// Each component becomes `(p - center) * scale + center`.
///
/// # Examples
/// ```
/// use extent_scaler::{transform::scale_about, Vec3};
///
/// let mut points = [Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 0.0)];
/// scale_about(&mut points, Vec3::new(1.0, 2.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
/// assert_eq!(points[0], Vec3::new(-1.0, 0.0, 0.0));
/// assert_eq!(points[1], Vec3::new(3.0, 4.0, 0.0));
/// ```
pub fn scale_about<P: Positioned>(points: &mut [P], center: Vec3, scale: Vec3) {
    for point in points.iter_mut() {
        let p = point.position();
        point.set_position((p - center) * scale + center);
    }
}

/// Affine matrix equivalent of [`scale_about`], for hosts that preview the
/// transform on their own geometry.
///
/// # Examples
/// ```
/// use extent_scaler::{transform::centered_scale_matrix, Vec3};
///
/// let m = centered_scale_matrix(Vec3::new(1.0, 0.0, 0.0), Vec3::splat(2.0));
/// assert_eq!(m.transform_point3(Vec3::new(2.0, 0.0, 0.0)), Vec3::new(3.0, 0.0, 0.0));
/// ```
pub fn centered_scale_matrix(center: Vec3, scale: Vec3) -> DMat4 {
    DMat4::from_translation(center) * DMat4::from_scale(scale) * DMat4::from_translation(-center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn unit_scale_leaves_points_in_place() {
        let original = [Vec3::new(0.25, -3.0, 8.0), Vec3::new(1.5, 2.0, -4.0)];
        let mut points = original;
        scale_about(&mut points, Vec3::new(0.875, -0.5, 2.0), Vec3::ONE);
        for (after, before) in points.iter().zip(original.iter()) {
            assert_abs_diff_eq!(after.x, before.x, epsilon = 1e-12);
            assert_abs_diff_eq!(after.y, before.y, epsilon = 1e-12);
            assert_abs_diff_eq!(after.z, before.z, epsilon = 1e-12);
        }
    }

    #[test]
    fn matrix_agrees_with_in_place_scale() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        let scale = Vec3::new(2.0, 0.5, 1.0);
        let mut points = [Vec3::new(-1.0, 4.0, 7.0), Vec3::new(3.0, 0.0, -2.0)];
        let matrix = centered_scale_matrix(center, scale);
        let expected: Vec<Vec3> = points.iter().map(|p| matrix.transform_point3(*p)).collect();

        scale_about(&mut points, center, scale);

        for (got, want) in points.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(got.x, want.x, epsilon = 1e-12);
            assert_abs_diff_eq!(got.y, want.y, epsilon = 1e-12);
            assert_abs_diff_eq!(got.z, want.z, epsilon = 1e-12);
        }
    }
}
