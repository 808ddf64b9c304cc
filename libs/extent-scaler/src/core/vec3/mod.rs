//! Thin wrapper around `glam::DVec3` shared across kernel modules.
//!
//! The helper functions keep vector creation readable while avoiding direct
//! dependencies on `glam` from higher layers.

pub use glam::DVec3 as Vec3;

/// Component-wise absolute difference between two corners.
///
/// # Examples
/// ```
/// use extent_scaler::{core::vec3::abs_diff, Vec3};
/// let d = abs_diff(Vec3::new(3.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
/// assert_eq!(d, Vec3::new(2.0, 2.0, 0.0));
/// ```
pub fn abs_diff(a: Vec3, b: Vec3) -> Vec3 {
    (a - b).abs()
}

#[cfg(test)]
mod tests;
