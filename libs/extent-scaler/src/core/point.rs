//! Abstraction over caller-owned points.
//!
//! The scaler never owns or allocates points. It reads and overwrites
//! positions through [`Positioned`], so hosts can hand over plain vectors,
//! coordinate arrays, or borrowed vertices gathered from several objects.

use crate::core::vec3::Vec3;

/// A point-like record with a mutable position.
///
/// # Examples
/// ```
/// use extent_scaler::{Positioned, Vec3};
///
/// let mut p: [f64; 3] = [1.0, 2.0, 3.0];
/// p.set_position(p.position() * 2.0);
/// assert_eq!(p, [2.0, 4.0, 6.0]);
/// ```
pub trait Positioned {
    /// Current position.
    fn position(&self) -> Vec3;

    /// Overwrites the position in place.
    fn set_position(&mut self, position: Vec3);
}

impl Positioned for Vec3 {
    fn position(&self) -> Vec3 {
        *self
    }

    fn set_position(&mut self, position: Vec3) {
        *self = position;
    }
}

impl Positioned for [f64; 3] {
    fn position(&self) -> Vec3 {
        Vec3::from_array(*self)
    }

    fn set_position(&mut self, position: Vec3) {
        *self = position.to_array();
    }
}

impl<P: Positioned + ?Sized> Positioned for &mut P {
    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn set_position(&mut self, position: Vec3) {
        (**self).set_position(position);
    }
}
