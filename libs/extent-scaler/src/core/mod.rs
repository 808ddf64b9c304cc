//! Core types shared by the scaler: the `Vec3` alias, axis selection and the
//! `Positioned` abstraction over caller-owned points.

pub mod axis;
pub mod point;
pub mod vec3;
