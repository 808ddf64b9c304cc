//! Extent scaler for vertex selections.
//!
//! Rescales a set of caller-owned 3D points so that their extent along a
//! chosen axis equals a target dimension. The scale is applied about the
//! bounding-box center, and per-axis constrain flags decide which other axes
//! follow the driving axis.
//!
//! ```
//! use extent_scaler::{scale_to_extent, Axis, Outcome, ScaleRequest, Vec3};
//!
//! let mut points = vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0)];
//! let outcome = scale_to_extent(&mut points, &ScaleRequest::new(4.0, Axis::X));
//!
//! assert_eq!(outcome, Outcome::Finished);
//! assert_eq!(points, vec![Vec3::new(-1.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0)]);
//! ```

pub mod bounds;
pub mod config;
pub mod core;
pub mod error;
pub mod operator;
pub mod ops;
pub mod transform;

pub use crate::bounds::{compute_bounding_box, BoundingBox};
pub use crate::config::KernelConfig;
pub use crate::core::{axis::Axis, point::Positioned, vec3::Vec3};
pub use crate::error::{ScalerError, ScalerResult};
pub use crate::operator::{DimVertices, EditorHost, EditorMode, MeshVertex, SelectableMesh};
pub use crate::ops::scale_to_extent::{
    scale_to_extent, scale_to_extent_with, scale_vector, CancelReason, Outcome, ScaleRequest,
};
