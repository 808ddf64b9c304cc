//! # Config Crate
//!
//! Centralized configuration constants for the extent scaler workspace.
//! Guard thresholds and request defaults live here so the kernel and the
//! host bindings agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MIN_EXTENT, MIN_POINT_COUNT};
//!
//! // A driving-axis extent below MIN_EXTENT cancels the scale.
//! let extent: f64 = 0.0005;
//! assert!(extent < MIN_EXTENT);
//!
//! // A single point never has an extent to scale.
//! assert!(1 < MIN_POINT_COUNT);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Editor Compatible**: Defaults match the editor operator dialog

pub mod constants;

#[cfg(test)]
mod tests;
