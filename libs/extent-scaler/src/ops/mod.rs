//! Operations on point selections.

pub mod scale_to_extent;
