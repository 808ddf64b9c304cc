//! WASM-compatible scale results.
//!
//! This module provides JavaScript-compatible wrappers for scaler outcomes.

use extent_scaler::{CancelReason, Outcome};
use wasm_bindgen::prelude::*;

/// Scale status for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleStatus {
    /// Every point was scaled.
    Finished,
    /// Fewer than two points; nothing was scaled.
    InsufficientPoints,
    /// Driving-axis extent too small; nothing was scaled.
    DegenerateExtent,
}

impl ScaleStatus {
    /// Snake-case name shared with the Rust outcome.
    pub fn name(self) -> &'static str {
        match self {
            ScaleStatus::Finished => "finished",
            ScaleStatus::InsufficientPoints => CancelReason::InsufficientPoints.as_str(),
            ScaleStatus::DegenerateExtent => CancelReason::DegenerateExtent.as_str(),
        }
    }
}

impl From<Outcome> for ScaleStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Finished => ScaleStatus::Finished,
            Outcome::Cancelled(CancelReason::InsufficientPoints) => ScaleStatus::InsufficientPoints,
            Outcome::Cancelled(CancelReason::DegenerateExtent) => ScaleStatus::DegenerateExtent,
        }
    }
}

/// Scaled position buffer returned to JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const result = scale_positions(positions, '{"target_dimension": 2.0}');
/// // if (result.is_finished()) mesh.setPositions(result.positions());
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct ScaleResult {
    status: ScaleStatus,
    positions: Vec<f64>,
}

#[wasm_bindgen]
impl ScaleResult {
    /// Returns the status of the scale.
    pub fn status(&self) -> ScaleStatus {
        self.status
    }

    /// Returns the status as a snake-case string.
    pub fn status_name(&self) -> String {
        self.status.name().to_string()
    }

    /// Returns true when the positions were scaled.
    pub fn is_finished(&self) -> bool {
        self.status == ScaleStatus::Finished
    }

    /// Returns the position buffer as a Float64Array.
    ///
    /// Holds the untouched input when the scale was cancelled.
    pub fn positions(&self) -> Vec<f64> {
        self.positions.clone()
    }

    /// Returns the number of points in the buffer.
    pub fn point_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Converts this result to a plain JavaScript object.
    ///
    /// This is useful for passing data between the worker and main thread,
    /// as wasm-bindgen wrappers cannot be transferred.
    pub fn to_js_object(&self) -> Result<JsValue, JsValue> {
        use js_sys::{Float64Array, Object, Reflect};

        let obj = Object::new();
        Reflect::set(&obj, &JsValue::from_str("status"), &JsValue::from_str(self.status.name()))?;
        Reflect::set(
            &obj,
            &JsValue::from_str("positions"),
            &Float64Array::from(self.positions.as_slice()),
        )?;

        Ok(JsValue::from(obj))
    }
}

impl ScaleResult {
    /// Wraps a scaler outcome and the buffer it left behind.
    pub fn new(outcome: Outcome, positions: Vec<f64>) -> Self {
        Self {
            status: outcome.into(),
            positions,
        }
    }
}
