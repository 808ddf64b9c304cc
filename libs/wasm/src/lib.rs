//! WASM-facing entry points for the extent scaler.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Positions cross the boundary as flat `[x, y, z, ...]`
//! buffers and requests as JSON. Native tests use
//! `scale_positions_internal`, which exposes Rust error types directly.
//!
//! ```
//! let result = extent_scaler_wasm::scale_positions_internal(
//!     &[0.0, 0.0, 0.0, 2.0, 0.0, 0.0],
//!     r#"{"target_dimension": 4.0, "axis": "x"}"#,
//! )
//! .unwrap();
//! assert!(result.is_finished());
//! assert_eq!(result.positions(), vec![-1.0, 0.0, 0.0, 3.0, 0.0, 0.0]);
//! ```

use extent_scaler::{scale_to_extent, ScaleRequest, ScalerError, ScalerResult, Vec3};
use wasm_bindgen::prelude::*;

mod status;

pub use status::{ScaleResult, ScaleStatus};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "extent-scaler-wasm";
/// // init_panic_hook();
/// ```
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Returns the default request as JSON, for pre-filling a dialog.
///
/// # Errors
/// Returns a JavaScript error value if serialization fails.
#[wasm_bindgen]
pub fn default_request_json() -> Result<String, JsValue> {
    default_request_json_internal().map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper behind [`default_request_json`].
///
/// # Examples
/// ```
/// let json = extent_scaler_wasm::default_request_json_internal().unwrap();
/// assert!(json.contains("\"axis\":\"x\""));
/// ```
pub fn default_request_json_internal() -> ScalerResult<String> {
    serde_json::to_string(&ScaleRequest::default())
        .map_err(|err| ScalerError::InvalidRequest(err.to_string()))
}

/// Scales a flat position buffer to the extent described by `request_json`.
///
/// This function is the primary entry point used from JavaScript. Missing
/// request fields take the dialog defaults; an empty string means the
/// default request.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the buffer or the request is malformed. A cancelled scale is not an
/// error; check `ScaleResult::status`.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const result = scale_positions(new Float64Array([0, 0, 0, 2, 0, 0]), '{"target_dimension": 4}');
/// // console.log(result.status_name(), result.positions());
/// ```
#[wasm_bindgen]
pub fn scale_positions(positions: Vec<f64>, request_json: &str) -> Result<ScaleResult, JsValue> {
    scale_positions_internal(&positions, request_json)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only implementation of [`scale_positions`].
pub fn scale_positions_internal(positions: &[f64], request_json: &str) -> ScalerResult<ScaleResult> {
    if positions.len() % 3 != 0 {
        return Err(ScalerError::InvalidPositionBuffer(positions.len()));
    }
    let request = parse_request(request_json)?;

    let mut points: Vec<Vec3> = positions.chunks_exact(3).map(Vec3::from_slice).collect();
    let outcome = scale_to_extent(&mut points, &request);
    let scaled = points.iter().flat_map(|p| p.to_array()).collect();

    Ok(ScaleResult::new(outcome, scaled))
}

/// Decodes a JSON scale request.
///
/// # Examples
/// ```
/// use extent_scaler::Axis;
/// let request = extent_scaler_wasm::parse_request(r#"{"axis": "z"}"#).unwrap();
/// assert_eq!(request.axis, Axis::Z);
/// assert_eq!(request.target_dimension, 1.0);
/// ```
pub fn parse_request(request_json: &str) -> ScalerResult<ScaleRequest> {
    if request_json.trim().is_empty() {
        return Ok(ScaleRequest::default());
    }
    serde_json::from_str(request_json).map_err(|err| ScalerError::InvalidRequest(err.to_string()))
}

#[cfg(test)]
mod tests;
