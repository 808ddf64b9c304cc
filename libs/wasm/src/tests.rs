//! Tests for the WASM-facing scaler helpers.

use super::*;
use extent_scaler::Axis;

/// Scales the two-point example along X with the default constraints.
///
/// # Examples
/// ```
/// use extent_scaler_wasm::scale_positions_internal;
/// let result = scale_positions_internal(&[0.0, 0.0, 0.0, 2.0, 0.0, 0.0], "{\"target_dimension\": 4.0}").unwrap();
/// assert_eq!(result.point_count(), 2);
/// ```
#[test]
fn scales_flat_buffer() {
    let result = scale_positions_internal(
        &[0.0, 0.0, 0.0, 2.0, 0.0, 0.0],
        r#"{"target_dimension": 4.0, "axis": "x"}"#,
    )
    .expect("valid input");

    assert_eq!(result.status(), ScaleStatus::Finished);
    assert_eq!(result.status_name(), "finished");
    assert_eq!(result.point_count(), 2);
    assert_eq!(result.positions(), vec![-1.0, 0.0, 0.0, 3.0, 0.0, 0.0]);
}

/// Unconstrained axes keep their coordinates.
#[test]
fn honours_constrain_flags() {
    let result = scale_positions_internal(
        &[0.0, 0.0, 0.0, 2.0, 4.0, 6.0],
        r#"{"target_dimension": 4.0, "axis": "x", "constrain_y": false, "constrain_z": false}"#,
    )
    .expect("valid input");

    assert!(result.is_finished());
    assert_eq!(result.positions(), vec![-1.0, 0.0, 0.0, 3.0, 4.0, 6.0]);
}

/// Cancelled scales return the input untouched.
#[test]
fn cancelled_scale_returns_input() {
    let single = scale_positions_internal(&[1.0, 2.0, 3.0], "").expect("valid input");
    assert_eq!(single.status(), ScaleStatus::InsufficientPoints);
    assert_eq!(single.positions(), vec![1.0, 2.0, 3.0]);

    let thin = [0.0, 0.0, 0.0, 0.0, 0.0005, 0.0];
    let result = scale_positions_internal(&thin, r#"{"axis": "y"}"#).expect("valid input");
    assert_eq!(result.status(), ScaleStatus::DegenerateExtent);
    assert_eq!(result.status_name(), "degenerate_extent");
    assert_eq!(result.positions(), thin.to_vec());
}

/// An empty buffer is a cancelled scale, not an error.
#[test]
fn empty_buffer_is_cancelled() {
    let result = scale_positions_internal(&[], "").expect("valid input");
    assert_eq!(result.status(), ScaleStatus::InsufficientPoints);
    assert_eq!(result.point_count(), 0);
}

/// Ensures malformed input surfaces explicit errors.
#[test]
fn rejects_malformed_input() {
    let err = scale_positions_internal(&[0.0, 1.0], "").unwrap_err();
    assert_eq!(err, ScalerError::InvalidPositionBuffer(2));

    let err = scale_positions_internal(&[0.0; 6], r#"{"axis": "w"}"#).unwrap_err();
    assert!(matches!(err, ScalerError::InvalidRequest(_)));

    let err = parse_request("{not json").unwrap_err();
    assert!(!err.to_string().is_empty());
}

/// Partial requests fall back to the dialog defaults.
#[test]
fn partial_request_uses_defaults() {
    let request = parse_request(r#"{"target_dimension": 2.5, "constrain_x": false}"#)
        .expect("valid request");
    assert_eq!(request.target_dimension, 2.5);
    assert_eq!(request.axis, Axis::X);
    assert!(!request.constrain_x);
    assert!(request.constrain_y && request.constrain_z);
}

/// The default request survives a JSON round trip.
#[test]
fn default_request_round_trips() {
    let json = default_request_json_internal().expect("serializable");
    assert_eq!(parse_request(&json).expect("parsable"), ScaleRequest::default());
}
