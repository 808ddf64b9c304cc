//! Tests for bounding box computation.

use super::*;

#[test]
fn empty_input_is_an_error() {
    let points: [Vec3; 0] = [];
    assert_eq!(compute_bounding_box(&points), Err(ScalerError::EmptyInput));
}

#[test]
fn single_point_has_zero_extent() {
    let bbox = compute_bounding_box(&[Vec3::new(1.0, 2.0, 3.0)]).unwrap();
    assert_eq!(bbox.min, bbox.max);
    assert_eq!(bbox.extent(), Vec3::ZERO);
    assert_eq!(bbox.center(), Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn bounds_are_componentwise() {
    // No single point holds every minimum or maximum.
    let points = [
        Vec3::new(5.0, 0.0, -2.0),
        Vec3::new(-1.0, 7.0, 0.0),
        Vec3::new(0.0, -3.0, 4.0),
    ];
    let bbox = compute_bounding_box(&points).unwrap();
    assert_eq!(bbox.min, Vec3::new(-1.0, -3.0, -2.0));
    assert_eq!(bbox.max, Vec3::new(5.0, 7.0, 4.0));
    assert_eq!(bbox.extent(), Vec3::new(6.0, 10.0, 6.0));
    assert_eq!(bbox.extent_along(Axis::Y), 10.0);
}

#[test]
fn order_does_not_matter() {
    let forward = [
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-4.0, 0.5, 9.0),
        Vec3::new(2.0, -6.0, 0.0),
    ];
    let mut reversed = forward;
    reversed.reverse();
    assert_eq!(
        compute_bounding_box(&forward).unwrap(),
        compute_bounding_box(&reversed).unwrap()
    );
}

#[test]
fn accepts_coordinate_arrays() {
    let points: [[f64; 3]; 2] = [[0.0, 0.0, 0.0], [2.0, 4.0, 6.0]];
    let bbox = compute_bounding_box(&points).unwrap();
    assert_eq!(bbox.center(), Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn include_grows_box() {
    let mut bbox = BoundingBox::from_point(Vec3::ZERO);
    bbox.include(Vec3::new(1.0, -1.0, 2.0));
    assert_eq!(bbox, BoundingBox::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(1.0, 0.0, 2.0)));
}
