//! Tests for axis selection.

use super::*;

#[test]
fn index_matches_component_order() {
    for (i, axis) in Axis::ALL.iter().enumerate() {
        assert_eq!(axis.index(), i);
    }
}

#[test]
fn get_and_set_touch_only_their_component() {
    let mut v = Vec3::new(1.0, 2.0, 3.0);
    Axis::Y.set(&mut v, 9.0);
    assert_eq!(v, Vec3::new(1.0, 9.0, 3.0));
    assert_eq!(Axis::X.get(v), 1.0);
    assert_eq!(Axis::Z.get(v), 3.0);
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!("X".parse::<Axis>(), Ok(Axis::X));
    assert_eq!(" y ".parse::<Axis>(), Ok(Axis::Y));
}

#[test]
fn parse_rejects_unknown_names() {
    assert_eq!(
        "w".parse::<Axis>(),
        Err(ScalerError::InvalidAxis("w".to_string()))
    );
}

#[test]
fn display_round_trips_through_parse() {
    for axis in Axis::ALL {
        assert_eq!(axis.to_string().parse::<Axis>(), Ok(axis));
    }
}

#[test]
fn defaults_to_x() {
    assert_eq!(Axis::default(), Axis::X);
}
