//! Tests for the Vec3 helpers.

use super::*;

/// Ensures the difference is symmetric.
#[test]
fn abs_diff_is_symmetric() {
    let a = Vec3::new(0.0, 4.0, -2.0);
    let b = Vec3::new(2.0, 1.0, 6.0);
    assert_eq!(abs_diff(a, b), abs_diff(b, a));
    assert_eq!(abs_diff(a, b), Vec3::new(2.0, 3.0, 8.0));
}
