use glam::DVec3;
use super::*;

#[test]
fn test_point_at_zero_is_origin() {
    let line = FrustumLine::new(DVec3::new(1.0, -2.0, 3.5), DVec3::new(0.3, 0.4, 0.5));
    assert_eq!(line.point_at(0.0), DVec3::new(1.0, -2.0, 3.5));
}

#[test]
fn test_point_at_advances_along_slope() {
    let line = FrustumLine::new(DVec3::new(0.0, 0.0, 10.0), DVec3::new(0.0, 0.0, 1.0));
    assert_eq!(line.point_at(2.0), DVec3::new(0.0, 0.0, 12.0));
    assert_eq!(line.point_at(-10.0), DVec3::ZERO);
}

#[test]
fn test_accessors() {
    let line = FrustumLine::new(DVec3::X, DVec3::Y);
    assert_eq!(line.origin(), DVec3::X);
    assert_eq!(line.slope(), DVec3::Y);
}

#[test]
fn test_as_fn_matches_point_at() {
    let line = FrustumLine::new(DVec3::new(2.0, 2.0, 2.0), DVec3::new(-1.0, 0.5, 0.25));
    let eqn = line.as_fn();
    let copy = eqn;
    for x in [-3.0, 0.0, 0.5, 7.0] {
        assert_eq!(eqn(x), line.point_at(x));
        assert_eq!(copy(x), eqn(x));
    }
}
