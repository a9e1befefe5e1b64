/// Axis rotation.

use super::axis::RotationAxis;
use super::point::Point3;

/// Rotate `point` by `degrees` about `axis` through the origin.
///
/// Uses the standard right-handed matrix for `axis`. Rotating by 0° or a
/// multiple of 360° returns the input up to floating error.
pub fn rotate(point: Point3, degrees: f64, axis: RotationAxis) -> Point3 {
    axis.rotation_matrix(degrees) * point
}

#[cfg(test)]
#[path = "rotation_tests.rs"]
mod tests;
