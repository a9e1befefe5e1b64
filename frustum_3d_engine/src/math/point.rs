/// Point and vector primitives.
///
/// `Point3` and `Vector3` are the same type. Whether a value is a position
/// or a displacement, and which frame it is expressed in, is up to the
/// caller.

use glam::DVec3;

/// A position in 3D space
pub type Point3 = DVec3;

/// A displacement or direction in 3D space
pub type Vector3 = DVec3;

/// World origin
pub const ORIGIN: Point3 = DVec3::ZERO;

/// Euclidean distance between two points.
///
/// Symmetric and non-negative. A NaN or infinite component yields a
/// non-finite result instead of an error.
pub fn distance(p1: Point3, p2: Point3) -> f64 {
    (p1 - p2).length()
}

/// Convert an angle in degrees to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

#[cfg(test)]
#[path = "point_tests.rs"]
mod tests;
