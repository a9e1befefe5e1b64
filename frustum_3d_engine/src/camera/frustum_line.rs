/// FrustumLine — one boundary ray of the camera's visible region.
///
/// `point_at(x) = x * slope + origin`, with `origin` the camera position.
/// Immutable once built; evaluating it is pure.

use crate::math::{Point3, Vector3};

/// Parametric boundary ray starting at the camera position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumLine {
    origin: Point3,
    slope: Vector3,
}

impl FrustumLine {
    /// Create a line from its start point and per-unit direction.
    pub fn new(origin: Point3, slope: Vector3) -> Self {
        Self { origin, slope }
    }

    /// Start of the ray (the camera position).
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Displacement per unit of the line parameter.
    pub fn slope(&self) -> Vector3 {
        self.slope
    }

    /// Evaluate the line at parameter `x`.
    pub fn point_at(&self, x: f64) -> Point3 {
        x * self.slope + self.origin
    }

    /// The line as a reusable function object.
    pub fn as_fn(&self) -> impl Fn(f64) -> Point3 + Copy {
        let line = *self;
        move |x| line.point_at(x)
    }
}

#[cfg(test)]
#[path = "frustum_line_tests.rs"]
mod tests;
