/// Camera — a position plus one view angle per axis.
///
/// Orientation angles are in degrees, measured against the camera-to-origin
/// line. They are not validated here: the solver checks them on every call.

use crate::error::Result;
use crate::math::{Point3, Vector3, RotationAxis, rotate};
use super::frustum_edges::FrustumEdges;
use super::frustum_line::FrustumLine;
use super::frustum_solver::FrustumSolver;

/// Camera value type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Point3,
    orientation: Vector3,
}

impl Camera {
    pub fn new(position: Point3, orientation: Vector3) -> Self {
        Self { position, orientation }
    }

    // ===== GETTERS =====

    /// Camera position, in the same frame as the origin.
    pub fn position(&self) -> Point3 {
        self.position
    }

    /// View angle per axis, in degrees.
    pub fn orientation(&self) -> Vector3 {
        self.orientation
    }

    // ===== DERIVED CAMERAS =====

    /// Same orientation, new position.
    pub fn with_position(self, position: Point3) -> Self {
        Self { position, ..self }
    }

    /// Same position, new orientation.
    pub fn with_orientation(self, orientation: Vector3) -> Self {
        Self { orientation, ..self }
    }

    /// Camera moved around the origin by `degrees` about `axis`.
    pub fn orbited(self, degrees: f64, axis: RotationAxis) -> Self {
        self.with_position(rotate(self.position, degrees, axis))
    }

    // ===== FRUSTUM =====

    /// Boundary line for this camera's own orientation.
    pub fn frustum_line(&self) -> Result<FrustumLine> {
        FrustumSolver::default().build_line(self.position, self.orientation)
    }

    /// Left/right/bottom/top boundary lines around this camera's orientation.
    pub fn frustum_edges(&self, horizontal_degrees: f64, vertical_degrees: f64) -> Result<FrustumEdges> {
        FrustumSolver::default().build_edges(self, horizontal_degrees, vertical_degrees)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
