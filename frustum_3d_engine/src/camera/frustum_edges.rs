/// FrustumEdges — the four side boundaries of a camera's view.
///
/// Built by `FrustumSolver::build_edges()` from a camera and its horizontal
/// and vertical half-angles.

use crate::math::Vector3;
use super::frustum_line::FrustumLine;

/// Frustum edge indices
pub const EDGE_LEFT: usize = 0;
pub const EDGE_RIGHT: usize = 1;
pub const EDGE_BOTTOM: usize = 2;
pub const EDGE_TOP: usize = 3;

/// Left, right, bottom and top boundary lines, all starting at the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumEdges {
    /// Boundary lines indexed by EDGE_LEFT, EDGE_RIGHT, EDGE_BOTTOM, EDGE_TOP
    pub lines: [FrustumLine; 4],
}

impl FrustumEdges {
    pub fn left(&self) -> &FrustumLine {
        &self.lines[EDGE_LEFT]
    }

    pub fn right(&self) -> &FrustumLine {
        &self.lines[EDGE_RIGHT]
    }

    pub fn bottom(&self) -> &FrustumLine {
        &self.lines[EDGE_BOTTOM]
    }

    pub fn top(&self) -> &FrustumLine {
        &self.lines[EDGE_TOP]
    }

    /// View angles of each edge, in EDGE_* order.
    pub(crate) fn edge_angles(orientation: Vector3, horizontal: f64, vertical: f64) -> [Vector3; 4] {
        [
            orientation - Vector3::new(horizontal, 0.0, 0.0),
            orientation + Vector3::new(horizontal, 0.0, 0.0),
            orientation - Vector3::new(0.0, vertical, 0.0),
            orientation + Vector3::new(0.0, vertical, 0.0),
        ]
    }
}

#[cfg(test)]
#[path = "frustum_edges_tests.rs"]
mod tests;
