//! Camera module — camera values, frustum-edge skew, and boundary lines.
//!
//! Everything here is a value type built fresh per call. The solver is the
//! only component that computes; cameras, lines and edge sets just carry
//! its results.

mod camera;
mod frustum_edges;
mod frustum_line;
mod frustum_solver;

pub use camera::Camera;
pub use frustum_edges::{
    FrustumEdges,
    EDGE_LEFT, EDGE_RIGHT, EDGE_BOTTOM, EDGE_TOP,
};
pub use frustum_line::FrustumLine;
pub use frustum_solver::{FrustumSolver, MAX_VIEW_ANGLE, skew_offset, build_frustum_line};
