//! Math module — points, principal axes, and axis rotation.
//!
//! All coordinates are f64 (`glam::DVec3`). Nothing here fails: NaN and
//! infinite inputs propagate through the arithmetic.

mod axis;
mod point;
mod rotation;

pub use axis::RotationAxis;
pub use point::{Point3, Vector3, ORIGIN, distance, degrees_to_radians};
pub use rotation::rotate;
