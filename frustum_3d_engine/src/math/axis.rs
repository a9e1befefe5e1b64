/// Principal axes and their rotation matrices.

use glam::DMat3;
use super::point::{Vector3, degrees_to_radians};

/// One of the three principal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

impl RotationAxis {
    /// All axes in X, Y, Z order
    pub const ALL: [RotationAxis; 3] = [RotationAxis::X, RotationAxis::Y, RotationAxis::Z];

    /// Component index of this axis (0, 1, 2)
    pub fn index(self) -> usize {
        match self {
            RotationAxis::X => 0,
            RotationAxis::Y => 1,
            RotationAxis::Z => 2,
        }
    }

    /// Coordinate of `v` along this axis
    pub fn component(self, v: Vector3) -> f64 {
        match self {
            RotationAxis::X => v.x,
            RotationAxis::Y => v.y,
            RotationAxis::Z => v.z,
        }
    }

    /// Copy of `v` with the coordinate along this axis replaced by `value`
    pub fn with_component(self, v: Vector3, value: f64) -> Vector3 {
        match self {
            RotationAxis::X => v.with_x(value),
            RotationAxis::Y => v.with_y(value),
            RotationAxis::Z => v.with_z(value),
        }
    }

    /// Right-handed rotation matrix about this axis (column vectors, `p' = M * p`).
    ///
    /// X fixes the x component and rotates y/z, Y fixes y, Z fixes z.
    pub fn rotation_matrix(self, degrees: f64) -> DMat3 {
        let radians = degrees_to_radians(degrees);
        match self {
            RotationAxis::X => DMat3::from_rotation_x(radians),
            RotationAxis::Y => DMat3::from_rotation_y(radians),
            RotationAxis::Z => DMat3::from_rotation_z(radians),
        }
    }
}

#[cfg(test)]
#[path = "axis_tests.rs"]
mod tests;
