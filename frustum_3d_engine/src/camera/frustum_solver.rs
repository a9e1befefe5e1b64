/// FrustumSolver — skew offsets and frustum boundary lines.
///
/// For one axis, the skew offset is derived from the triangle formed by the
/// camera-to-origin ray and the view ray tilted by `theta` (law of sines):
///
/// ```text
/// phi = asin(j / i)        j: camera coordinate on the axis, i: |camera|
/// mu  = PI - phi
/// psi = PI - mu - theta
/// m   = i * sin(theta) / sin(psi)
/// ```
///
/// The three per-axis offsets displace the camera into a skewed point whose
/// distance to the origin (`run`) scales the camera position into the slope
/// of the boundary line.

use std::f64::consts::PI;
use crate::config::GeometryConfig;
use crate::error::{Error, Result};
use crate::math::{Point3, Vector3, RotationAxis, ORIGIN, distance, degrees_to_radians};
use super::camera::Camera;
use super::frustum_edges::FrustumEdges;
use super::frustum_line::FrustumLine;

/// View angles must lie strictly inside (-MAX_VIEW_ANGLE, MAX_VIEW_ANGLE) degrees.
pub const MAX_VIEW_ANGLE: f64 = 90.0;

/// Skew offset calculator and boundary-line builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrustumSolver {
    config: GeometryConfig,
}

impl FrustumSolver {
    /// Create a solver with the given tolerances.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if a tolerance is negative or not finite.
    pub fn new(config: GeometryConfig) -> Result<Self> {
        config.validate()?;
        crate::engine_debug!(
            "frustum3d::FrustumSolver",
            "Solver created (degenerate_tolerance={}, domain_tolerance={})",
            config.degenerate_tolerance,
            config.domain_tolerance
        );
        Ok(Self { config })
    }

    /// Tolerances in use.
    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// Signed displacement along `axis` at which a view ray tilted by
    /// `angle_degrees` departs from the camera-to-origin line.
    ///
    /// An untilted ray (`angle_degrees == 0`) never departs, so the offset is 0.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `angle_degrees` is not strictly inside (-90, 90).
    ///   Checked before anything else.
    /// - `DomainError` if the camera sits at the origin, if `j / i` falls
    ///   outside the arcsine domain, or if `sin(psi)` is zero.
    pub fn skew_offset(&self, axis: RotationAxis, camera: Point3, angle_degrees: f64) -> Result<f64> {
        if !(angle_degrees > -MAX_VIEW_ANGLE && angle_degrees < MAX_VIEW_ANGLE) {
            return Err(Error::InvalidArgument(format!(
                "view angle {} on axis {:?} must lie strictly between -{} and {} degrees",
                angle_degrees, axis, MAX_VIEW_ANGLE, MAX_VIEW_ANGLE
            )));
        }

        let tolerance = self.config.degenerate_tolerance;
        let i = distance(camera, ORIGIN);
        if i <= tolerance {
            return Err(Error::DomainError(format!(
                "division by zero: camera {} coincides with the origin",
                camera
            )));
        }

        let j = axis.component(camera);
        let ratio = j / i;
        if !ratio.is_finite() || ratio.abs() > 1.0 + self.config.domain_tolerance {
            return Err(Error::DomainError(format!(
                "arcsine out of domain: {} / {} = {} on axis {:?}",
                j, i, ratio, axis
            )));
        }

        let theta = degrees_to_radians(angle_degrees);
        if theta == 0.0 {
            return Ok(0.0);
        }

        let phi = ratio.clamp(-1.0, 1.0).asin();
        let mu = PI - phi;
        let psi = PI - mu - theta;
        let sin_psi = psi.sin();
        if sin_psi.abs() <= tolerance {
            return Err(Error::DomainError(format!(
                "division by zero: sin(psi) vanishes for a {} degree tilt on axis {:?}",
                angle_degrees, axis
            )));
        }

        Ok(i * theta.sin() / sin_psi)
    }

    /// Build the boundary line for `camera` tilted by `view_angles`
    /// (degrees, one per axis).
    ///
    /// The first failing axis (X, then Y, then Z) aborts the build.
    ///
    /// # Errors
    ///
    /// Any error from `skew_offset`, unchanged, or `DomainError` when the
    /// skewed point coincides with the origin.
    pub fn build_line(&self, camera: Point3, view_angles: Vector3) -> Result<FrustumLine> {
        let mut offsets = Vector3::ZERO;
        for axis in RotationAxis::ALL {
            let m = self.skew_offset(axis, camera, axis.component(view_angles))?;
            offsets = axis.with_component(offsets, m);
        }

        let skewed_point = camera + offsets;
        let run = distance(skewed_point, ORIGIN);
        if run <= self.config.degenerate_tolerance || !run.is_finite() {
            return Err(Error::DomainError(format!(
                "division by zero: skewed point {} has run {}",
                skewed_point, run
            )));
        }

        let slope = camera / run;
        crate::engine_trace!(
            "frustum3d::FrustumSolver",
            "Line built: camera={} angles={} skewed={} slope={}",
            camera,
            view_angles,
            skewed_point,
            slope
        );
        Ok(FrustumLine::new(camera, slope))
    }

    /// Build the left/right/bottom/top boundary lines of `camera`.
    ///
    /// Each edge tilts the camera orientation by the half-angle on one axis:
    /// `∓horizontal_degrees` on X for left/right, `∓vertical_degrees` on Y
    /// for bottom/top.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a negative or non-finite half-angle, otherwise
    /// the first error raised while building an edge.
    pub fn build_edges(
        &self,
        camera: &Camera,
        horizontal_degrees: f64,
        vertical_degrees: f64,
    ) -> Result<FrustumEdges> {
        for (name, value) in [("horizontal", horizontal_degrees), ("vertical", vertical_degrees)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidArgument(format!(
                    "{} half-angle must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }

        let angles = FrustumEdges::edge_angles(camera.orientation(), horizontal_degrees, vertical_degrees);
        let mut lines = [FrustumLine::new(camera.position(), Vector3::ZERO); 4];
        for (line, edge_angles) in lines.iter_mut().zip(angles) {
            *line = self.build_line(camera.position(), edge_angles)?;
        }

        crate::engine_debug!(
            "frustum3d::FrustumSolver",
            "Edges built for camera at {} (horizontal={}, vertical={})",
            camera.position(),
            horizontal_degrees,
            vertical_degrees
        );
        Ok(FrustumEdges { lines })
    }
}

/// `FrustumSolver::skew_offset` with default tolerances.
pub fn skew_offset(axis: RotationAxis, camera: Point3, angle_degrees: f64) -> Result<f64> {
    FrustumSolver::default().skew_offset(axis, camera, angle_degrees)
}

/// `FrustumSolver::build_line` with default tolerances.
pub fn build_frustum_line(camera: Point3, view_angles: Vector3) -> Result<FrustumLine> {
    FrustumSolver::default().build_line(camera, view_angles)
}

#[cfg(test)]
#[path = "frustum_solver_tests.rs"]
mod tests;
