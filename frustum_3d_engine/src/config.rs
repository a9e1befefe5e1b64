//! Numeric tolerances used by the frustum solver.

use crate::error::{Error, Result};

/// Geometry configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// A length or sine with magnitude at or below this is treated as zero
    /// (camera at the origin, `sin(psi)`, the skewed-point run).
    pub degenerate_tolerance: f64,
    /// Slack allowed on an arcsine argument before it is out of domain.
    /// Arguments inside the slack are clamped to [-1, 1].
    pub domain_tolerance: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            degenerate_tolerance: 1e-9,
            domain_tolerance: 1e-12,
        }
    }
}

impl GeometryConfig {
    /// Both tolerances must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("degenerate_tolerance", self.degenerate_tolerance),
            ("domain_tolerance", self.domain_tolerance),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidArgument(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
