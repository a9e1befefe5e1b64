//! Error types for the Frustum3D engine
//!
//! Two kinds of failure exist in the geometry core: a caller-supplied value
//! breaks a precondition, or a computation has no real result for the
//! inputs it was given. Both are returned to the direct caller unchanged.

use std::fmt;

/// Result type for Frustum3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Frustum3D errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A precondition on caller-supplied input is violated
    /// (e.g. a view angle outside the open interval (-90°, 90°))
    InvalidArgument(String),

    /// A mathematical operation has no defined real result
    /// (division by zero, arcsine argument outside [-1, 1])
    DomainError(String),
}

impl Error {
    /// True for `Error::InvalidArgument`
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// True for `Error::DomainError`
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Error::DomainError(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::DomainError(msg) => write!(f, "Domain error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
