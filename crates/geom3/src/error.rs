//! Errors for degenerate geometric input.

/// Degenerate geometric input that violates a precondition.
///
/// The panicking constructors (such as [`crate::Line3::new()`]) panic with the
/// message of this error; their `try_` counterparts return it.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GeometryError {
    /// Line direction is the zero vector.
    #[error("line direction is the zero vector")]
    ZeroDirection,
    /// Plane normal is the zero vector.
    #[error("plane normal is the zero vector")]
    ZeroNormal,
    /// Vector magnitude is too small to divide by.
    #[error("vector magnitude is approximately zero")]
    ZeroMagnitude,
    /// Two lines are skew, so no plane contains both of them.
    #[error("skew lines cannot form a plane")]
    SkewLines,
    /// Plane coefficients `a`, `b`, and `c` are all approximately zero.
    #[error("plane coefficients a, b, and c are all zero")]
    DegenerateCoefficients,
}

/// Unwraps the result of a `try_` constructor, panicking with the error
/// message on degenerate input.
#[track_caller]
pub(crate) fn expect_valid<T>(result: Result<T, GeometryError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("invalid geometry: {e}"),
    }
}
