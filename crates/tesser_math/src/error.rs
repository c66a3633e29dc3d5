//! Math error types

use std::fmt;

/// Error type for checked vector and matrix operations
///
/// The operator and `Index` APIs panic with the same messages; the checked
/// constructors and accessors (`try_from_slice`, `get`, `try_normalized`,
/// `try_project`) return these instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// A literal initializer did not provide exactly `expected` values
    DimensionMismatch { expected: usize, actual: usize },
    /// Component or cell index outside `[0, len)`
    IndexOutOfRange { index: usize, len: usize },
    /// Normalizing a vector of zero (or non-finite) length
    DegenerateNormalize,
    /// Homogeneous divide by a zero `w`
    DegenerateProjection,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {} components, got {}", expected, actual)
            }
            MathError::IndexOutOfRange { index, len } => {
                write!(f, "Index out of range: {} is not in [0, {})", index, len)
            }
            MathError::DegenerateNormalize => write!(f, "Cannot normalize a zero-length vector"),
            MathError::DegenerateProjection => {
                write!(f, "Degenerate projection: homogeneous coordinate is zero")
            }
        }
    }
}

impl std::error::Error for MathError {}
