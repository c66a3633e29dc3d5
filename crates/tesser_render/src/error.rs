//! Render adapter error types

use std::fmt;

use tesser_math::MathError;

/// Error type for vertex and frame preparation
#[derive(Debug)]
pub enum RenderError {
    /// Point buffer length is not a multiple of 4 scalars
    PointBuffer { len: usize },
    /// A math operation failed (scalar counts, checked projection)
    Math(MathError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::PointBuffer { len } => {
                write!(f, "Point buffer of {} scalars does not hold whole 4D points", len)
            }
            RenderError::Math(err) => write!(f, "Math error: {}", err),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::PointBuffer { .. } => None,
            RenderError::Math(err) => Some(err),
        }
    }
}

impl From<MathError> for RenderError {
    fn from(err: MathError) -> Self {
        RenderError::Math(err)
    }
}
