//! Per-object pose
//!
//! An object is posed by four plane rotations followed by a 4D translation,
//! evaluated in 5-dimensional homogeneous space.

use serde::{Deserialize, Serialize};
use tesser_math::{
    pi, rotation, transform_chain, translation, vector4d, MathError, Matrix, RotationPlane,
};

/// Rotation angles and translation of a single object
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectTransform {
    /// Radians in the `AroundX`, `AroundY`, `AroundZ` and `XQ` planes
    pub rotation: [f64; 4],
    /// Offset along x, y, z and q
    pub translation: [f64; 4],
}

impl ObjectTransform {
    /// Number of scalars in the flat representation
    pub const SCALAR_COUNT: usize = 8;

    /// Rotation planes in the order they are applied
    pub const PLANES: [RotationPlane; 4] = [
        RotationPlane::AroundX,
        RotationPlane::AroundY,
        RotationPlane::AroundZ,
        RotationPlane::XQ,
    ];

    pub fn new(rotation: [f64; 4], translation: [f64; 4]) -> Self {
        Self { rotation, translation }
    }

    /// Build from rotations given in units of π
    pub fn from_pi_multiples(rotation: [f64; 4], translation: [f64; 4]) -> Self {
        Self::new(rotation.map(pi), translation)
    }

    /// Read the flat layout `[rx, ry, rz, rq, tx, ty, tz, tq]`
    pub fn from_scalars(scalars: &[f64]) -> Result<Self, MathError> {
        if scalars.len() != Self::SCALAR_COUNT {
            return Err(MathError::DimensionMismatch {
                expected: Self::SCALAR_COUNT,
                actual: scalars.len(),
            });
        }
        let mut rotation = [0.0; 4];
        let mut translation = [0.0; 4];
        rotation.copy_from_slice(&scalars[..4]);
        translation.copy_from_slice(&scalars[4..]);
        Ok(Self { rotation, translation })
    }

    /// Flat layout, inverse of [`from_scalars`](Self::from_scalars)
    pub fn to_scalars(&self) -> [f64; 8] {
        let mut scalars = [0.0; 8];
        scalars[..4].copy_from_slice(&self.rotation);
        scalars[4..].copy_from_slice(&self.translation);
        scalars
    }

    /// Model matrix: rotations in [`PLANES`](Self::PLANES) order, then translation
    pub fn model_matrix(&self) -> Matrix<f64, 5> {
        let [rx, ry, rz, rq] = self.rotation;
        let [tx, ty, tz, tq] = self.translation;
        transform_chain(&[
            rotation(RotationPlane::AroundX, rx),
            rotation(RotationPlane::AroundY, ry),
            rotation(RotationPlane::AroundZ, rz),
            rotation(RotationPlane::XQ, rq),
            translation(vector4d(tx, ty, tz, tq)),
        ])
    }
}
