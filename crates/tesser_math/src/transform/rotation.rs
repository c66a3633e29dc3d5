//! Plane rotations
//!
//! Rotations act within a 2D plane rather than around an axis. The three
//! classic planes keep their 3D names; [`RotationPlane::XQ`] mixes the X axis
//! with the fourth axis and has no 3D counterpart.

use serde::{Deserialize, Serialize};

use crate::{at, Float, Matrix};

/// Angle in radians
pub type Radians = f64;

/// Convert degrees to radians
#[inline]
pub fn radians(degrees: f64) -> Radians {
    degrees / 180.0 * std::f64::consts::PI
}

/// Angle given as a multiple of π
#[inline]
pub fn pi(multiple: f64) -> Radians {
    multiple * std::f64::consts::PI
}

/// The 2D sub-plane a rotation acts in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// YZ plane
    #[serde(rename = "around_x")]
    AroundX,
    /// ZX plane
    #[serde(rename = "around_y")]
    AroundY,
    /// XY plane
    #[serde(rename = "around_z")]
    AroundZ,
    /// X and the fourth axis
    #[serde(rename = "xq")]
    XQ,
}

impl RotationPlane {
    pub const ALL: [RotationPlane; 4] = [
        RotationPlane::AroundX,
        RotationPlane::AroundY,
        RotationPlane::AroundZ,
        RotationPlane::XQ,
    ];

    /// The axis index pair `(a, b)` spanning this plane
    ///
    /// A positive angle turns axis `a` towards axis `b`.
    #[inline]
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::AroundX => (1, 2),
            RotationPlane::AroundY => (2, 0),
            RotationPlane::AroundZ => (0, 1),
            RotationPlane::XQ => (0, 3),
        }
    }

    /// Smallest matrix dimension able to hold this rotation
    #[inline]
    pub const fn min_dimension(self) -> usize {
        let (a, b) = self.axes();
        if a > b { a + 1 } else { b + 1 }
    }
}

/// Rotation by `angle` radians within `plane`
///
/// Overrides the identity at the plane's axes `(a, b)` with
/// `cos, sin / -sin, cos`.
///
/// # Panics
/// If `N` is too small for the plane (e.g. [`RotationPlane::XQ`] with `N < 4`).
pub fn rotation<T: Float, const N: usize>(plane: RotationPlane, angle: Radians) -> Matrix<T, N> {
    let (a, b) = plane.axes();
    assert!(
        plane.min_dimension() <= N,
        "rotation plane {:?} needs at least {} dimensions, matrix has {}",
        plane,
        plane.min_dimension(),
        N
    );
    let cos = T::from_f64(angle.cos());
    let sin = T::from_f64(angle.sin());
    Matrix::identity(&[
        (at(a, a), cos),
        (at(a, b), sin),
        (at(b, a), -sin),
        (at(b, b), cos),
    ])
}
