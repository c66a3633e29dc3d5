//! Camera and view composition
//!
//! The camera orbits the origin: it looks along +X from `distance` units
//! away, after the scene has been turned by the horizontal and vertical
//! orbit rotations. The resulting view matrix maps world points into a
//! space where the narrower screen side spans `[-1, 1]`.

use serde::{Deserialize, Serialize};

use crate::transform::{radians, rotation, scale, translation, Radians, RotationPlane};
use crate::{at, transform_chain, vector3d, Float, Matrix, Vector};

/// World-to-view transform for a camera at `distance` on the -X side of the origin
///
/// The forward axis is fixed to +X. `right = normalize(reference_up) × forward`
/// and `up = forward × right` form the rows of the basis, which is transposed
/// and preceded by a translation of `-distance` along X.
pub fn look_at<T: Float>(distance: T, reference_up: Vector<T, 3>) -> Matrix<T, 4> {
    let forward = vector3d(T::ONE, T::ZERO, T::ZERO);
    let right = reference_up.normalized().cross(forward);
    let up = forward.cross(right);

    let basis = Matrix::identity(&[
        (at(0, 0), right.x()),
        (at(0, 1), right.y()),
        (at(0, 2), right.z()),
        (at(1, 0), up.x()),
        (at(1, 1), up.y()),
        (at(1, 2), up.z()),
        (at(2, 0), forward.x()),
        (at(2, 1), forward.y()),
        (at(2, 2), forward.z()),
    ]);

    translation(vector3d(-distance, T::ZERO, T::ZERO)) * basis.transpose()
}

/// Scale that keeps a 2x2 square visible on a non-square viewport
///
/// Wide viewports (`aspect_ratio > 1`) shrink the first axis by
/// `1 / aspect_ratio`, tall ones shrink the second axis by `aspect_ratio`.
pub fn aspect_ratio_correction<T: Float>(aspect_ratio: T) -> Matrix<T, 4> {
    if aspect_ratio > T::ONE {
        scale(vector3d(T::ONE / aspect_ratio, T::ONE, T::ONE))
    } else {
        scale(vector3d(T::ONE, aspect_ratio, T::ONE))
    }
}

/// Scale the first two axes by `1 / tan(fov_x / 2)`
pub fn fov_x_scale<T: Float>(fov_x: Radians) -> Matrix<T, 4> {
    let viewport_width = T::from_f64((fov_x / 2.0).tan());
    scale(vector3d(T::ONE / viewport_width, T::ONE / viewport_width, T::ONE))
}

/// Orbiting camera parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera<T> {
    /// Distance from the origin along the view axis
    pub distance: T,
    /// Viewport width divided by height
    pub aspect_ratio: T,
    /// Base orbit rotation (radians, in the Y plane)
    pub horizontal_rotation: Radians,
    /// Secondary orbit rotation (radians, in the Z plane)
    pub vertical_rotation: Radians,
    /// Horizontal field of view (radians)
    pub fov_x: Radians,
}

impl<T: Float> Camera<T> {
    /// Camera with a 90° horizontal field of view and no orbit rotation
    pub fn new(distance: T, aspect_ratio: T) -> Self {
        Self {
            distance,
            aspect_ratio,
            horizontal_rotation: 0.0,
            vertical_rotation: 0.0,
            fov_x: radians(90.0),
        }
    }

    /// Set the orbit rotations
    pub fn with_rotation(mut self, horizontal: Radians, vertical: Radians) -> Self {
        self.horizontal_rotation = horizontal;
        self.vertical_rotation = vertical;
        self
    }

    /// Set the horizontal field of view
    pub fn with_fov_x(mut self, fov_x: Radians) -> Self {
        self.fov_x = fov_x;
        self
    }

    /// The full view matrix for this camera
    pub fn view_matrix(&self) -> Matrix<T, 4> {
        view(self)
    }
}

/// Orbit rotations, look-at, aspect ratio correction and FOV scale as one matrix
pub fn view<T: Float>(camera: &Camera<T>) -> Matrix<T, 4> {
    transform_chain(&[
        rotation(RotationPlane::AroundY, camera.horizontal_rotation),
        rotation(RotationPlane::AroundZ, camera.vertical_rotation),
        look_at(camera.distance, vector3d(T::ZERO, T::ONE, T::ZERO)),
        aspect_ratio_correction(camera.aspect_ratio),
        fov_x_scale(camera.fov_x),
    ])
}
