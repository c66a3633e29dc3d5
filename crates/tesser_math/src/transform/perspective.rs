//! Perspective projection

use crate::{at, Float, Matrix};

/// Perspective matrix for the `near`..`far` depth range
///
/// Points on the near plane (`z = -near`) map to depth 0 and points on the
/// far plane (`z = -far`) to depth 1 after the homogeneous divide, with
/// `w = -z`. Requires `near < far`; equal planes divide by zero.
pub fn perspective<T: Float>(near: T, far: T) -> Matrix<T, 4> {
    Matrix::identity(&[
        (at(2, 3), -T::ONE),
        (at(3, 3), T::ZERO),
        (at(2, 2), -far / (far - near)),
        (at(3, 2), -(far * near) / (far - near)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{homogeneous, vector3d};

    const EPSILON: f64 = 0.0001;

    #[test]
    fn test_far_plane_maps_to_one() {
        let m = perspective(0.1f64, 100.0);
        let h = homogeneous(&vector3d(0.0, 0.0, -100.0), &m);
        assert!((h.q() - 100.0).abs() < EPSILON);

        let p = vector3d(0.0, 0.0, -100.0) * m;
        assert!((p.z() - 1.0).abs() < EPSILON, "far depth was {}", p.z());
    }

    #[test]
    fn test_near_plane_maps_to_zero() {
        let p = vector3d(0.0, 0.0, -0.1) * perspective(0.1f64, 100.0);
        assert!(p.z().abs() < EPSILON, "near depth was {}", p.z());
    }

    #[test]
    fn test_depth_increases_with_distance() {
        let m = perspective(0.1f32, 100.0);
        let mid = (vector3d(0.0, 0.0, -10.0) * m).z();
        let far = (vector3d(0.0, 0.0, -50.0) * m).z();
        assert!(mid > 0.0 && mid < far && far < 1.0);
    }

    #[test]
    fn test_xy_shrink_with_distance() {
        let m = perspective(0.1f64, 100.0);
        let close = vector3d(1.0, 1.0, -2.0) * m;
        let distant = vector3d(1.0, 1.0, -8.0) * m;
        assert!((close.x() - 0.5).abs() < EPSILON);
        assert!((distant.x() - 0.125).abs() < EPSILON);
    }

    #[test]
    fn test_equal_planes_are_degenerate() {
        let m = perspective(1.0f64, 1.0);
        assert!(!m[at(2, 2)].is_finite());
    }
}
