//! Anisotropic scale

use crate::dims::Homogeneous;
use crate::{Matrix, Scalar, Vector};

/// Scale each of the first `N-1` axes by the matching component of `v`
///
/// The final diagonal cell stays `1` so the homogeneous coordinate is kept.
pub fn scale<T: Scalar, const M: usize, const N: usize>(v: Vector<T, M>) -> Matrix<T, N> {
    let () = Homogeneous::<M, N>::CHECK;
    Matrix::from_fn(|row, col| {
        if row != col {
            T::ZERO
        } else if row < M {
            v[row]
        } else {
            T::ONE
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{at, vector3d};

    #[test]
    fn test_diagonal() {
        let m: Matrix<f64, 4> = scale(vector3d(2.0, 3.0, 4.0));
        assert_eq!(m[at(0, 0)], 2.0);
        assert_eq!(m[at(1, 1)], 3.0);
        assert_eq!(m[at(2, 2)], 4.0);
        assert_eq!(m[at(3, 3)], 1.0);
        assert_eq!(m[at(0, 1)], 0.0);
        assert_eq!(m[at(3, 0)], 0.0);
    }

    #[test]
    fn test_scales_point() {
        let m: Matrix<f64, 4> = scale(vector3d(2.0, 0.5, -1.0));
        assert_eq!(vector3d(1.0, 4.0, 3.0) * m, vector3d(2.0, 2.0, -3.0));
    }
}
