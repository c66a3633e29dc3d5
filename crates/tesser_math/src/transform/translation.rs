//! Homogeneous translation

use crate::dims::Homogeneous;
use crate::{Matrix, Scalar, Vector};

/// Translation by an `(N-1)`-vector
///
/// Identity everywhere except the last row, whose first `N-1` cells hold `v`.
pub fn translation<T: Scalar, const M: usize, const N: usize>(v: Vector<T, M>) -> Matrix<T, N> {
    let () = Homogeneous::<M, N>::CHECK;
    Matrix::from_fn(|row, col| {
        if row == col {
            T::ONE
        } else if row == M {
            v[col]
        } else {
            T::ZERO
        }
    })
}
