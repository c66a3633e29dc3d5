//! Vector x matrix projection and chain composition

use std::ops::Mul;

use crate::dims::Homogeneous;
use crate::{at, MathError, Matrix, Scalar, Vector};

/// Undivided homogeneous product of an `M`-point with an `N`x`N` matrix
///
/// The point is extended with a trailing `1` and multiplied as a row vector,
/// so component `col` is `Σ v[i]·m(i, col) + m(N-1, col)`. The last component
/// of the result is the homogeneous coordinate `w`.
pub fn homogeneous<T: Scalar, const M: usize, const N: usize>(
    v: &Vector<T, M>,
    m: &Matrix<T, N>,
) -> Vector<T, N> {
    let () = Homogeneous::<M, N>::CHECK;
    Vector::from_fn(|col| {
        (0..M).fold(T::ZERO, |acc, i| acc + v[i] * m[at(i, col)]) + m[at(N - 1, col)]
    })
}

/// Transform an `M`-point through an `N`x`N` matrix with perspective divide
///
/// `w` must be non-zero. Floats yield non-finite components otherwise, and
/// integer scalars panic on the division; [`try_project`] checks first.
///
/// # Example
/// ```
/// use tesser_math::{project, translation, vector3d, Matrix};
/// let m: Matrix<f64, 4> = translation(vector3d(1.0, 2.0, 3.0));
/// assert_eq!(project(&vector3d(0.0, 0.0, 0.0), &m), vector3d(1.0, 2.0, 3.0));
/// ```
pub fn project<T: Scalar, const M: usize, const N: usize>(
    v: &Vector<T, M>,
    m: &Matrix<T, N>,
) -> Vector<T, M> {
    let h = homogeneous(v, m);
    let w = h[N - 1];
    Vector::from_fn(|i| h[i] / w)
}

/// [`project`], failing with [`MathError::DegenerateProjection`] when `w` is zero
pub fn try_project<T: Scalar, const M: usize, const N: usize>(
    v: &Vector<T, M>,
    m: &Matrix<T, N>,
) -> Result<Vector<T, M>, MathError> {
    let h = homogeneous(v, m);
    let w = h[N - 1];
    if w == T::ZERO {
        return Err(MathError::DegenerateProjection);
    }
    Ok(Vector::from_fn(|i| h[i] / w))
}

impl<T: Scalar, const M: usize, const N: usize> Mul<Matrix<T, N>> for Vector<T, M> {
    type Output = Vector<T, M>;

    #[inline]
    fn mul(self, rhs: Matrix<T, N>) -> Vector<T, M> {
        project(&self, &rhs)
    }
}

impl<T: Scalar, const M: usize, const N: usize> Mul<&Matrix<T, N>> for Vector<T, M> {
    type Output = Vector<T, M>;

    #[inline]
    fn mul(self, rhs: &Matrix<T, N>) -> Vector<T, M> {
        project(&self, rhs)
    }
}

/// Compose matrices as `M1·(M2·(…·Mk))`
///
/// Points are row vectors, so `M1` is applied first. An empty chain is the
/// identity. See also the variadic [`transform_chain!`](crate::transform_chain!).
pub fn transform_chain<T: Scalar, const N: usize>(matrices: &[Matrix<T, N>]) -> Matrix<T, N> {
    match matrices.split_last() {
        None => Matrix::identity(&[]),
        Some((last, rest)) => rest.iter().rev().fold(*last, |acc, m| m.multiply(&acc)),
    }
}

/// Variadic form of [`transform_chain`](fn@crate::transform_chain)
///
/// # Example
/// ```
/// use tesser_math::{transform_chain, rotation, translation, vector3d, Matrix, RotationPlane};
/// let model: Matrix<f64, 4> = transform_chain!(
///     rotation(RotationPlane::AroundZ, 0.5),
///     translation(vector3d(1.0, 0.0, 0.0)),
/// );
/// let expected: Matrix<f64, 4> =
///     rotation(RotationPlane::AroundZ, 0.5) * translation(vector3d(1.0, 0.0, 0.0));
/// assert_eq!(model, expected);
/// ```
#[macro_export]
macro_rules! transform_chain {
    ($m:expr $(,)?) => {
        $m
    };
    ($m:expr, $($rest:expr),+ $(,)?) => {
        $m * $crate::transform_chain!($($rest),+)
    };
}
