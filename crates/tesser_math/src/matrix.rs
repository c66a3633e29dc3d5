//! Fixed-size square matrix type

use std::fmt;
use std::ops::{Index, Mul};

use crate::dims::NonEmpty;
use crate::{MathError, Scalar};

/// Location of a single coefficient
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MatrixLocation {
    pub row: usize,
    pub col: usize,
}

impl MatrixLocation {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for MatrixLocation {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Shorthand for [`MatrixLocation::new`]
#[inline]
pub const fn at(row: usize, col: usize) -> MatrixLocation {
    MatrixLocation::new(row, col)
}

/// An immutable, row-major `N`x`N` matrix
///
/// Every transform in Tesser is expressed in homogeneous form at a single
/// dimension, so only square matrices exist.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<T, const N: usize> {
    coefficients: [[T; N]; N],
}

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// Side length
    pub const SIZE: usize = N;

    /// Create a matrix by evaluating `f` once per cell, row by row
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        let () = NonEmpty::<N>::CHECK;
        Self {
            coefficients: std::array::from_fn(|row| std::array::from_fn(|col| f(row, col))),
        }
    }

    /// Create from nested row arrays
    pub fn from_rows(rows: [[T; N]; N]) -> Self {
        let () = NonEmpty::<N>::CHECK;
        Self { coefficients: rows }
    }

    /// Identity matrix with explicitly initialized cells
    ///
    /// Starts from ones on the diagonal and zeros elsewhere, then applies
    /// `overrides` in order; when several target the same cell the last one wins.
    ///
    /// # Panics
    /// If an override location lies outside the `N`x`N` grid.
    ///
    /// # Example
    /// ```
    /// use tesser_math::{Matrix, at};
    /// let m = Matrix::<f64, 3>::identity(&[(at(0, 2), 5.0), (at(0, 2), 7.0)]);
    /// assert_eq!(m[at(0, 2)], 7.0);
    /// assert_eq!(m[at(1, 1)], 1.0);
    /// ```
    pub fn identity(overrides: &[(MatrixLocation, T)]) -> Self {
        let () = NonEmpty::<N>::CHECK;
        let mut coefficients = [[T::ZERO; N]; N];
        for (i, row) in coefficients.iter_mut().enumerate() {
            row[i] = T::ONE;
        }
        for &(location, value) in overrides {
            if let Err(err) = Self::check(location) {
                panic!("{}", err);
            }
            coefficients[location.row][location.col] = value;
        }
        Self { coefficients }
    }

    fn check(location: MatrixLocation) -> Result<(), MathError> {
        if location.row >= N {
            return Err(MathError::IndexOutOfRange { index: location.row, len: N });
        }
        if location.col >= N {
            return Err(MathError::IndexOutOfRange { index: location.col, len: N });
        }
        Ok(())
    }

    /// Checked coefficient access
    pub fn get(&self, location: MatrixLocation) -> Result<T, MathError> {
        Self::check(location)?;
        Ok(self.coefficients[location.row][location.col])
    }

    /// Call `f` for every cell in row-major order
    pub fn for_each_coefficient(&self, mut f: impl FnMut(MatrixLocation, T)) {
        for (row, cells) in self.coefficients.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                f(at(row, col), value);
            }
        }
    }

    /// All `N`² coefficients, row-major
    pub fn row_major(&self) -> Vec<T> {
        let mut packed = Vec::with_capacity(N * N);
        self.for_each_coefficient(|_, value| packed.push(value));
        packed
    }

    /// Borrow the rows
    #[inline]
    pub fn rows(&self) -> &[[T; N]; N] {
        &self.coefficients
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        Self::from_fn(|row, col| self.coefficients[col][row])
    }

    /// Matrix product `self · rhs`
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self::from_fn(|row, col| {
            (0..N).fold(T::ZERO, |acc, i| {
                acc + self.coefficients[row][i] * rhs.coefficients[i][col]
            })
        })
    }
}

/// Free-function form of [`Matrix::transpose`]
#[inline]
pub fn transpose<T: Scalar, const N: usize>(m: &Matrix<T, N>) -> Matrix<T, N> {
    m.transpose()
}

impl<T: Scalar, const N: usize> Index<MatrixLocation> for Matrix<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, location: MatrixLocation) -> &T {
        if let Err(err) = Self::check(location) {
            panic!("{}", err);
        }
        &self.coefficients[location.row][location.col]
    }
}

impl<T: Scalar, const N: usize> Mul for Matrix<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for (row, cells) in self.coefficients.iter().enumerate() {
            if row > 0 {
                write!(f, " | ")?;
            }
            for (col, value) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
        }
        write!(f, " ]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting() -> Matrix<i32, 3> {
        Matrix::from_fn(|row, col| (row * 3 + col) as i32)
    }

    #[test]
    fn test_from_fn_visits_row_major() {
        let mut visited = Vec::new();
        let _ = Matrix::<i32, 2>::from_fn(|row, col| {
            visited.push((row, col));
            0
        });
        assert_eq!(visited, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_identity_without_overrides() {
        let m = Matrix::<f64, 4>::identity(&[]);
        for row in 0..4 {
            for col in 0..4 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_eq!(m[at(row, col)], expected);
            }
        }
    }

    #[test]
    fn test_identity_last_override_wins() {
        let m = Matrix::<i32, 3>::identity(&[
            (at(1, 2), 4),
            (at(0, 0), 9),
            (at(1, 2), 6),
        ]);
        assert_eq!(m[at(1, 2)], 6);
        assert_eq!(m[at(0, 0)], 9);
        assert_eq!(m[at(2, 2)], 1);
        assert_eq!(m[at(2, 1)], 0);
    }

    #[test]
    #[should_panic(expected = "Index out of range")]
    fn test_identity_override_outside_grid_panics() {
        let _ = Matrix::<f64, 3>::identity(&[(at(0, 3), 1.0)]);
    }

    #[test]
    fn test_get_checked() {
        let m = counting();
        assert_eq!(m.get(at(2, 1)), Ok(7));
        assert_eq!(m.get(at(3, 0)), Err(MathError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(m.get(at(0, 5)), Err(MathError::IndexOutOfRange { index: 5, len: 3 }));
    }

    #[test]
    fn test_for_each_coefficient_and_row_major() {
        let m = counting();
        let mut locations = Vec::new();
        m.for_each_coefficient(|location, value| {
            assert_eq!(value as usize, location.row * 3 + location.col);
            locations.push(location);
        });
        assert_eq!(locations.len(), 9);
        assert_eq!(locations[0], at(0, 0));
        assert_eq!(locations[8], at(2, 2));
        assert_eq!(m.row_major(), (0..9).collect::<Vec<i32>>());
    }

    #[test]
    fn test_transpose() {
        let m = counting();
        let t = m.transpose();
        assert_eq!(t[at(0, 1)], m[at(1, 0)]);
        assert_eq!(t[at(2, 0)], 2);
        assert_eq!(transpose(&t), m);
    }

    #[test]
    fn test_multiply() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[5, 6], [7, 8]]);
        assert_eq!(a * b, Matrix::from_rows([[19, 22], [43, 50]]));
        assert_eq!(b * a, Matrix::from_rows([[23, 34], [31, 46]]));
        assert_eq!(a.multiply(&Matrix::identity(&[])), a);
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(format!("{}", m), "[ 1, 2 | 3, 4 ]");
        assert_eq!(format!("{}", Matrix::from_rows([[5]])), "[ 5 ]");
    }
}
