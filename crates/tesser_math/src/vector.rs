//! Fixed-size vector type

use std::fmt;
use std::ops::{Add, Index, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::dims::NonEmpty;
use crate::{Float, MathError, Scalar};

/// An immutable `N`-component vector
///
/// `N` must be positive; a zero-sized vector fails to compile when any
/// constructor is instantiated. Components 0 to 3 are also reachable as
/// [`x`](Self::x), [`y`](Self::y), [`z`](Self::z) and [`q`](Self::q), where
/// `q` is the fourth spatial axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<T>",
    into = "Vec<T>",
    bound(serialize = "T: Scalar + Serialize", deserialize = "T: Scalar + Deserialize<'de>")
)]
pub struct Vector<T, const N: usize> {
    components: [T; N],
}

/// Three-component vector
pub type Vector3d<T> = Vector<T, 3>;

/// Four-component vector
pub type Vector4d<T> = Vector<T, 4>;

/// Create a three-component vector
#[inline]
pub fn vector3d<T: Scalar>(x: T, y: T, z: T) -> Vector3d<T> {
    Vector::new([x, y, z])
}

/// Create a four-component vector
#[inline]
pub fn vector4d<T: Scalar>(x: T, y: T, z: T, q: T) -> Vector4d<T> {
    Vector::new([x, y, z, q])
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Number of components
    pub const DIMENSION: usize = N;

    /// Create a vector from exactly `N` values
    #[inline]
    pub fn new(components: [T; N]) -> Self {
        let () = NonEmpty::<N>::CHECK;
        Self { components }
    }

    /// Create a vector by evaluating `f` once per index, in ascending order
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self::new(std::array::from_fn(f))
    }

    /// Create a vector from a literal list, which must hold exactly `N` values
    pub fn try_from_slice(values: &[T]) -> Result<Self, MathError> {
        if values.len() != N {
            return Err(MathError::DimensionMismatch { expected: N, actual: values.len() });
        }
        Ok(Self::from_fn(|i| values[i]))
    }

    /// Vector with every component zero
    #[inline]
    pub fn zero() -> Self {
        Self::from_fn(|_| T::ZERO)
    }

    /// Checked component access
    #[inline]
    pub fn get(&self, index: usize) -> Result<T, MathError> {
        self.components
            .get(index)
            .copied()
            .ok_or(MathError::IndexOutOfRange { index, len: N })
    }

    /// Borrow the components as an array
    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.components
    }

    /// Copy the components out as an array
    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.components
    }

    /// Iterate over the components in index order
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.components.iter().copied()
    }

    /// First component
    ///
    /// # Panics
    /// Never for `N >= 1`.
    #[inline]
    pub fn x(&self) -> T {
        self[0]
    }

    /// Second component
    ///
    /// # Panics
    /// If `N < 2`.
    #[inline]
    pub fn y(&self) -> T {
        self[1]
    }

    /// Third component
    ///
    /// # Panics
    /// If `N < 3`.
    #[inline]
    pub fn z(&self) -> T {
        self[2]
    }

    /// Fourth component, the axis beyond 3D space
    ///
    /// # Panics
    /// If `N < 4`.
    #[inline]
    pub fn q(&self) -> T {
        self[3]
    }

    /// Apply `f` to every component
    #[inline]
    pub fn map<U: Scalar>(self, mut f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector::from_fn(|i| f(self.components[i]))
    }

    /// Combine two vectors component by component
    #[inline]
    pub fn zip_with(self, other: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self::from_fn(|i| f(self.components[i], other.components[i]))
    }

    /// Component-wise sum
    #[inline]
    pub fn add(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Component-wise difference
    #[inline]
    pub fn sub(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiply every component by `factor`
    #[inline]
    pub fn scaled(self, factor: T) -> Self {
        self.map(|c| c * factor)
    }

    /// Divide every component by `divisor`
    #[inline]
    pub fn divided(self, divisor: T) -> Self {
        self.map(|c| c / divisor)
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.components
            .iter()
            .zip(other.components.iter())
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Euclidean length
    #[inline]
    pub fn length(self) -> T {
        self.dot(self).sqrt()
    }

    /// Scale to unit length
    ///
    /// A zero-length vector yields non-finite components rather than a zero
    /// vector; use [`try_normalized`](Self::try_normalized) to reject it.
    #[inline]
    pub fn normalized(self) -> Self {
        self.scaled(T::ONE / self.length())
    }

    /// Scale to unit length, failing on zero or non-finite length
    pub fn try_normalized(self) -> Result<Self, MathError> {
        let length = self.length();
        if length == T::ZERO || !length.is_finite() {
            return Err(MathError::DegenerateNormalize);
        }
        Ok(self.scaled(T::ONE / length))
    }

    /// Convert the component type, e.g. `f64` to `f32` before upload
    #[inline]
    pub fn cast<U: Float>(self) -> Vector<U, N> {
        self.map(|c| U::from_f64(c.to_f64()))
    }

    /// True if every component is finite
    pub fn is_finite(&self) -> bool {
        self.components.iter().all(|c| c.is_finite())
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Cross product
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new([
            self.y() * rhs.z() - self.z() * rhs.y(),
            self.z() * rhs.x() - self.x() * rhs.z(),
            self.x() * rhs.y() - self.y() * rhs.x(),
        ])
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.components.get(index) {
            Some(component) => component,
            None => panic!("{}", MathError::IndexOutOfRange { index, len: N }),
        }
    }
}

impl<T: Scalar, const N: usize> TryFrom<Vec<T>> for Vector<T, N> {
    type Error = MathError;

    fn try_from(values: Vec<T>) -> Result<Self, MathError> {
        Self::try_from_slice(&values)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for Vec<T> {
    fn from(v: Vector<T, N>) -> Self {
        v.components.to_vec()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(components: [T; N]) -> Self {
        Self::new(components)
    }
}

// Operator overloads

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Vector::add(self, other)
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Vector::sub(self, other)
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

// Scalar operators are implemented per concrete type so they cannot overlap
// with `Vector * Matrix`.
macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> std::ops::Mul<$t> for Vector<$t, N> {
                type Output = Self;
                #[inline]
                fn mul(self, scalar: $t) -> Self {
                    self.scaled(scalar)
                }
            }

            impl<const N: usize> std::ops::Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;
                #[inline]
                fn mul(self, v: Vector<$t, N>) -> Vector<$t, N> {
                    v.scaled(self)
                }
            }

            impl<const N: usize> std::ops::Div<$t> for Vector<$t, N> {
                type Output = Self;
                #[inline]
                fn div(self, scalar: $t) -> Self {
                    self.divided(scalar)
                }
            }
        )*
    };
}

impl_scalar_ops!(f32, f64, i32, i64);

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( ")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, " )")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.0001;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_and_accessors() {
        let v = vector4d(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
        assert_eq!(v.q(), 4.0);
        assert_eq!(v[2], 3.0);
        assert_eq!(Vector4d::<f64>::DIMENSION, 4);
    }

    #[test]
    fn test_from_fn_runs_in_index_order() {
        let mut seen = Vec::new();
        let v = Vector::<i32, 5>::from_fn(|i| {
            seen.push(i);
            i as i32 * 10
        });
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert_eq!(v.to_array(), [0, 10, 20, 30, 40]);
    }

    #[test]
    fn test_try_from_slice_rejects_wrong_count() {
        let err = Vector::<f64, 3>::try_from_slice(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err, MathError::DimensionMismatch { expected: 3, actual: 2 });

        let err = Vector::<f64, 3>::try_from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap_err();
        assert_eq!(err, MathError::DimensionMismatch { expected: 3, actual: 4 });

        let ok = Vector::<f64, 3>::try_from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(ok, vector3d(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_get_out_of_range() {
        let v = vector3d(1, 2, 3);
        assert_eq!(v.get(2), Ok(3));
        assert_eq!(v.get(3), Err(MathError::IndexOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    #[should_panic(expected = "Index out of range")]
    fn test_index_out_of_range_panics() {
        let v = vector3d(1.0, 2.0, 3.0);
        let _ = v[3];
    }

    #[test]
    #[should_panic(expected = "Index out of range")]
    fn test_q_on_3d_vector_panics() {
        let _ = vector3d(1.0, 2.0, 3.0).q();
    }

    #[test]
    fn test_add_sub() {
        let a = vector4d(1.0f64, 2.0, 3.0, 4.0);
        let b = vector4d(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a + b, vector4d(6.0, 8.0, 10.0, 12.0));
        assert_eq!(b - a, vector4d(4.0, 4.0, 4.0, 4.0));
        assert_eq!(a.add(b), a + b);
    }

    #[test]
    fn test_scalar_mul_div() {
        let v = vector3d(1.0f64, 2.0, 3.0);
        assert_eq!(v * 2.0, vector3d(2.0, 4.0, 6.0));
        assert_eq!(2.0 * v, vector3d(2.0, 4.0, 6.0));
        assert_eq!(v / 2.0, vector3d(0.5, 1.0, 1.5));
        assert_eq!(vector3d(2i32, 4, 6) / 2, vector3d(1, 2, 3));
    }

    #[test]
    fn test_neg() {
        assert_eq!(-vector3d(1.0, -2.0, 3.0), vector3d(-1.0, 2.0, -3.0));
    }

    #[test]
    fn test_dot() {
        let a = vector4d(1.0, 2.0, 3.0, 4.0);
        let b = vector4d(5.0, 6.0, 7.0, 8.0);
        // 1*5 + 2*6 + 3*7 + 4*8 = 70
        assert_eq!(a.dot(b), 70.0);
    }

    #[test]
    fn test_length_and_normalized() {
        let v = vector3d(3.0, 0.0, 4.0);
        assert!(approx_eq(v.length(), 5.0));

        let n = v.normalized();
        assert!(approx_eq(n.length(), 1.0));
        assert!(approx_eq(n.x(), 0.6));
        assert!(approx_eq(n.z(), 0.8));
    }

    #[test]
    fn test_normalize_zero_is_not_finite() {
        let n = Vector::<f64, 3>::zero().normalized();
        assert!(!n.is_finite());
        assert!(n.iter().all(|c| c.is_nan()));
    }

    #[test]
    fn test_try_normalized_rejects_zero() {
        let err = Vector::<f32, 4>::zero().try_normalized().unwrap_err();
        assert_eq!(err, MathError::DegenerateNormalize);
        assert!(vector3d(0.0, 2.0, 0.0).try_normalized().is_ok());
    }

    #[test]
    fn test_cross() {
        let x = vector3d(1.0, 0.0, 0.0);
        let y = vector3d(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), vector3d(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), vector3d(0.0, 0.0, -1.0));

        let a = vector3d(2.0, 3.0, 4.0);
        let b = vector3d(5.0, 6.0, 7.0);
        let c = a.cross(b);
        assert!(approx_eq(c.dot(a), 0.0));
        assert!(approx_eq(c.dot(b), 0.0));
    }

    #[test]
    fn test_cast() {
        let v = vector3d(0.5f64, 1.5, -2.0);
        let f: Vector3d<f32> = v.cast();
        assert_eq!(f, vector3d(0.5f32, 1.5, -2.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", vector3d(1, 2, 3)), "( 1, 2, 3 )");
        assert_eq!(format!("{}", Vector::new([7])), "( 7 )");
        assert_eq!(format!("{}", vector4d(0.5, 1.0, 1.5, 2.0)), "( 0.5, 1, 1.5, 2 )");
    }

    #[test]
    fn test_serde_as_sequence() {
        #[derive(Serialize, Deserialize)]
        struct Holder {
            offset: Vector4d<f64>,
        }

        let holder = Holder { offset: vector4d(1.0, 2.0, 3.0, 3.7) };
        let text = toml::to_string(&holder).unwrap();
        assert!(text.contains("offset"));

        let parsed: Holder = toml::from_str(&text).unwrap();
        assert_eq!(parsed.offset, holder.offset);

        let bad: Result<Holder, _> = toml::from_str("offset = [1.0, 2.0]");
        assert!(bad.is_err());
    }

    #[test]
    fn test_points_from_flat_buffer() {
        let flat = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let points: Vec<Vector4d<f64>> = flat
            .chunks_exact(4)
            .map(Vector::try_from_slice)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1], vector4d(5.0, 6.0, 7.0, 8.0));
    }
}
