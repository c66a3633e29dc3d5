//! Numeric traits
//!
//! [`Scalar`] supplies the compile-time `ZERO`/`ONE` constants every builder
//! needs; [`Float`] adds the transcendental functions used by rotations,
//! lengths and projection.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A component type for [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix)
pub trait Scalar:
    Copy
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Additive identity
    const ZERO: Self;
    /// Multiplicative identity
    const ONE: Self;
}

/// Floating-point scalars
pub trait Float: Scalar {
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn abs(self) -> Self;
    fn is_finite(self) -> bool;
    /// Lossy conversion from `f64` (angles and byte ratios are computed in `f64`)
    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;
}

/// The value representing zero for `T`
#[inline]
pub const fn zero<T: Scalar>() -> T {
    T::ZERO
}

/// The value representing one for `T`
#[inline]
pub const fn one<T: Scalar>() -> T {
    T::ONE
}

macro_rules! impl_scalar {
    ($($t:ty => $zero:expr, $one:expr);* $(;)?) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
            }
        )*
    };
}

impl_scalar! {
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
    i32 => 0, 1;
    i64 => 0, 1;
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl Float for $t {
                #[inline]
                fn sqrt(self) -> Self { <$t>::sqrt(self) }
                #[inline]
                fn sin(self) -> Self { <$t>::sin(self) }
                #[inline]
                fn cos(self) -> Self { <$t>::cos(self) }
                #[inline]
                fn tan(self) -> Self { <$t>::tan(self) }
                #[inline]
                fn abs(self) -> Self { <$t>::abs(self) }
                #[inline]
                fn is_finite(self) -> bool { <$t>::is_finite(self) }
                #[inline]
                fn from_f64(value: f64) -> Self { value as $t }
                #[inline]
                fn to_f64(self) -> f64 { self as f64 }
            }
        )*
    };
}

impl_float!(f32, f64);
