//! Dimension-generic linear algebra for Tesser
//!
//! This crate provides fixed-size vectors and square matrices over any
//! [`Scalar`], plus the homogeneous transform builders used to project
//! 4D geometry down to screen space.
//!
//! ## Core Types
//!
//! - [`Vector`] - immutable `N`-component vector
//! - [`Matrix`] - immutable `N`x`N` matrix
//! - [`Rgb`] - normalized color decoded from `0xRRGGBB`
//!
//! ## Transforms
//!
//! Every builder returns a [`Matrix`] in row-vector convention: points are
//! multiplied from the left, so translations live in the last row and
//! [`transform_chain`](fn@transform_chain) applies its left-most matrix first.
//!
//! - [`rotation`] about a named [`RotationPlane`]
//! - [`translation`], [`scale`]
//! - [`perspective`], [`look_at`], [`aspect_ratio_correction`], [`fov_x_scale`], [`view`]
//!
//! ## Projection
//!
//! `vector * matrix` (see [`project`]) extends an `N-1` component point with a
//! homogeneous `1`, multiplies it through an `N`x`N` matrix and divides by the
//! resulting `w`.

mod dims;
mod error;
mod scalar;
mod vector;
mod matrix;
mod projection;
pub mod transform;
pub mod color;

pub use error::MathError;
pub use scalar::{Scalar, Float, zero, one};
pub use vector::{Vector, Vector3d, Vector4d, vector3d, vector4d};
pub use matrix::{Matrix, MatrixLocation, at, transpose};
pub use projection::{homogeneous, project, try_project, transform_chain};
pub use transform::{
    Radians, radians, pi,
    RotationPlane, rotation,
    translation, scale, perspective,
    Camera, look_at, aspect_ratio_correction, fov_x_scale, view,
};
pub use color::{Rgb, decode_rgb};
