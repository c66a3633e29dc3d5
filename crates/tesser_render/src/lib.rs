//! Rendering adapter for Tesser
//!
//! This crate sits between the math core and whatever issues draw calls. It
//! turns raw point buffers (4 scalars per point) and per-object transforms
//! into GPU-ready vertices, and packs view/projection matrices into flat
//! coefficient buffers. It never touches a graphics API itself.
//!
//! ## Key Components
//!
//! - [`ObjectTransform`] - the 8 scalars describing an object's pose
//! - [`Visualization`] - how 4D points are brought down to 3D
//! - [`Vertex`] - `Pod` vertex layout for upload
//! - [`geometry`] - line-list builders (axis, grid, cube, tesseract)
//! - [`frame`] - per-frame vertex batches and packed matrices

pub mod error;
pub mod transform;
pub mod visualize;
pub mod vertex;
pub mod geometry;
pub mod frame;

pub use error::RenderError;
pub use transform::ObjectTransform;
pub use visualize::{Visualization, VisualizationMode};
pub use vertex::{Vertex, as_bytes};
pub use geometry::{Geometry, Line};
pub use frame::{build_vertices, pack_matrix, prepare_frame, DrawBatch, Frame, FrameMatrices};

// Re-export core types for convenience
pub use tesser_math::{Camera, Matrix, MathError, Rgb, RotationPlane, Vector, Vector3d, Vector4d};
