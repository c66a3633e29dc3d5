//! Homogeneous transform builders
//!
//! All builders produce row-vector matrices: a point `v` is transformed as
//! `v * m`, and translations occupy the last row.

mod rotation;
mod translation;
mod scale;
mod perspective;
mod view;

pub use rotation::{Radians, radians, pi, RotationPlane, rotation};
pub use translation::translation;
pub use scale::scale;
pub use perspective::perspective;
pub use view::{Camera, look_at, aspect_ratio_correction, fov_x_scale, view};
