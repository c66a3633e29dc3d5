//! GPU vertex layout
//!
//! Matches a line shader taking a homogeneous position and an RGBA color.

use bytemuck::{Pod, Zeroable};
use tesser_math::{Rgb, Vector3d};

/// A projected line vertex
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Projected position
    pub position: [f32; 3],
    /// Homogeneous coordinate, always 1
    pub w: f32,
    /// RGB color
    pub color: [f32; 3],
    /// Opacity, always 1
    pub alpha: f32,
}

impl Vertex {
    /// Create a vertex from a projected point and color
    pub fn new(position: Vector3d<f32>, color: Rgb<f32>) -> Self {
        Self {
            position: position.to_array(),
            w: 1.0,
            color: color.to_array(),
            alpha: 1.0,
        }
    }
}

/// View vertices as raw bytes for upload
#[inline]
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tesser_math::vector3d;

    #[test]
    fn test_layout_size() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }

    #[test]
    fn test_new_fills_constants() {
        let v = Vertex::new(vector3d(1.0, 2.0, 3.0), Rgb::new(0.5, 0.25, 0.0));
        assert_eq!(v.position, [1.0, 2.0, 3.0]);
        assert_eq!(v.w, 1.0);
        assert_eq!(v.color, [0.5, 0.25, 0.0]);
        assert_eq!(v.alpha, 1.0);
    }

    #[test]
    fn test_as_bytes() {
        let vertices = [Vertex::new(vector3d(1.0, 0.0, 0.0), Rgb::WHITE); 3];
        let bytes = as_bytes(&vertices);
        assert_eq!(bytes.len(), 96);
        let back: &[Vertex] = bytemuck::cast_slice(bytes);
        assert_eq!(back, &vertices);
    }
}
