//! Line-list geometry
//!
//! Shapes are stored as independent line segments between 4D points, which
//! is what a `LINES` draw consumes. Three-dimensional shapes simply keep
//! `q = 0`.

use tesser_math::{vector4d, Vector4d};

use crate::ObjectTransform;

/// A segment between two 4D points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Vector4d<f64>,
    pub end: Vector4d<f64>,
}

impl Line {
    pub fn new(start: Vector4d<f64>, end: Vector4d<f64>) -> Self {
        Self { start, end }
    }

    /// Move both endpoints by `offset`
    pub fn translated(&self, offset: Vector4d<f64>) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }
}

/// Flatten lines into 4 scalars per point, 2 points per line
pub fn positions(lines: &[Line]) -> Vec<f64> {
    lines
        .iter()
        .flat_map(|line| line.start.iter().chain(line.end.iter()))
        .collect()
}

/// Unit segments along each of the four axes
pub fn axis() -> Vec<Line> {
    let origin = Vector4d::zero();
    vec![
        Line::new(origin, vector4d(1.0, 0.0, 0.0, 0.0)),
        Line::new(origin, vector4d(0.0, 1.0, 0.0, 0.0)),
        Line::new(origin, vector4d(0.0, 0.0, 1.0, 0.0)),
        Line::new(origin, vector4d(0.0, 0.0, 0.0, 1.0)),
    ]
}

/// Closed outline through four corners
pub fn quadrilateral(
    a: Vector4d<f64>,
    b: Vector4d<f64>,
    c: Vector4d<f64>,
    d: Vector4d<f64>,
) -> Vec<Line> {
    vec![Line::new(a, b), Line::new(b, c), Line::new(c, d), Line::new(d, a)]
}

/// Sweep `lines` along `direction`
///
/// Returns the originals, a translated copy, and a connector from each
/// endpoint to its copy.
pub fn extruded(lines: &[Line], direction: Vector4d<f64>) -> Vec<Line> {
    let mut result = Vec::with_capacity(lines.len() * 4);
    result.extend_from_slice(lines);
    result.extend(lines.iter().map(|line| line.translated(direction)));
    for line in lines {
        result.push(Line::new(line.start, line.start + direction));
        result.push(Line::new(line.end, line.end + direction));
    }
    result
}

/// Unit grid on the XZ plane spanning `-half_extent..=half_extent`
///
/// The two segments covered by the positive X and Z axis indicators are left
/// out so they do not overdraw [`axis`].
pub fn grid(half_extent: i32) -> Vec<Line> {
    let point = |a: i32, b: i32| vector4d(a as f64, 0.0, b as f64, 0.0);
    let mut lines = Vec::new();
    for b in -half_extent..=half_extent {
        for a in -half_extent..half_extent {
            if b == 0 && a == 0 {
                continue;
            }
            lines.push(Line::new(point(a, b), point(a + 1, b)));
        }
    }
    for a in -half_extent..=half_extent {
        for b in -half_extent..half_extent {
            if a == 0 && b == 0 {
                continue;
            }
            lines.push(Line::new(point(a, b), point(a, b + 1)));
        }
    }
    lines
}

/// Axis-aligned cube with side `2 * half` centered at the origin
pub fn cube(half: f64) -> Vec<Line> {
    let face = quadrilateral(
        vector4d(half, half, half, 0.0),
        vector4d(-half, half, half, 0.0),
        vector4d(-half, -half, half, 0.0),
        vector4d(half, -half, half, 0.0),
    );
    extruded(&face, vector4d(0.0, 0.0, -2.0 * half, 0.0))
}

/// Hypercube with side `2 * half` centered at the origin
pub fn tesseract(half: f64) -> Vec<Line> {
    let shift = vector4d(0.0, 0.0, 0.0, -half);
    let base: Vec<Line> = cube(half).iter().map(|line| line.translated(shift)).collect();
    extruded(&base, vector4d(0.0, 0.0, 0.0, 2.0 * half))
}

/// A drawable object: lines, color, pose and dimensionality
#[derive(Clone, Debug)]
pub struct Geometry {
    pub name: String,
    /// Packed `0xRRGGBB`
    pub color: u32,
    /// Whether the fourth-dimension visualization applies
    pub four_dimensional: bool,
    pub transform: ObjectTransform,
    positions: Vec<f64>,
    line_count: usize,
}

impl Geometry {
    pub fn new(name: impl Into<String>, lines: &[Line], color: u32) -> Self {
        Self {
            name: name.into(),
            color,
            four_dimensional: false,
            transform: ObjectTransform::default(),
            positions: positions(lines),
            line_count: lines.len(),
        }
    }

    pub fn four_dimensional(mut self) -> Self {
        self.four_dimensional = true;
        self
    }

    pub fn with_transform(mut self, transform: ObjectTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Flat point buffer, 4 scalars per point
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn point_count(&self) -> usize {
        self.line_count * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn distinct_points(lines: &[Line]) -> usize {
        let mut seen = HashSet::new();
        for line in lines {
            for p in [line.start, line.end] {
                seen.insert(p.to_array().map(f64::to_bits));
            }
        }
        seen.len()
    }

    #[test]
    fn test_positions_layout() {
        let lines = [Line::new(vector4d(1.0, 2.0, 3.0, 4.0), vector4d(5.0, 6.0, 7.0, 8.0))];
        assert_eq!(positions(&lines), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_axis() {
        let lines = axis();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3].end, vector4d(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_quadrilateral_is_closed() {
        let a = vector4d(0.0, 0.0, 0.0, 0.0);
        let lines = quadrilateral(a, vector4d(1.0, 0.0, 0.0, 0.0), vector4d(1.0, 1.0, 0.0, 0.0), vector4d(0.0, 1.0, 0.0, 0.0));
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3].end, a);
    }

    #[test]
    fn test_extruded_counts() {
        let square = quadrilateral(
            vector4d(0.0, 0.0, 0.0, 0.0),
            vector4d(1.0, 0.0, 0.0, 0.0),
            vector4d(1.0, 1.0, 0.0, 0.0),
            vector4d(0.0, 1.0, 0.0, 0.0),
        );
        let lines = extruded(&square, vector4d(0.0, 0.0, 1.0, 0.0));
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[4], square[0].translated(vector4d(0.0, 0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_cube_and_tesseract_corners() {
        assert_eq!(distinct_points(&cube(1.0)), 8);
        assert_eq!(distinct_points(&tesseract(1.0)), 16);
        assert_eq!(tesseract(1.0).len(), 64);
    }

    #[test]
    fn test_grid_omits_axis_segments() {
        let lines = grid(5);
        assert_eq!(lines.len(), 2 * (11 * 10 - 1));
        let x_indicator = Line::new(vector4d(0.0, 0.0, 0.0, 0.0), vector4d(1.0, 0.0, 0.0, 0.0));
        assert!(!lines.contains(&x_indicator));
    }

    #[test]
    fn test_geometry_buffers() {
        let g = Geometry::new("Cube", &cube(2.0), 0xFF8000).four_dimensional();
        assert_eq!(g.line_count(), 16);
        assert_eq!(g.point_count(), 32);
        assert_eq!(g.positions().len(), 16 * 2 * 4);
        assert!(g.four_dimensional);
    }
}
