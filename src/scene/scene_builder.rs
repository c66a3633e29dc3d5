//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for collecting the geometries of one frame.

use tesser_render::geometry::{self, Geometry};
use tesser_render::ObjectTransform;

use crate::config::AppConfig;

/// Axis indicator color
const AXIS_COLOR: u32 = 0x202020;
/// Grid line color
const GRID_COLOR: u32 = 0xA0A0A0;
/// Grid spans this many units on each side of the origin
const GRID_HALF_EXTENT: i32 = 5;
/// Comparison cube color
const CUBE_COLOR: u32 = 0x3366CC;
/// Comparison cube sits this far along -x from the featured object
const CUBE_OFFSET: f64 = 3.0;

/// Builder for the list of geometries drawn each frame
///
/// # Example
/// ```ignore
/// let geometries = SceneBuilder::new()
///     .add_tesseract("Featured", 1.0, 0xFF8000, ObjectTransform::default())
///     .add_axis()
///     .build();
/// ```
#[derive(Default)]
pub struct SceneBuilder {
    geometries: Vec<Geometry>,
}

impl SceneBuilder {
    /// Create an empty scene builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the scene described by the configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let mut builder = Self::new().add_tesseract(
            "Featured Geometry",
            config.object.size,
            config.object.color,
            config.object_transform(),
        );
        if config.visualization.axis {
            builder = builder.add_axis();
        }
        if config.visualization.grid {
            builder = builder.add_grid(GRID_HALF_EXTENT);
        }
        if config.visualization.cube {
            let mut translation = config.object.translation;
            translation[0] -= CUBE_OFFSET;
            builder = builder.add_cube(
                "Comparison Cube",
                config.object.size,
                CUBE_COLOR,
                ObjectTransform::new([0.0; 4], translation),
            );
        }
        builder
    }

    /// Add a four-dimensional hypercube
    pub fn add_tesseract(
        mut self,
        name: &str,
        half: f64,
        color: u32,
        transform: ObjectTransform,
    ) -> Self {
        self.geometries.push(
            Geometry::new(name, &geometry::tesseract(half), color)
                .four_dimensional()
                .with_transform(transform),
        );
        self
    }

    /// Add a three-dimensional cube
    pub fn add_cube(mut self, name: &str, half: f64, color: u32, transform: ObjectTransform) -> Self {
        self.geometries.push(
            Geometry::new(name, &geometry::cube(half), color).with_transform(transform),
        );
        self
    }

    /// Add the unit axis indicator
    pub fn add_axis(mut self) -> Self {
        self.geometries.push(Geometry::new("Axis", &geometry::axis(), AXIS_COLOR));
        self
    }

    /// Add the XZ unit grid
    pub fn add_grid(mut self, half_extent: i32) -> Self {
        self.geometries.push(Geometry::new("Grid", &geometry::grid(half_extent), GRID_COLOR));
        self
    }

    /// Finish building
    pub fn build(self) -> Vec<Geometry> {
        self.geometries
    }
}
