//! Bringing transformed 4D points down to 3D

use serde::{Deserialize, Serialize};
use tesser_math::{vector3d, Vector3d, Vector4d};

/// How the fourth axis of a 4D point is made visible
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualizationMode {
    /// Perspective divide by `q`: points further along q shrink towards the origin
    #[default]
    WireframeProjection,
    /// Drop z and show q in its place
    CollapseZ,
}

/// Visualization settings for four-dimensional geometry
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Visualization {
    pub mode: VisualizationMode,
    /// Added to `q` before the wireframe divide, keeping points at `q = 0` finite
    pub projection_volume: f64,
}

impl Default for Visualization {
    fn default() -> Self {
        Self {
            mode: VisualizationMode::WireframeProjection,
            projection_volume: 0.0,
        }
    }
}

impl Visualization {
    pub fn new(mode: VisualizationMode) -> Self {
        Self { mode, ..Self::default() }
    }

    pub fn with_projection_volume(mut self, volume: f64) -> Self {
        self.projection_volume = volume;
        self
    }

    /// Map a model-transformed point to 3D
    ///
    /// Three-dimensional geometry just drops `q`; the mode only applies when
    /// `four_dimensional` is set.
    pub fn apply(&self, point: Vector4d<f64>, four_dimensional: bool) -> Vector3d<f64> {
        if !four_dimensional {
            return vector3d(point.x(), point.y(), point.z());
        }
        match self.mode {
            VisualizationMode::WireframeProjection => {
                let divisor = point.q() + self.projection_volume;
                vector3d(point.x(), point.y(), point.z()).divided(divisor)
            }
            VisualizationMode::CollapseZ => vector3d(point.x(), point.y(), point.q()),
        }
    }
}
