//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`TESSER_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use tesser_math::{pi, radians, Camera};
use tesser_render::{ObjectTransform, Visualization, VisualizationMode};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Viewport configuration
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Featured object configuration
    #[serde(default)]
    pub object: ObjectConfig,
    /// Fourth-dimension visualization configuration
    #[serde(default)]
    pub visualization: VisualizationConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`TESSER_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // TESSER_CAMERA__DISTANCE=5 -> camera.distance = 5
        figment = figment.merge(Env::prefixed("TESSER_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Camera described by the camera and viewport sections
    pub fn camera(&self) -> Camera<f64> {
        self.camera.to_camera(self.viewport.aspect_ratio())
    }

    /// Pose of the featured object
    pub fn object_transform(&self) -> ObjectTransform {
        self.object.to_transform()
    }

    pub fn visualization(&self) -> Visualization {
        self.visualization.to_visualization()
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance from the origin
    pub distance: f64,
    /// Horizontal orbit rotation, in units of π
    pub horizontal_rotation: f64,
    /// Vertical orbit rotation, in units of π
    pub vertical_rotation: f64,
    /// Horizontal field of view in degrees
    pub fov_x: f64,
    /// Near clipping plane
    pub near: f64,
    /// Far clipping plane
    pub far: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 3.0,
            horizontal_rotation: 1.0 / 3.0,
            vertical_rotation: -1.0 / 8.0,
            fov_x: 90.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl CameraConfig {
    pub fn to_camera(&self, aspect_ratio: f64) -> Camera<f64> {
        Camera::new(self.distance, aspect_ratio)
            .with_rotation(pi(self.horizontal_rotation), pi(self.vertical_rotation))
            .with_fov_x(radians(self.fov_x))
    }
}

/// Viewport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl ViewportConfig {
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height.max(1) as f64
    }
}

/// Featured object configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectConfig {
    /// Rotation in the X, Y, Z and XQ planes, in units of π
    pub rotation: [f64; 4],
    /// Translation [x, y, z, q]
    pub translation: [f64; 4],
    /// Half the side length of the tesseract
    pub size: f64,
    /// Line color as 0xRRGGBB
    pub color: u32,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            rotation: [0.0; 4],
            translation: [0.0, 0.0, 0.0, 3.7],
            size: 1.0,
            color: 0xFF8000,
        }
    }
}

impl ObjectConfig {
    pub fn to_transform(&self) -> ObjectTransform {
        ObjectTransform::from_pi_multiples(self.rotation, self.translation)
    }
}

/// Visualization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationConfig {
    /// `wireframe_projection` or `collapse_z`
    pub mode: VisualizationMode,
    /// Offset added to q before the wireframe divide
    pub projection_volume: f64,
    /// Draw the unit grid
    pub grid: bool,
    /// Draw the axis indicator
    pub axis: bool,
    /// Draw a 3D cube beside the featured object for comparison
    pub cube: bool,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            mode: VisualizationMode::WireframeProjection,
            projection_volume: 0.0,
            grid: true,
            axis: true,
            cube: false,
        }
    }
}

impl VisualizationConfig {
    pub fn to_visualization(&self) -> Visualization {
        Visualization::new(self.mode).with_projection_volume(self.projection_volume)
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log the view and projection matrices
    pub dump_matrices: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            dump_matrices: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
