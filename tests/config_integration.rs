//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::fs;

use serial_test::serial;
use tesser::config::AppConfig;
use tesser_render::VisualizationMode;

/// Sets an environment variable for the lifetime of the guard
struct EnvVar(&'static str);

impl EnvVar {
    fn set(key: &'static str, value: &str) -> Self {
        std::env::set_var(key, value);
        EnvVar(key)
    }
}

impl Drop for EnvVar {
    fn drop(&mut self) {
        std::env::remove_var(self.0);
    }
}

#[test]
#[serial]
fn test_env_override() {
    let _distance = EnvVar::set("TESSER_CAMERA__DISTANCE", "7.5");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.camera.distance, 7.5);
}

#[test]
#[serial]
fn test_env_override_visualization_mode() {
    let _mode = EnvVar::set("TESSER_VISUALIZATION__MODE", "collapse_z");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.visualization.mode, VisualizationMode::CollapseZ);
}

#[test]
#[serial]
fn test_default_file_loading() {
    let config = AppConfig::load().unwrap();
    assert_eq!(config.object.color, 0xFF8000);
    assert_eq!(config.object.translation, [0.0, 0.0, 0.0, 3.7]);
    assert_eq!(config.viewport.width, 1280);
    assert!(!config.visualization.cube);
}

#[test]
#[serial]
fn test_user_file_and_env_layering() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        "[camera]\ndistance = 3.0\nfar = 50.0\n",
    )
    .unwrap();
    fs::write(dir.path().join("user.toml"), "[camera]\ndistance = 9.0\n").unwrap();

    let config = AppConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.camera.distance, 9.0);
    assert_eq!(config.camera.far, 50.0);

    let _distance = EnvVar::set("TESSER_CAMERA__DISTANCE", "11.0");
    let config = AppConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.camera.distance, 11.0);
    assert_eq!(config.camera.far, 50.0);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.camera.far, 100.0);
}
