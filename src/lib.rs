//! Tesser - 4D wireframe visualizer
//!
//! The binary loads [`config::AppConfig`], builds the featured tesseract
//! plus axis and grid, and runs one frame of the projection pipeline.

pub mod config;
pub mod scene;
