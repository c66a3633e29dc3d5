//! Tesser - 4D wireframe visualizer
//!
//! Loads the configuration, builds the scene and runs the projection
//! pipeline for a single frame, logging what a renderer would upload.

use tesser::config::AppConfig;
use tesser::scene::SceneBuilder;
use tesser_render::prepare_frame;

fn main() {
    let loaded = AppConfig::load();
    let log_level = match &loaded {
        Ok(config) => config.debug.log_level.clone(),
        Err(_) => AppConfig::default().debug.log_level,
    };

    // RUST_LOG overrides the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    log::info!("Starting Tesser");

    let camera = config.camera();
    let geometries = SceneBuilder::from_config(&config).build();
    let visualization = config.visualization();

    log::info!(
        "Camera at distance {} (aspect {:.3}, fov {:.1}°), {} geometries",
        camera.distance,
        camera.aspect_ratio,
        config.camera.fov_x,
        geometries.len()
    );

    let frame = match prepare_frame(
        &camera,
        config.camera.near,
        config.camera.far,
        &geometries,
        &visualization,
    ) {
        Ok(frame) => frame,
        Err(e) => {
            log::error!("Failed to prepare frame: {}", e);
            std::process::exit(1);
        }
    };

    if config.debug.dump_matrices {
        log::info!("View matrix: {}", camera.view_matrix());
        log::info!("View coefficients: {:?}", frame.matrices.view);
        log::info!("Projection coefficients: {:?}", frame.matrices.projection);
    }

    for batch in &frame.batches {
        log::info!("{}: {} lines", batch.name, batch.line_count());
        for vertex in batch.vertices.iter().take(4) {
            log::debug!("  {:?} {:?}", vertex.position, vertex.color);
        }
    }

    let bytes: usize = frame
        .batches
        .iter()
        .map(|b| tesser_render::as_bytes(&b.vertices).len())
        .sum();
    log::info!("Frame ready: {} vertices, {} bytes", frame.vertex_count(), bytes);
}
