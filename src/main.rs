//! shadow4d - 4D polytope shadows
//!
//! Spins the configured polytope and logs its projected 3D shadow.

use std::process::ExitCode;

use shadow4d::config::AppConfig;
use shadow4d::demo;

fn main() -> ExitCode {
    // Load configuration before logging so the level can come from it
    let loaded = AppConfig::load();
    let level = match &loaded {
        Ok(config) => config.debug.log_level.clone(),
        Err(_) => "info".to_string(),
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Starting shadow4d");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    log::info!(
        "Shape: {} (centering {:?}, cull {})",
        config.shape.kind,
        config.shape.centering,
        config.shape.cull
    );

    match demo::run(&config) {
        Ok(report) => {
            log::info!(
                "{} vertices, {} triangles, {} edges over {} frames ({} singular)",
                report.vertices,
                report.triangles,
                report.edges,
                report.frames,
                report.singular_frames
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
