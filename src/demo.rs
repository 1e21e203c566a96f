//! Headless demo run
//!
//! Builds the configured shape, spins it for the configured duration and
//! reports what the projection produced.

use std::sync::Arc;

use shadow4d_core::{
    frame, AssetError, Mesh4D, MeshAsset, MeshError, ProjectedFrame, ShapeController, Vec3,
};
use thiserror::Error;

use crate::config::AppConfig;

/// Errors that abort a demo run
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("failed to build mesh: {0}")]
    Mesh(#[from] MeshError),

    #[error("failed to load mesh asset: {0}")]
    Asset(#[from] AssetError),
}

/// Summary of a finished run
#[derive(Clone, Debug, PartialEq)]
pub struct DemoReport {
    pub vertices: usize,
    pub triangles: usize,
    pub edges: usize,
    /// Ticks executed
    pub ticks: usize,
    /// Frames computed, including the initial one
    pub frames: u64,
    /// Ticks that found a vertex on the light
    pub singular_frames: usize,
    /// Bounds of the last frame
    pub bounds: Option<(Vec3, Vec3)>,
}

/// Build the mesh named by the config
pub fn build_mesh(config: &AppConfig) -> Result<Mesh4D, DemoError> {
    match &config.shape.asset {
        Some(path) => Ok(MeshAsset::load_mesh(path)?),
        None => Ok(config.shape.kind.build_mesh(config.shape.centering, config.shape.cull)?),
    }
}

/// Run the demo to completion
pub fn run(config: &AppConfig) -> Result<DemoReport, DemoError> {
    let mesh = Arc::new(build_mesh(config)?);
    let mut controller = ShapeController::new(Arc::clone(&mesh), config.initial_transform());

    if !config.animation.constant_rotation.is_zero() {
        controller.start_constant_rotation(config.animation.constant_rotation);
    }

    let dt = 1.0 / config.animation.tick_rate;
    let ticks = (config.animation.duration * config.animation.tick_rate).round() as usize;
    let mut singular_frames = usize::from(controller.frame().is_singular());

    for _ in 0..ticks {
        if let Some(frame) = controller.tick(dt) {
            if frame.is_singular() {
                singular_frames += 1;
            }
            if config.debug.log_frames {
                log_frame(frame);
            }
        }
    }

    let last = controller.frame();
    let segments = frame::edge_segments(&mesh, last);
    log::info!(
        "Finished {} ticks: {} frames, {} edge segments, rotation {:?}",
        ticks,
        last.generation,
        segments.len(),
        controller.rotation()
    );

    Ok(DemoReport {
        vertices: mesh.vertex_count(),
        triangles: mesh.triangle_count(),
        edges: mesh.edge_count(),
        ticks,
        frames: last.generation,
        singular_frames,
        bounds: last.bounds(),
    })
}

fn log_frame(frame: &ProjectedFrame) {
    match frame.bounds() {
        Some((lo, hi)) => log::info!(
            "Frame {}: bounds ({:.3}, {:.3}, {:.3})..({:.3}, {:.3}, {:.3})",
            frame.generation,
            lo.x, lo.y, lo.z,
            hi.x, hi.y, hi.z
        ),
        None => log::info!("Frame {}: empty", frame.generation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shadow4d_core::{Euler4, ShapeKind};

    #[test]
    fn test_default_run() {
        let config = AppConfig::default();
        let report = run(&config).unwrap();
        assert_eq!(report.vertices, 16);
        assert_eq!(report.triangles, 80);
        assert_eq!(report.edges, 56);
        assert_eq!(report.ticks, 120);
        // every tick rotates, plus the initial frame
        assert_eq!(report.frames, 121);
        assert_eq!(report.singular_frames, 0);
        assert!(report.bounds.is_some());
    }

    #[test]
    fn test_still_shape_computes_once() {
        let mut config = AppConfig::default();
        config.shape.kind = ShapeKind::Cell5;
        config.animation.constant_rotation = Euler4::ZERO;
        let report = run(&config).unwrap();
        assert_eq!(report.frames, 1);
        assert_eq!(report.triangles, 10);
    }

    #[test]
    fn test_missing_asset() {
        let mut config = AppConfig::default();
        config.shape.asset = Some("does/not/exist.ron".to_string());
        assert!(matches!(run(&config), Err(DemoError::Asset(_))));
    }
}
