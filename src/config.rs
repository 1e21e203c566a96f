//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`S4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use shadow4d_core::{Centering, Euler4, ShapeKind, Transform4D, Vec3, Vec4, DEFAULT_LIGHT_DISTANCE};
use std::path::Path;
use thiserror::Error;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Shape selection
    #[serde(default)]
    pub shape: ShapeConfig,
    /// Shadow projection
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Initial transform
    #[serde(default)]
    pub transform: TransformConfig,
    /// Constant rotation and tick settings
    #[serde(default)]
    pub animation: AnimationConfig,
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
    /// 3. Environment variables (`S4D_*`)
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

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // S4D_SHAPE__KIND=cell5 -> shape.kind = "cell5"
        figment = figment.merge(Env::prefixed("S4D_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the demo cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.animation.tick_rate.is_finite() || self.animation.tick_rate <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "animation.tick_rate must be finite and positive, got {}",
                self.animation.tick_rate
            )));
        }
        if !self.animation.duration.is_finite() || self.animation.duration < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "animation.duration must be finite and not negative, got {}",
                self.animation.duration
            )));
        }
        if !self.projection.light_distance.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "projection.light_distance must be finite, got {}",
                self.projection.light_distance
            )));
        }
        Ok(())
    }

    /// Transform the shape starts with
    pub fn initial_transform(&self) -> Transform4D {
        Transform4D {
            position: Vec4::from_array(self.transform.position),
            rotation: self.transform.rotation,
            scale: Vec4::from_array(self.transform.scale),
            light_distance: self.projection.light_distance,
            placement: Vec3::from_array(self.projection.placement),
        }
    }
}

/// Shape configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Built-in shape to build
    pub kind: ShapeKind,
    /// Vertex placement of the built-in shape
    pub centering: Centering,
    /// Remove triangles and edges shared between cells
    pub cull: bool,
    /// Mesh asset to load instead of the built-in shape
    pub asset: Option<String>,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Tesseract,
            centering: Centering::Centered,
            cull: true,
            asset: None,
        }
    }
}

/// Projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Distance of the light along W
    pub light_distance: f32,
    /// 3D offset of the projected shape [x, y, z]
    pub placement: [f32; 3],
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            light_distance: DEFAULT_LIGHT_DISTANCE,
            placement: [0.0, 0.0, 0.0],
        }
    }
}

/// Initial transform configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Position [x, y, z, w]
    pub position: [f32; 4],
    /// Rotation angles in degrees
    pub rotation: Euler4,
    /// Per-axis scale [x, y, z, w]
    pub scale: [f32; 4],
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            position: [0.0; 4],
            rotation: Euler4::ZERO,
            scale: [1.0; 4],
        }
    }
}

/// Animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Constant rotation rates in degrees per second
    pub constant_rotation: Euler4,
    /// Ticks per second
    pub tick_rate: f32,
    /// Length of the demo run in seconds
    pub duration: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            constant_rotation: Euler4::new(0.0, 0.0, 0.0, 30.0, 0.0, 15.0),
            tick_rate: 60.0,
            duration: 2.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log a summary of every recomputed frame
    pub log_frames: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_frames: false,
        }
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Sources could not be read or merged
    #[error("Configuration error: {0}")]
    Load(#[from] Box<figment::Error>),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Load(Box::new(e))
    }
}
