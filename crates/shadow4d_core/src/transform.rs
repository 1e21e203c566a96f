//! 4D Transform (position, rotation, scale) and shadow projection
//!
//! A vertex goes through three stages:
//!
//! 1. `transform_point`: rotate, scale componentwise, translate (4D)
//! 2. `project`: perspective shadow from a light on the W axis (4D to 3D)
//! 3. `place`: translate by the 3D placement

use serde::{Serialize, Deserialize};
use shadow4d_math::{mat4, Euler4, Mat4, Vec3, Vec4};

/// Default distance of the light along W
pub const DEFAULT_LIGHT_DISTANCE: f32 = 1.5;

/// Smallest allowed magnitude of `light_distance - w`
pub const PROJECTION_EPSILON: f32 = 1e-6;

/// A 4D transform with per-plane rotation, per-axis scale and a projection
/// light
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform4D {
    /// Position in 4D space
    pub position: Vec4,
    /// Rotation angles in degrees
    pub rotation: Euler4,
    /// Per-axis scale
    pub scale: Vec4,
    /// Distance of the light from the origin along W
    pub light_distance: f32,
    /// 3D offset applied after projection
    pub placement: Vec3,
}

impl Default for Transform4D {
    fn default() -> Self {
        Self::identity()
    }
}

/// Result of projecting one point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub point: Vec3,
    /// Set when the point sat within [`PROJECTION_EPSILON`] of the light
    pub singular: bool,
}

impl Transform4D {
    /// Identity transform with the default light distance
    pub fn identity() -> Self {
        Self {
            position: Vec4::ZERO,
            rotation: Euler4::ZERO,
            scale: Vec4::ONE,
            light_distance: DEFAULT_LIGHT_DISTANCE,
            placement: Vec3::ZERO,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec4) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Create a transform with just a rotation
    pub fn from_rotation(rotation: Euler4) -> Self {
        Self {
            rotation,
            ..Self::identity()
        }
    }

    #[inline]
    pub fn rotation_matrix(&self) -> Mat4 {
        self.rotation.rotation_matrix()
    }

    /// Transform a point: rotate, then scale componentwise, then translate.
    pub fn transform_point(&self, p: Vec4) -> Vec4 {
        self.transform_with(&self.rotation_matrix(), p)
    }

    /// `transform_point` with a precomputed rotation matrix
    #[inline]
    pub fn transform_with(&self, rotation: &Mat4, p: Vec4) -> Vec4 {
        mat4::transform(*rotation, p).component_mul(self.scale) + self.position
    }

    /// Project a 4D point to 3D, dropping W.
    ///
    /// The point is scaled by `1 / (light_distance - w)`.
    pub fn project(&self, p: Vec4) -> Vec3 {
        self.project_checked(p).point
    }

    /// Project a 4D point, reporting whether it hit the light.
    ///
    /// When `|light_distance - w| < PROJECTION_EPSILON` the denominator is
    /// clamped to `PROJECTION_EPSILON` with the sign of the difference, so the
    /// result stays finite.
    pub fn project_checked(&self, p: Vec4) -> Projection {
        let mut denom = self.light_distance - p.w;
        let singular = denom.abs() < PROJECTION_EPSILON;
        if singular {
            denom = if denom < 0.0 { -PROJECTION_EPSILON } else { PROJECTION_EPSILON };
        }
        Projection {
            point: p.xyz() * (1.0 / denom),
            singular,
        }
    }

    /// Full pipeline for one vertex: transform, project, place
    pub fn place(&self, p: Vec4) -> Vec3 {
        self.project(self.transform_point(p)) + self.placement
    }
}
