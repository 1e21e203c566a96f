//! Core types for shadow4d
//!
//! This crate turns 4D polytopes into renderable 3D shadows:
//!
//! - [`Mesh4D`] - Triangles, edges and normals derived from tetrahedral cells
//! - [`ShapeKind`] - Built-in polytopes (5-cell, tesseract)
//! - [`Transform4D`] - Position, per-plane rotation, scale and projection light
//! - [`ShapeController`] - Dirty-checked transform and projection of one mesh
//! - [`ConstantRotation`] - Fixed-rate spin per plane
//! - [`PlaneDials`] - Absolute dial readings to rotation deltas
//! - [`ProjectedFrame`] - Placed 3D points after a recompute
//! - [`MeshAsset`] - RON persistence of mesh build inputs

mod error;
pub mod normals;
pub mod mesh;
mod shapes;
pub mod transform;
pub mod frame;
mod constant_rotation;
mod controller;
mod dials;
mod asset;

pub use error::{AssetError, MeshError, MeshResult};
pub use mesh::{CellData, Mesh4D};
pub use shapes::ShapeKind;
pub use transform::{Projection, Transform4D, DEFAULT_LIGHT_DISTANCE, PROJECTION_EPSILON};
pub use frame::ProjectedFrame;
pub use constant_rotation::ConstantRotation;
pub use controller::{DirtyFlags, ShapeController};
pub use dials::PlaneDials;
pub use asset::MeshAsset;

// Re-export commonly used types from shadow4d_math for convenience
pub use shadow4d_math::{Cell5, Centering, Euler4, Model4D, RotationPlane, Tesseract, Vec3, Vec4};
