//! 4D Mathematics Library
//!
//! This crate provides the vector, rotation and polytope types used by
//! shadow4d.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Vec3`] - 3D vector, output of the shadow projection
//! - [`Mat4`] - 4x4 matrix for rotations
//! - [`RotationPlane`] / [`Euler4`] - plane rotations and per-plane angles
//!
//! ## Shape Types
//!
//! - [`Model4D`] - Trait for polytope generators (vertices + tetrahedral cells)
//! - [`Tetrahedron`] - A 3-simplex defined by vertex indices
//! - [`Cell5`] - The 4-simplex
//! - [`Tesseract`] - The 4D hypercube, 40 tetrahedra

mod vec3;
mod vec4;
mod euler4;
pub mod mat4;
pub mod shape;
pub mod cell5;
pub mod tesseract;

pub use vec3::Vec3;
pub use vec4::Vec4;
pub use euler4::{Euler4, RotationPlane};
pub use mat4::Mat4;
pub use shape::{Centering, Model4D, Tetrahedron, VERTS_IN_CELL};
pub use cell5::Cell5;
pub use tesseract::Tesseract;
