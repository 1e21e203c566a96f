//! Serializable shape kinds
//!
//! `ShapeKind` names one of the built-in polytope generators so it can be
//! picked from config files or persisted, and builds its mesh on demand.

use serde::{Serialize, Deserialize};
use shadow4d_math::{Cell5, Centering, Model4D, Tesseract};

use crate::error::MeshResult;
use crate::mesh::Mesh4D;

/// A built-in polytope
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// The 4-simplex: 5 vertices, 5 tetrahedral cells
    Cell5,
    /// The 4D hypercube: 16 vertices, 40 tetrahedral cells
    #[default]
    Tesseract,
}

impl ShapeKind {
    /// All built-in shapes
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Cell5, ShapeKind::Tesseract];

    /// Create the generator for this shape
    pub fn model(&self, centering: Centering) -> Box<dyn Model4D> {
        match self {
            ShapeKind::Cell5 => Box::new(Cell5::new(centering)),
            ShapeKind::Tesseract => Box::new(Tesseract::new(centering)),
        }
    }

    /// Build the mesh for this shape and log its statistics
    pub fn build_mesh(&self, centering: Centering, cull: bool) -> MeshResult<Mesh4D> {
        let mesh = Mesh4D::from_model(self.model(centering).as_ref(), cull)?;
        log::info!(
            "{} mesh: {} vertices, {} cells, {} triangles, {} edges",
            self.name(),
            mesh.vertex_count(),
            mesh.cell_count(),
            mesh.triangle_count(),
            mesh.edge_count()
        );
        Ok(mesh)
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Cell5 => "5-cell",
            ShapeKind::Tesseract => "tesseract",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
