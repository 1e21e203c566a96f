//! Mesh assets
//!
//! A [`MeshAsset`] stores the inputs of a mesh build (vertices, cells and
//! the cull flag) in a RON file. Loading rebuilds the mesh, so derived
//! triangles, edges and normals are never stored.

use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};
use shadow4d_math::{Centering, Model4D, Vec4};

use crate::error::{AssetError, MeshResult};
use crate::mesh::Mesh4D;
use crate::shapes::ShapeKind;

/// Serializable build inputs of a mesh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshAsset {
    /// Asset name (for display/debugging)
    pub name: String,
    /// Vertex positions
    pub vertices: Vec<Vec4>,
    /// Flat cell array, 4 indices per cell
    pub cells: Vec<usize>,
    /// Remove shared triangles and edges when building
    #[serde(default)]
    pub cull: bool,
}

impl MeshAsset {
    /// Capture the build inputs of an existing mesh
    pub fn from_mesh(name: impl Into<String>, mesh: &Mesh4D) -> Self {
        Self {
            name: name.into(),
            vertices: mesh.vertices().to_vec(),
            cells: mesh.cells().to_vec(),
            cull: mesh.is_culled(),
        }
    }

    /// Capture a built-in shape
    pub fn from_shape(kind: ShapeKind, centering: Centering, cull: bool) -> Self {
        let model = kind.model(centering);
        Self {
            name: kind.name().to_string(),
            vertices: model.vertices().to_vec(),
            cells: model.cells().to_vec(),
            cull,
        }
    }

    /// Build the mesh described by this asset
    pub fn build(&self) -> MeshResult<Mesh4D> {
        Mesh4D::build(self.vertices.clone(), self.cells.clone(), self.cull)
    }

    /// Load an asset from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let contents = fs::read_to_string(path)?;
        let asset = ron::from_str(&contents)?;
        Ok(asset)
    }

    /// Load an asset and build its mesh
    pub fn load_mesh<P: AsRef<Path>>(path: P) -> Result<Mesh4D, AssetError> {
        let path = path.as_ref();
        let asset = Self::load(path)?;
        let mesh = asset.build()?;
        log::info!("Loaded mesh asset '{}' from {}", asset.name, path.display());
        Ok(mesh)
    }

    /// Save this asset to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), AssetError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }
}
