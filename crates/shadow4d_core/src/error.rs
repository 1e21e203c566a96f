//! Error types
//!
//! Mesh construction fails fast with [`MeshError`]; no partially built mesh
//! is ever returned. [`AssetError`] covers saving and loading mesh assets.

use std::io;

use thiserror::Error;

/// Result type alias for mesh construction
pub type MeshResult<T> = std::result::Result<T, MeshError>;

/// Errors raised while building a [`Mesh4D`](crate::Mesh4D)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Cell array length is not a multiple of 4
    #[error("invalid topology: cell array length {len} is not a multiple of 4")]
    InvalidTopology { len: usize },

    /// A cell references a vertex that does not exist
    #[error("cell {cell} references vertex {index}, but the mesh has {vertex_count} vertices")]
    VertexOutOfRange {
        cell: usize,
        index: usize,
        vertex_count: usize,
    },
}

/// Errors raised while saving or loading a [`MeshAsset`](crate::MeshAsset)
#[derive(Error, Debug)]
pub enum AssetError {
    /// File could not be read or written
    #[error("asset IO error: {0}")]
    Io(#[from] io::Error),

    /// File contents are not a valid mesh asset
    #[error("asset parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Asset could not be serialized
    #[error("asset serialize error: {0}")]
    Serialize(#[from] ron::Error),

    /// Asset parsed but describes an invalid mesh
    #[error("asset describes an invalid mesh: {0}")]
    Mesh(#[from] MeshError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_topology_display() {
        let msg = MeshError::InvalidTopology { len: 7 }.to_string();
        assert!(msg.contains("invalid topology"));
        assert!(msg.contains('7'));
    }

    #[test]
    fn test_vertex_out_of_range_display() {
        let err = MeshError::VertexOutOfRange { cell: 2, index: 9, vertex_count: 5 };
        let msg = err.to_string();
        assert!(msg.contains("cell 2"));
        assert!(msg.contains("vertex 9"));
        assert!(msg.contains("5 vertices"));
    }

    #[test]
    fn test_asset_error_sources() {
        use std::error::Error;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let asset_err = AssetError::from(io_err);
        assert!(asset_err.source().is_some());
        assert!(asset_err.to_string().contains("missing"));

        let mesh_err = AssetError::from(MeshError::InvalidTopology { len: 3 });
        assert!(matches!(mesh_err, AssetError::Mesh(MeshError::InvalidTopology { len: 3 })));
    }
}
