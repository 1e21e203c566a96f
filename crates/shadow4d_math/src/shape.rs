//! Shape traits and primitives for 4D polytopes
//!
//! Shapes are pure geometric data: a vertex array plus a flat cell array in
//! which every 4 consecutive entries index one tetrahedron.

use serde::{Serialize, Deserialize};

use crate::Vec4;

/// Number of vertex indices per tetrahedral cell
pub const VERTS_IN_CELL: usize = 4;

/// Where a generated shape sits relative to the 4D origin
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Centering {
    /// First vertex at the origin, shape extends into positive coordinates
    Origin,
    /// Shape centroid at the origin
    #[default]
    Centered,
}

/// A tetrahedron (3-simplex) defined by vertex indices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tetrahedron {
    /// Indices into the parent shape's vertex array
    pub indices: [usize; 4],
}

impl Tetrahedron {
    /// Create a new tetrahedron with the given vertex indices
    #[inline]
    pub fn new(indices: [usize; 4]) -> Self {
        Self { indices }
    }

    /// Get the indices as a sorted array (canonical form)
    pub fn canonical(&self) -> [usize; 4] {
        let mut sorted = self.indices;
        sorted.sort();
        sorted
    }
}

/// A polytope generator: vertices plus tetrahedral cells.
///
/// `cells().len()` is always a multiple of [`VERTS_IN_CELL`].
pub trait Model4D: Send + Sync {
    /// Get the vertices of this shape
    fn vertices(&self) -> &[Vec4];

    /// Get the flat cell array (4 vertex indices per cell)
    fn cells(&self) -> &[usize];

    /// Get the number of vertices
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Get the number of cells
    #[inline]
    fn cell_count(&self) -> usize {
        self.cells().len() / VERTS_IN_CELL
    }

    /// Cells as tetrahedra
    fn tetrahedra(&self) -> Vec<Tetrahedron> {
        self.cells()
            .chunks_exact(VERTS_IN_CELL)
            .map(|c| Tetrahedron::new([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    /// Mean of all vertices
    fn centroid(&self) -> Vec4 {
        let vertices = self.vertices();
        if vertices.is_empty() {
            return Vec4::ZERO;
        }
        let sum = vertices.iter().fold(Vec4::ZERO, |acc, &v| acc + v);
        sum * (1.0 / vertices.len() as f32)
    }
}
