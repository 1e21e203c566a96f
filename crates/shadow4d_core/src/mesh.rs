//! Polytope meshes
//!
//! [`Mesh4D`] derives the triangles, edges and normals of a polytope from its
//! vertices and tetrahedral cells. The result is immutable; share it with
//! `Arc` between the controller and any renderer.

use shadow4d_math::{Model4D, Vec4, VERTS_IN_CELL};

use crate::error::{MeshError, MeshResult};
use crate::normals;

/// Triangles emitted per cell
pub const TRIANGLES_IN_CELL: usize = 4;
/// Edges emitted per cell
pub const EDGES_IN_CELL: usize = 6;
/// Vertex indices per triangle
pub const VERTS_IN_TRIANGLE: usize = 3;
/// Vertex indices per edge
pub const VERTS_IN_EDGE: usize = 2;

/// Cell-local corners of the 4 triangles of a tetrahedron.
///
/// The last two are listed reversed so all four faces wind the same way.
pub const TRIANGLE_PATTERN: [[usize; 3]; TRIANGLES_IN_CELL] = [
    [0, 1, 2],
    [0, 2, 3],
    [2, 1, 3],
    [0, 3, 1],
];

/// Cell-local corners of the 6 edges of a tetrahedron
pub const EDGE_PATTERN: [[usize; 2]; EDGES_IN_CELL] = [
    [0, 1],
    [0, 2],
    [0, 3],
    [1, 2],
    [1, 3],
    [2, 3],
];

/// Triangles and edges belonging to one cell.
///
/// Indices refer to the owning mesh's triangle and edge lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellData {
    /// Every triangle of the cell
    pub tris: Vec<usize>,
    /// Every edge of the cell
    pub edges: Vec<usize>,
    /// Triangles first discovered by this cell
    pub unique_tris: Vec<usize>,
    /// Edges first discovered by this cell
    pub unique_edges: Vec<usize>,
}

/// True if two triangles are permutations of each other
pub fn triangles_equivalent(a: &[usize], b: &[usize]) -> bool {
    (a[0] == b[0] && a[1] == b[1] && a[2] == b[2])     // identity
        || (a[0] == b[0] && a[1] == b[2] && a[2] == b[1])  // twist
        || (a[0] == b[1] && a[1] == b[0] && a[2] == b[2])  // twist
        || (a[0] == b[1] && a[1] == b[2] && a[2] == b[0])  // rotation
        || (a[0] == b[2] && a[1] == b[0] && a[2] == b[1])  // rotation
        || (a[0] == b[2] && a[1] == b[1] && a[2] == b[0])  // twist
}

/// True if two edges join the same vertices, in either order
pub fn edges_equivalent(a: &[usize], b: &[usize]) -> bool {
    (a[0] == b[0] && a[1] == b[1]) || (a[0] == b[1] && a[1] == b[0])
}

/// A 4D polytope mesh built from tetrahedral cells
#[derive(Clone, Debug)]
pub struct Mesh4D {
    vertices: Vec<Vec4>,
    cells: Vec<usize>,
    triangles: Vec<usize>,
    edges: Vec<usize>,
    normals: Vec<Vec4>,
    cell_data: Vec<CellData>,
    culled: bool,
}

impl Mesh4D {
    /// Build a mesh from vertices and a flat cell array.
    ///
    /// With `cull` set, triangles and edges shared between cells are kept
    /// once; each cell's `tris`/`edges` then point at the shared entries.
    ///
    /// # Errors
    /// * [`MeshError::InvalidTopology`] if `cells.len()` is not a multiple of 4
    /// * [`MeshError::VertexOutOfRange`] if a cell indexes a missing vertex
    pub fn build(vertices: Vec<Vec4>, cells: Vec<usize>, cull: bool) -> MeshResult<Self> {
        if cells.len() % VERTS_IN_CELL != 0 {
            return Err(MeshError::InvalidTopology { len: cells.len() });
        }
        if let Some(pos) = cells.iter().position(|&i| i >= vertices.len()) {
            return Err(MeshError::VertexOutOfRange {
                cell: pos / VERTS_IN_CELL,
                index: cells[pos],
                vertex_count: vertices.len(),
            });
        }

        let cell_count = cells.len() / VERTS_IN_CELL;
        let raw_triangles = expand_cells(&cells, &TRIANGLE_PATTERN);
        let raw_edges = expand_cells(&cells, &EDGE_PATTERN);

        let (triangles, tri_groups) = if cull {
            cull_duplicates(&raw_triangles, VERTS_IN_TRIANGLE, TRIANGLES_IN_CELL, triangles_equivalent)
        } else {
            (raw_triangles, sequential_groups(cell_count, TRIANGLES_IN_CELL))
        };
        let (edges, edge_groups) = if cull {
            cull_duplicates(&raw_edges, VERTS_IN_EDGE, EDGES_IN_CELL, edges_equivalent)
        } else {
            (raw_edges, sequential_groups(cell_count, EDGES_IN_CELL))
        };

        let cell_data = tri_groups
            .into_iter()
            .zip(edge_groups)
            .map(|((tris, unique_tris), (edges, unique_edges))| CellData {
                tris,
                edges,
                unique_tris,
                unique_edges,
            })
            .collect();

        let normals = normals::vertex_normals(&vertices, &triangles);

        log::debug!(
            "Built mesh: {} vertices, {} cells, {} triangles, {} edges (culled: {})",
            vertices.len(),
            cell_count,
            triangles.len() / VERTS_IN_TRIANGLE,
            edges.len() / VERTS_IN_EDGE,
            cull
        );

        Ok(Self {
            vertices,
            cells,
            triangles,
            edges,
            normals,
            cell_data,
            culled: cull,
        })
    }

    /// Build a mesh from a shape generator
    pub fn from_model(model: &dyn Model4D, cull: bool) -> MeshResult<Self> {
        Self::build(model.vertices().to_vec(), model.cells().to_vec(), cull)
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    /// Flat cell array, 4 indices per cell
    #[inline]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Flat triangle index list, 3 per triangle
    #[inline]
    pub fn triangles(&self) -> &[usize] {
        &self.triangles
    }

    /// Flat edge index list, 2 per edge
    #[inline]
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    /// Per-vertex unit normals (zero for vertices no triangle touches)
    #[inline]
    pub fn normals(&self) -> &[Vec4] {
        &self.normals
    }

    #[inline]
    pub fn cell_data(&self) -> &[CellData] {
        &self.cell_data
    }

    /// Whether duplicate triangles and edges were removed
    #[inline]
    pub fn is_culled(&self) -> bool {
        self.culled
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len() / VERTS_IN_CELL
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / VERTS_IN_TRIANGLE
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len() / VERTS_IN_EDGE
    }

    /// Number of triangles first discovered by some cell
    pub fn unique_triangle_count(&self) -> usize {
        self.cell_data.iter().map(|c| c.unique_tris.len()).sum()
    }

    /// Number of edges first discovered by some cell
    pub fn unique_edge_count(&self) -> usize {
        self.cell_data.iter().map(|c| c.unique_edges.len()).sum()
    }

    /// Unique triangle indices of all cells, in cell order
    pub fn unique_triangle_indices(&self) -> Vec<usize> {
        self.cell_data.iter().flat_map(|c| c.unique_tris.iter().copied()).collect()
    }

    /// Unique edge indices of all cells, in cell order
    pub fn unique_edge_indices(&self) -> Vec<usize> {
        self.cell_data.iter().flat_map(|c| c.unique_edges.iter().copied()).collect()
    }

    /// Vertex indices of the cell at `index`
    ///
    /// # Panics
    /// If `index >= cell_count()`.
    pub fn cell(&self, index: usize) -> [usize; 4] {
        let c = &self.cells[index * VERTS_IN_CELL..(index + 1) * VERTS_IN_CELL];
        [c[0], c[1], c[2], c[3]]
    }

    /// Vertex indices of the 4 triangles of a cell, flattened
    pub fn cell_triangles(cell: [usize; 4]) -> [usize; 12] {
        let mut out = [0; TRIANGLES_IN_CELL * VERTS_IN_TRIANGLE];
        for (t, corners) in TRIANGLE_PATTERN.iter().enumerate() {
            for (k, &corner) in corners.iter().enumerate() {
                out[t * VERTS_IN_TRIANGLE + k] = cell[corner];
            }
        }
        out
    }

    /// Vertex indices of the triangle at `index`
    ///
    /// # Panics
    /// If `index >= triangle_count()`.
    pub fn triangle(&self, index: usize) -> [usize; 3] {
        let t = &self.triangles[index * VERTS_IN_TRIANGLE..(index + 1) * VERTS_IN_TRIANGLE];
        [t[0], t[1], t[2]]
    }

    /// Vertex indices of the edge at `index`
    ///
    /// # Panics
    /// If `index >= edge_count()`.
    pub fn edge(&self, index: usize) -> [usize; 2] {
        let e = &self.edges[index * VERTS_IN_EDGE..(index + 1) * VERTS_IN_EDGE];
        [e[0], e[1]]
    }

    /// Vertex normals of the three corners of a triangle
    pub fn triangle_normals(&self, index: usize) -> [Vec4; 3] {
        self.triangle(index).map(|v| self.normals[v])
    }
}

/// Apply a per-cell corner pattern to every cell
fn expand_cells<const N: usize>(cells: &[usize], pattern: &[[usize; N]]) -> Vec<usize> {
    let mut out = Vec::with_capacity(cells.len() / VERTS_IN_CELL * pattern.len() * N);
    for cell in cells.chunks_exact(VERTS_IN_CELL) {
        for corners in pattern {
            out.extend(corners.iter().map(|&c| cell[c]));
        }
    }
    out
}

/// `(all, unique)` element groups per cell when nothing is culled
fn sequential_groups(cell_count: usize, per_cell: usize) -> Vec<(Vec<usize>, Vec<usize>)> {
    (0..cell_count)
        .map(|cell| {
            let indices: Vec<usize> = (cell * per_cell..(cell + 1) * per_cell).collect();
            (indices.clone(), indices)
        })
        .collect()
}

/// Remove duplicate elements, comparing each against the uniques accepted
/// so far in discovery order.
///
/// Returns the flat unique list and, per cell, the indices of all its
/// elements and of the elements it discovered.
fn cull_duplicates(
    raw: &[usize],
    stride: usize,
    per_cell: usize,
    same: fn(&[usize], &[usize]) -> bool,
) -> (Vec<usize>, Vec<(Vec<usize>, Vec<usize>)>) {
    let cell_count = raw.len() / (stride * per_cell);
    let mut unique: Vec<usize> = Vec::new();
    let mut groups = vec![(Vec::new(), Vec::new()); cell_count];

    for (i, element) in raw.chunks_exact(stride).enumerate() {
        let (all, discovered) = &mut groups[i / per_cell];
        match unique.chunks_exact(stride).position(|u| same(element, u)) {
            Some(found) => all.push(found),
            None => {
                let index = unique.len() / stride;
                unique.extend_from_slice(element);
                all.push(index);
                discovered.push(index);
            }
        }
    }

    (unique, groups)
}
