//! Tesseract (4D hypercube) geometry
//!
//! A tesseract has 16 vertices, 32 edges, 24 square faces and 8 cubic cells.
//! Each cube is split into 5 tetrahedra without adding vertices, giving 40
//! tetrahedral cells.

use crate::{Vec4, shape::{Centering, Model4D, VERTS_IN_CELL}};

const CUBE_COUNT: usize = 8;
const CELLS_IN_CUBE: usize = 5;

/// The 8 cubes, each listed as two squares: 4 corners of one face followed by
/// the matching 4 corners of the opposite face.
///
/// Vertex `i + 8` is vertex `i` shifted along W, so the six face cubes are the
/// base cube's faces extruded into W.
const CUBES: [[usize; 8]; CUBE_COUNT] = [
    [1, 2, 3, 0, 5, 6, 7, 4],         // base (w = min)
    [1, 2, 3, 0, 9, 10, 11, 8],       // front
    [1, 5, 4, 0, 9, 13, 12, 8],       // bottom
    [3, 7, 4, 0, 11, 15, 12, 8],      // left
    [6, 5, 4, 7, 14, 13, 12, 15],     // back
    [6, 7, 3, 2, 14, 15, 11, 10],     // top
    [6, 5, 1, 2, 14, 13, 9, 10],      // right
    [8, 9, 10, 11, 12, 13, 14, 15],   // extra (w = max)
];

/// Corner pattern splitting a cube into 5 tetrahedra.
///
/// Four side cells have their apex on a cube corner; the centre cell joins
/// the remaining face diagonals. Every square face is cut by one diagonal.
const CUBE_SPLIT: [[usize; 4]; CELLS_IN_CUBE] = [
    [0, 1, 3, 4],
    [1, 2, 3, 6],
    [1, 4, 5, 6],
    [3, 4, 6, 7],
    [1, 3, 4, 6],
];

/// A tesseract - pure geometry without colors
#[derive(Clone, Debug)]
pub struct Tesseract {
    centering: Centering,
    /// The 16 vertices of the tesseract
    vertices: [Vec4; 16],
    /// 40 tetrahedra, 4 indices each
    cells: Vec<usize>,
}

impl Tesseract {
    /// Create a unit tesseract in the given centering mode
    ///
    /// * [`Centering::Origin`] - spans `[0, 1]` on every axis
    /// * [`Centering::Centered`] - spans `[-0.5, 0.5]` on every axis
    pub fn new(centering: Centering) -> Self {
        let offset = match centering {
            Centering::Origin => 0.0,
            Centering::Centered => -0.5,
        };

        Self {
            centering,
            vertices: Self::compute_vertices(offset),
            cells: Self::compute_cells(),
        }
    }

    /// Centered tesseract, the default
    pub fn centered() -> Self {
        Self::new(Centering::Centered)
    }

    #[inline]
    pub fn centering(&self) -> Centering {
        self.centering
    }

    /// Vertex indices of the 8 cubes
    pub fn cubes() -> &'static [[usize; 8]; CUBE_COUNT] {
        &CUBES
    }

    /// Four XY unit squares (corners (0,0), (1,0), (1,1), (0,1)), the second
    /// shifted along Z, the third along W and the fourth along both.
    fn compute_vertices(offset: f32) -> [Vec4; 16] {
        const SQUARE: [(f32, f32); 4] = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        const SHIFTS: [(f32, f32); 4] = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)];

        let mut vertices = [Vec4::ZERO; 16];
        for (s, &(z, w)) in SHIFTS.iter().enumerate() {
            for (c, &(x, y)) in SQUARE.iter().enumerate() {
                vertices[s * 4 + c] = Vec4::new(x + offset, y + offset, z + offset, w + offset);
            }
        }
        vertices
    }

    fn compute_cells() -> Vec<usize> {
        let mut cells = Vec::with_capacity(CUBE_COUNT * CELLS_IN_CUBE * VERTS_IN_CELL);
        for cube in &CUBES {
            for split in &CUBE_SPLIT {
                cells.extend(split.iter().map(|&corner| cube[corner]));
            }
        }
        cells
    }
}

impl Default for Tesseract {
    fn default() -> Self {
        Self::centered()
    }
}

impl Model4D for Tesseract {
    fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    fn cells(&self) -> &[usize] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const EPSILON: f32 = 0.0001;

    /// Number of coordinates in which two unit-tesseract vertices differ
    fn hamming(a: Vec4, b: Vec4) -> usize {
        (a - b).to_array().iter().filter(|d| d.abs() > EPSILON).count()
    }

    #[test]
    fn test_tesseract_counts() {
        let t = Tesseract::centered();
        assert_eq!(t.vertex_count(), 16);
        assert_eq!(t.cell_count(), 40);
        assert_eq!(t.cells().len(), 160);
    }

    #[test]
    fn test_vertices_are_distinct_corners() {
        let t = Tesseract::new(Centering::Origin);
        let corners: HashSet<[u32; 4]> = t
            .vertices()
            .iter()
            .map(|v| v.to_array().map(|c| c as u32))
            .collect();
        assert_eq!(corners.len(), 16);
        assert_eq!(t.vertices()[0], Vec4::ZERO);
        assert_eq!(t.vertices()[14], Vec4::ONE);
    }

    #[test]
    fn test_centered_is_centered() {
        let t = Tesseract::centered();
        assert!(t.centroid().length() < EPSILON);
        assert_eq!(t.vertices()[0], Vec4::new(-0.5, -0.5, -0.5, -0.5));
    }

    #[test]
    fn test_every_cube_is_a_cube() {
        // 8 corners lying in one hyperplane, spanning exactly 3 axes
        let t = Tesseract::new(Centering::Origin);
        for (i, cube) in Tesseract::cubes().iter().enumerate() {
            let corners: HashSet<usize> = cube.iter().copied().collect();
            assert_eq!(corners.len(), 8, "cube {} repeats a corner", i);

            let fixed_axes = (0..4)
                .filter(|&axis| {
                    let first = t.vertices()[cube[0]].to_array()[axis];
                    cube.iter().all(|&v| t.vertices()[v].to_array()[axis] == first)
                })
                .count();
            assert_eq!(fixed_axes, 1, "cube {} is not axis-aligned", i);
        }
    }

    #[test]
    fn test_cells_reference_valid_vertices() {
        let t = Tesseract::centered();
        assert!(t.cells().iter().all(|&i| i < 16));
        for tet in t.tetrahedra() {
            let unique: HashSet<usize> = tet.indices.iter().copied().collect();
            assert_eq!(unique.len(), 4, "degenerate cell {:?}", tet);
        }
    }

    #[test]
    fn test_cells_are_unique() {
        let t = Tesseract::centered();
        let canonical: HashSet<[usize; 4]> = t.tetrahedra().iter().map(|c| c.canonical()).collect();
        assert_eq!(canonical.len(), 40);
    }

    #[test]
    fn test_cell_edges_are_cube_edges_or_face_diagonals() {
        let t = Tesseract::new(Centering::Origin);
        let v = t.vertices();
        for tet in t.tetrahedra() {
            for i in 0..4 {
                for j in (i + 1)..4 {
                    let h = hamming(v[tet.indices[i]], v[tet.indices[j]]);
                    assert!(h == 1 || h == 2, "cell {:?} has a body diagonal", tet);
                }
            }
        }
    }

    #[test]
    fn test_cells_cover_tesseract_edges() {
        // All 32 hypercube edges appear in at least one tetrahedron
        let t = Tesseract::new(Centering::Origin);
        let v = t.vertices();

        let mut tet_edges: HashSet<(usize, usize)> = HashSet::new();
        for tet in t.tetrahedra() {
            let c = tet.canonical();
            for i in 0..4 {
                for j in (i + 1)..4 {
                    tet_edges.insert((c[i], c[j]));
                }
            }
        }

        let mut hypercube_edges = 0;
        for i in 0..16 {
            for j in (i + 1)..16 {
                if hamming(v[i], v[j]) == 1 {
                    hypercube_edges += 1;
                    assert!(tet_edges.contains(&(i, j)),
                        "Tesseract edge ({}, {}) not in any tetrahedron", i, j);
                }
            }
        }
        assert_eq!(hypercube_edges, 32);
    }

    #[test]
    fn test_split_preserves_cube_volume() {
        // 5 tetrahedra of a unit cube: 4 * 1/6 + 1/3 = 1
        let t = Tesseract::new(Centering::Origin);
        let v = t.vertices();
        let cube = Tesseract::cubes()[0];
        let volume: f32 = (0..CELLS_IN_CUBE)
            .map(|k| {
                let idx = &t.cells()[k * 4..k * 4 + 4];
                let a = v[idx[1]] - v[idx[0]];
                let b = v[idx[2]] - v[idx[0]];
                let c = v[idx[3]] - v[idx[0]];
                // base cube has w fixed, so the 3D triple product is the volume
                a.xyz().dot(b.xyz().cross(c.xyz())).abs() / 6.0
            })
            .sum();
        assert_eq!(cube, [1, 2, 3, 0, 5, 6, 7, 4]);
        assert!((volume - 1.0).abs() < EPSILON, "volume {}", volume);
    }
}
