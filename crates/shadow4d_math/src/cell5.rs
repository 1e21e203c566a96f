//! 5-cell (4-simplex) geometry
//!
//! The 4D analogue of a tetrahedron: 5 vertices, 10 edges, 10 triangles and
//! 5 tetrahedral cells. Every pair of cells shares exactly one triangle.

use crate::{Vec4, shape::{Centering, Model4D}};

/// Each cell omits exactly one of the five vertices
const CELLS: [usize; 20] = [
    0, 1, 2, 3,
    0, 2, 3, 4,
    0, 1, 3, 4,
    0, 1, 2, 4,
    1, 2, 3, 4,
];

/// A 5-cell - pure geometry without colors
#[derive(Clone, Debug)]
pub struct Cell5 {
    centering: Centering,
    vertices: [Vec4; 5],
    cells: [usize; 20],
}

impl Cell5 {
    /// Create a 5-cell in the given centering mode
    ///
    /// * [`Centering::Origin`] - the corner simplex `0, e_x, e_y, e_z, e_w`
    /// * [`Centering::Centered`] - the regular 5-cell of edge length 2 with
    ///   its centroid at the origin
    pub fn new(centering: Centering) -> Self {
        let vertices = match centering {
            Centering::Origin => [Vec4::ZERO, Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
            Centering::Centered => Self::centered_vertices(),
        };

        Self {
            centering,
            vertices,
            cells: CELLS,
        }
    }

    /// Centered 5-cell, the default
    pub fn centered() -> Self {
        Self::new(Centering::Centered)
    }

    #[inline]
    pub fn centering(&self) -> Centering {
        self.centering
    }

    fn centered_vertices() -> [Vec4; 5] {
        let inv_sqrt10 = 1.0 / 10f32.sqrt();
        let inv_sqrt6 = 1.0 / 6f32.sqrt();
        let inv_sqrt3 = 1.0 / 3f32.sqrt();

        [
            Vec4::new(inv_sqrt10, inv_sqrt6, inv_sqrt3, 1.0),
            Vec4::new(inv_sqrt10, inv_sqrt6, inv_sqrt3, -1.0),
            Vec4::new(inv_sqrt10, inv_sqrt6, -2.0 * inv_sqrt3, 0.0),
            Vec4::new(inv_sqrt10, -(1.5f32).sqrt(), 0.0, 0.0),
            Vec4::new(-2.0 * (0.4f32).sqrt(), 0.0, 0.0, 0.0),
        ]
    }
}

impl Default for Cell5 {
    fn default() -> Self {
        Self::centered()
    }
}

impl Model4D for Cell5 {
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

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_counts() {
        let c = Cell5::centered();
        assert_eq!(c.vertex_count(), 5);
        assert_eq!(c.cell_count(), 5);
    }

    #[test]
    fn test_centered_is_centered() {
        let c = Cell5::centered();
        assert!(c.centroid().length() < EPSILON, "centroid {:?}", c.centroid());
    }

    #[test]
    fn test_centered_is_regular() {
        let c = Cell5::centered();
        let v = c.vertices();
        for i in 0..5 {
            for j in (i + 1)..5 {
                let d = (v[i] - v[j]).length();
                assert!((d - 2.0).abs() < EPSILON, "edge {}-{} has length {}", i, j, d);
            }
        }
    }

    #[test]
    fn test_origin_mode_starts_at_origin() {
        let c = Cell5::new(Centering::Origin);
        assert_eq!(c.vertices()[0], Vec4::ZERO);
        assert_eq!(c.vertices()[4], Vec4::W);
        assert_eq!(c.centering(), Centering::Origin);
    }

    #[test]
    fn test_each_cell_omits_one_vertex() {
        let c = Cell5::default();
        let mut omitted: Vec<usize> = c
            .tetrahedra()
            .iter()
            .map(|t| (0..5).find(|v| !t.indices.contains(v)).unwrap())
            .collect();
        omitted.sort();
        assert_eq!(omitted, vec![0, 1, 2, 3, 4]);
    }
}
