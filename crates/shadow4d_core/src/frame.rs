//! Projected frames
//!
//! A [`ProjectedFrame`] holds one placed 3D point per mesh vertex. The
//! helpers here turn a frame into the primitives a line or face renderer
//! draws.

use shadow4d_math::Vec3;

use crate::mesh::Mesh4D;

/// Placed 3D points of every mesh vertex after one recompute
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectedFrame {
    /// One point per mesh vertex, same index space as the mesh
    pub points: Vec<Vec3>,
    /// Vertices that landed on the light and were clamped, or whose point
    /// is not finite
    pub singular: Vec<usize>,
    /// Number of recomputes so far, starting at 1 for the initial one
    pub generation: u64,
}

impl ProjectedFrame {
    /// True if any vertex hit the projection singularity
    #[inline]
    pub fn is_singular(&self) -> bool {
        !self.singular.is_empty()
    }

    /// Axis-aligned bounds of the points as `(min, max)`
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (
                Vec3::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
                Vec3::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
            )
        }))
    }
}

/// Endpoints of every mesh edge
///
/// # Panics
/// If `frame` was not projected from `mesh`, so an edge indexes past
/// `frame.points`.
pub fn edge_segments(mesh: &Mesh4D, frame: &ProjectedFrame) -> Vec<[Vec3; 2]> {
    debug_assert_eq!(frame.points.len(), mesh.vertex_count());
    mesh.edges()
        .chunks_exact(2)
        .map(|e| [frame.points[e[0]], frame.points[e[1]]])
        .collect()
}

/// Corners of every mesh triangle
///
/// # Panics
/// If `frame` was not projected from `mesh`.
pub fn triangle_faces(mesh: &Mesh4D, frame: &ProjectedFrame) -> Vec<[Vec3; 3]> {
    debug_assert_eq!(frame.points.len(), mesh.vertex_count());
    mesh.triangles()
        .chunks_exact(3)
        .map(|t| [frame.points[t[0]], frame.points[t[1]], frame.points[t[2]]])
        .collect()
}

/// RGB color for primitive `index` of `count`, walking the hue circle at
/// full saturation and value.
pub fn hue_color(index: usize, count: usize) -> [f32; 3] {
    if count == 0 {
        return hsv_to_rgb(0.0, 1.0, 1.0);
    }
    hsv_to_rgb(index as f32 / count as f32, 1.0, 1.0)
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0) * 6.0;
    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector as u32 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}
