//! Face and vertex normals for 4D triangle meshes

use shadow4d_math::Vec4;

use crate::mesh::VERTS_IN_TRIANGLE;

/// Unit normal of the triangle `(a, b, c)`.
///
/// Two edge vectors leave a 2D orthogonal complement in 4D, so the normal is
/// the ternary cross product of `ab`, `ac` and the coordinate axis giving
/// the largest result, i.e. the axis least aligned with the triangle's
/// plane. Axes are tried from W down to X and ties keep the earlier one, so
/// a triangle lying in the `w = 0` hyperplane gets exactly its 3D
/// right-hand-rule normal. Degenerate triangles yield zero.
pub fn face_normal(a: Vec4, b: Vec4, c: Vec4) -> Vec4 {
    let ab = b - a;
    let ac = c - a;

    let mut best = Vec4::ZERO;
    let mut best_len = 0.0;
    for axis in Vec4::AXES.iter().rev() {
        let n = Vec4::cross3(ab, ac, *axis);
        let len = n.length_squared();
        if len > best_len {
            best = n;
            best_len = len;
        }
    }
    best.normalized()
}

/// Per-vertex normals: the normalized sum of the face normals of every
/// triangle touching the vertex.
///
/// `triangles` is a flat index list, 3 per triangle. Vertices no triangle
/// touches keep a zero normal.
pub fn vertex_normals(vertices: &[Vec4], triangles: &[usize]) -> Vec<Vec4> {
    let mut normals = vec![Vec4::ZERO; vertices.len()];

    for tri in triangles.chunks_exact(VERTS_IN_TRIANGLE) {
        let n = face_normal(vertices[tri[0]], vertices[tri[1]], vertices[tri[2]]);
        for &index in tri {
            normals[index] += n;
        }
    }

    for n in &mut normals {
        *n = n.normalized();
    }
    normals
}
