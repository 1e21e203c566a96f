//! 4x4 matrix utilities for 4D rotations
//!
//! Matrices are stored column-major: `m[col][row]`.

use crate::Vec4;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a rotation matrix in a specific 2D plane within 4D space.
///
/// The identity with a 2D rotation block written into rows/columns `p1` and
/// `p2`; a positive angle turns axis `p1` towards axis `p2`.
///
/// # Arguments
/// * `angle` - Rotation angle in radians
/// * `p1`, `p2` - Indices of the axes forming the rotation plane (0=X, 1=Y, 2=Z, 3=W)
///
/// # Example
/// ```
/// use shadow4d_math::mat4::plane_rotation;
/// // Quarter turn in the ZW plane
/// let m = plane_rotation(std::f32::consts::FRAC_PI_2, 2, 3);
/// ```
pub fn plane_rotation(angle: f32, p1: usize, p2: usize) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;

    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;

    m
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a Vec4 by a 4x4 matrix (column-major)
///
/// result = M * v
pub fn transform(m: Mat4, v: Vec4) -> Vec4 {
    Vec4::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z + m[3][0] * v.w,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z + m[3][1] * v.w,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z + m[3][2] * v.w,
        m[0][3] * v.x + m[1][3] * v.y + m[2][3] * v.z + m[3][3] * v.w,
    )
}

/// Transpose a matrix
///
/// For a pure rotation this is its inverse.
pub fn transpose(m: Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
    }

    fn mat_approx_eq(a: Mat4, b: Mat4) -> bool {
        (0..4).all(|i| (0..4).all(|j| approx_eq(a[i][j], b[i][j])))
    }

    #[test]
    fn test_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert!(vec_approx_eq(transform(IDENTITY, v), v));
    }

    #[test]
    fn test_plane_rotation_xw() {
        let m = plane_rotation(FRAC_PI_2, 0, 3);

        // X should go to W
        let result = transform(m, Vec4::X);
        assert!(vec_approx_eq(result, Vec4::W), "X should become W, got {:?}", result);

        // W should go to -X
        let result = transform(m, Vec4::W);
        assert!(vec_approx_eq(result, -Vec4::X), "W should become -X, got {:?}", result);

        // Y and Z should be unchanged
        assert!(vec_approx_eq(transform(m, Vec4::Y), Vec4::Y));
        assert!(vec_approx_eq(transform(m, Vec4::Z), Vec4::Z));
    }

    #[test]
    fn test_mul_identity() {
        let a = plane_rotation(0.5, 0, 1);
        assert!(mat_approx_eq(a, mul(IDENTITY, a)));
        assert!(mat_approx_eq(a, mul(a, IDENTITY)));
    }

    #[test]
    fn test_mul_composition() {
        // Two 45° rotations should equal one 90° rotation
        let r45 = plane_rotation(FRAC_PI_4, 1, 3);
        let r90 = plane_rotation(FRAC_PI_2, 1, 3);

        let composed = mul(r45, r45);
        assert!(mat_approx_eq(composed, r90));
    }

    #[test]
    fn test_mul_applies_right_operand_first() {
        let a = plane_rotation(FRAC_PI_2, 0, 1); // X -> Y
        let b = plane_rotation(FRAC_PI_2, 1, 2); // Y -> Z
        // a * b on X: b leaves X alone, then a sends it to Y
        let result = transform(mul(a, b), Vec4::X);
        assert!(vec_approx_eq(result, Vec4::Y), "got {:?}", result);
    }

    #[test]
    fn test_transpose_inverts_rotation() {
        let m = mul(plane_rotation(0.3, 0, 3), plane_rotation(-1.1, 1, 2));
        assert!(mat_approx_eq(mul(m, transpose(m)), IDENTITY));
    }
}
