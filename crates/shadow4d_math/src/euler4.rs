//! Rotation planes and 4D "euler" angles
//!
//! In 4D, rotations happen in planes rather than around axes. There are six
//! coordinate planes, and a 4D orientation is described here by one angle per
//! plane, applied in a fixed order.

use serde::{Serialize, Deserialize};

use crate::mat4::{self, Mat4};

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// XY plane (3D rotation around Z)
    XY,
    /// YZ plane (3D rotation around X)
    YZ,
    /// XZ plane (3D rotation around Y)
    XZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// All planes in the order their rotations are composed.
    ///
    /// 4D rotations do not commute, so this order is part of the meaning of
    /// an [`Euler4`].
    pub const COMPOSITION_ORDER: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::YZ,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// Indices of the two axes spanning this plane (0=X, 1=Y, 2=Z, 3=W)
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::YZ => (1, 2),
            RotationPlane::XZ => (0, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }

    /// Direction in which a positive angle turns the plane's first axis.
    ///
    /// `+1.0` turns it towards the second axis, `-1.0` away from it. XY, YZ
    /// and XW follow the left-handed convention of the 3D rotations they
    /// extend; the remaining planes turn towards.
    pub const fn orientation(self) -> f32 {
        match self {
            RotationPlane::XY | RotationPlane::YZ | RotationPlane::XW => -1.0,
            RotationPlane::XZ | RotationPlane::YW | RotationPlane::ZW => 1.0,
        }
    }

    /// Elementary rotation matrix for this plane
    ///
    /// # Arguments
    /// * `radians` - Rotation angle in radians
    pub fn matrix(self, radians: f32) -> Mat4 {
        let (a, b) = self.axes();
        mat4::plane_rotation(radians * self.orientation(), a, b)
    }

    /// Short label, e.g. `"XW"`
    pub const fn label(self) -> &'static str {
        match self {
            RotationPlane::XY => "XY",
            RotationPlane::YZ => "YZ",
            RotationPlane::XZ => "XZ",
            RotationPlane::XW => "XW",
            RotationPlane::YW => "YW",
            RotationPlane::ZW => "ZW",
        }
    }
}

impl std::fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One angle per rotation plane, in degrees.
///
/// Angles are nominally in [-180, 180] but are never clamped or wrapped;
/// accumulating rotations simply keep growing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Euler4 {
    pub xy: f32,
    pub yz: f32,
    pub xz: f32,
    pub xw: f32,
    pub yw: f32,
    pub zw: f32,
}

impl Euler4 {
    /// No rotation in any plane
    pub const ZERO: Self = Self { xy: 0.0, yz: 0.0, xz: 0.0, xw: 0.0, yw: 0.0, zw: 0.0 };

    /// Create from angles listed in composition order (XY, YZ, XZ, XW, YW, ZW)
    pub const fn new(xy: f32, yz: f32, xz: f32, xw: f32, yw: f32, zw: f32) -> Self {
        Self { xy, yz, xz, xw, yw, zw }
    }

    /// A single-plane rotation
    pub fn from_plane(plane: RotationPlane, degrees: f32) -> Self {
        let mut e = Self::ZERO;
        e.set(plane, degrees);
        e
    }

    /// Angle in the given plane
    pub fn get(&self, plane: RotationPlane) -> f32 {
        match plane {
            RotationPlane::XY => self.xy,
            RotationPlane::YZ => self.yz,
            RotationPlane::XZ => self.xz,
            RotationPlane::XW => self.xw,
            RotationPlane::YW => self.yw,
            RotationPlane::ZW => self.zw,
        }
    }

    fn get_mut(&mut self, plane: RotationPlane) -> &mut f32 {
        match plane {
            RotationPlane::XY => &mut self.xy,
            RotationPlane::YZ => &mut self.yz,
            RotationPlane::XZ => &mut self.xz,
            RotationPlane::XW => &mut self.xw,
            RotationPlane::YW => &mut self.yw,
            RotationPlane::ZW => &mut self.zw,
        }
    }

    /// Set the angle in the given plane
    pub fn set(&mut self, plane: RotationPlane, degrees: f32) {
        *self.get_mut(plane) = degrees;
    }

    /// Add a delta to the angle in the given plane
    pub fn add_angle(&mut self, plane: RotationPlane, degrees: f32) {
        *self.get_mut(plane) += degrees;
    }

    /// True when every angle is exactly zero
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Compose the rotation matrix.
    ///
    /// `I · R_XY · R_YZ · R_XZ · R_XW · R_YW · R_ZW`, each factor
    /// right-multiplied onto the accumulator, so when applied to a column
    /// vector the ZW rotation acts first.
    pub fn rotation_matrix(&self) -> Mat4 {
        RotationPlane::COMPOSITION_ORDER
            .iter()
            .fold(mat4::IDENTITY, |acc, &plane| {
                mat4::mul(acc, plane.matrix(self.get(plane).to_radians()))
            })
    }
}

impl std::ops::Add for Euler4 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(
            self.xy + other.xy,
            self.yz + other.yz,
            self.xz + other.xz,
            self.xw + other.xw,
            self.yw + other.yw,
            self.zw + other.zw,
        )
    }
}

impl std::ops::AddAssign for Euler4 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::ops::Sub for Euler4 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.xy - other.xy,
            self.yz - other.yz,
            self.xz - other.xz,
            self.xw - other.xw,
            self.yw - other.yw,
            self.zw - other.zw,
        )
    }
}

impl std::ops::Mul<f32> for Euler4 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self::new(
            self.xy * scalar,
            self.yz * scalar,
            self.xz * scalar,
            self.xw * scalar,
            self.yw * scalar,
            self.zw * scalar,
        )
    }
}
