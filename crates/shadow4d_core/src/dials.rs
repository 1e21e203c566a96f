//! Rotation dials
//!
//! Knob-style inputs report absolute angles. [`PlaneDials`] remembers the
//! last reading per plane and turns each new reading into a rotation delta
//! for a [`ShapeController`].
//!
//! YZ, XW, XY and ZW dials are mounted inverted: turning them clockwise
//! rotates the shape by a negative angle.

use shadow4d_math::{Euler4, RotationPlane, Vec3};

use crate::controller::ShapeController;

/// Last absolute reading of each rotation dial, in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaneDials {
    values: Euler4,
}

impl PlaneDials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign applied to a dial delta before it reaches the shape
    pub const fn sign(plane: RotationPlane) -> f32 {
        match plane {
            RotationPlane::YZ | RotationPlane::XW | RotationPlane::XY | RotationPlane::ZW => -1.0,
            RotationPlane::XZ | RotationPlane::YW => 1.0,
        }
    }

    /// Current reading of one dial
    #[inline]
    pub fn value(&self, plane: RotationPlane) -> f32 {
        self.values.get(plane)
    }

    /// All readings
    #[inline]
    pub fn values(&self) -> Euler4 {
        self.values
    }

    /// Record a new reading and return the shape rotation delta it implies
    pub fn turn(&mut self, plane: RotationPlane, value: f32) -> f32 {
        let delta = value - self.values.get(plane);
        self.values.set(plane, value);
        delta * Self::sign(plane)
    }

    /// Record a new reading and rotate the shape by it.
    ///
    /// Manual rotation stops any constant rotation.
    pub fn apply(&mut self, controller: &mut ShapeController, plane: RotationPlane, value: f32) {
        let delta = self.turn(plane, value);
        controller.stop_constant_rotation();
        controller.rotate_plane(plane, delta);
    }

    /// Move the dials to follow a rotation applied elsewhere.
    ///
    /// Takes the same `(YZ, XZ, XY)` and `(XW, YW, ZW)` deltas as
    /// [`ShapeController::rotate_shape`]. A later [`turn`](Self::turn) to the
    /// new reading yields no delta, so the shape is not rotated twice.
    pub fn sync_from_delta(&mut self, euler: Vec3, w_euler: Vec3) {
        let delta = Euler4::new(euler.z, euler.x, euler.y, w_euler.x, w_euler.y, w_euler.z);
        for plane in RotationPlane::COMPOSITION_ORDER {
            self.values.add_angle(plane, delta.get(plane) * Self::sign(plane));
        }
    }

    /// Zero every dial without rotating the shape
    pub fn reset(&mut self) {
        self.values = Euler4::ZERO;
    }
}
