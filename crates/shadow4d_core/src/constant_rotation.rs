//! Constant-rate rotation
//!
//! Spins a shape by a fixed number of degrees per second in each plane
//! until stopped.

use serde::{Serialize, Deserialize};
use shadow4d_math::Euler4;

/// Per-plane rotation rates in degrees per second
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstantRotation {
    pub rates: Euler4,
}

impl ConstantRotation {
    pub fn new(rates: Euler4) -> Self {
        Self { rates }
    }

    /// True while any rate is non-zero
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.rates.is_zero()
    }

    /// Add `rates * dt` to `rotation`
    pub fn advance(&self, rotation: &mut Euler4, dt: f32) {
        if self.is_active() {
            *rotation += self.rates * dt;
        }
    }

    /// Zero every rate. Returns whether the rotation was running.
    pub fn stop(&mut self) -> bool {
        let was_active = self.is_active();
        self.rates = Euler4::ZERO;
        was_active
    }
}
