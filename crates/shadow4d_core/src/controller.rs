//! Shape controller
//!
//! [`ShapeController`] owns the transform of one shape and keeps a
//! [`ProjectedFrame`] of its mesh up to date. Mutators only record the new
//! state; the projection is recomputed lazily by
//! [`recompute_if_dirty`](ShapeController::recompute_if_dirty) or
//! [`tick`](ShapeController::tick), and only when something changed since the
//! last recompute.

use std::sync::Arc;

use bitflags::bitflags;
use shadow4d_math::{Euler4, RotationPlane, Vec3, Vec4};

use crate::constant_rotation::ConstantRotation;
use crate::frame::ProjectedFrame;
use crate::mesh::Mesh4D;
use crate::transform::Transform4D;

bitflags! {
    /// Parts of the transform that changed since the last recompute
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE = 0;
        /// 4D position has changed
        const POSITION = 1 << 0;
        /// Rotation angles have changed
        const ROTATION = 1 << 1;
        /// Scale has changed
        const SCALE = 1 << 2;
        /// 3D placement has changed
        const PLACEMENT = 1 << 3;
        /// Light distance has changed
        const PROJECTION = 1 << 4;
        /// All flags set - full recompute
        const ALL = Self::POSITION.bits()
            | Self::ROTATION.bits()
            | Self::SCALE.bits()
            | Self::PLACEMENT.bits()
            | Self::PROJECTION.bits();
    }
}

/// Drives the transform and projection of one shared mesh
#[derive(Clone, Debug)]
pub struct ShapeController {
    mesh: Arc<Mesh4D>,
    transform: Transform4D,
    constant_rotation: Option<ConstantRotation>,
    /// Transform used by the last recompute
    applied: Option<Transform4D>,
    frame: ProjectedFrame,
}

impl ShapeController {
    /// Create a controller and compute the initial frame
    pub fn new(mesh: Arc<Mesh4D>, transform: Transform4D) -> Self {
        let mut controller = Self {
            mesh,
            transform,
            constant_rotation: None,
            applied: None,
            frame: ProjectedFrame::default(),
        };
        controller.recompute();
        controller
    }

    /// Create a controller with the identity transform
    pub fn with_mesh(mesh: Arc<Mesh4D>) -> Self {
        Self::new(mesh, Transform4D::identity())
    }

    // --- Read access ---

    #[inline]
    pub fn mesh(&self) -> &Arc<Mesh4D> {
        &self.mesh
    }

    #[inline]
    pub fn transform(&self) -> &Transform4D {
        &self.transform
    }

    /// Current rotation angles in degrees
    #[inline]
    pub fn rotation(&self) -> Euler4 {
        self.transform.rotation
    }

    /// Running constant rotation, if any
    #[inline]
    pub fn constant_rotation(&self) -> Option<&ConstantRotation> {
        self.constant_rotation.as_ref()
    }

    /// Frame produced by the last recompute
    #[inline]
    pub fn frame(&self) -> &ProjectedFrame {
        &self.frame
    }

    // --- Mutators ---

    pub fn set_position(&mut self, position: Vec4) {
        self.transform.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Euler4) {
        self.transform.rotation = rotation;
    }

    /// Set the absolute angle of one plane
    pub fn set_plane_angle(&mut self, plane: RotationPlane, degrees: f32) {
        self.transform.rotation.set(plane, degrees);
    }

    /// Turn one plane by `delta` degrees
    pub fn rotate_plane(&mut self, plane: RotationPlane, delta: f32) {
        self.transform.rotation.add_angle(plane, delta);
    }

    /// Apply gizmo deltas and stop any constant rotation.
    ///
    /// `euler` carries the 3D planes as `(YZ, XZ, XY)`, the rotations about
    /// the X, Y and Z axes. `w_euler` carries `(XW, YW, ZW)`.
    pub fn rotate_shape(&mut self, euler: Vec3, w_euler: Vec3) {
        self.stop_constant_rotation();
        self.transform.rotation += Euler4::new(euler.z, euler.x, euler.y, w_euler.x, w_euler.y, w_euler.z);
    }

    pub fn set_scale(&mut self, scale: Vec4) {
        self.transform.scale = scale;
    }

    /// Set the 3D offset added after projection
    pub fn set_placement(&mut self, placement: Vec3) {
        self.transform.placement = placement;
    }

    /// Move the projected shape along with a 3D pivot.
    ///
    /// Call once per tick with the pivot's current position; nothing is
    /// recomputed unless the pivot actually moved.
    pub fn follow_pivot(&mut self, pivot: Vec3) {
        self.transform.placement = pivot;
    }

    pub fn set_light_distance(&mut self, distance: f32) {
        self.transform.light_distance = distance;
    }

    /// Start spinning at `rates` degrees per second, replacing any running
    /// rotation
    pub fn start_constant_rotation(&mut self, rates: Euler4) {
        self.constant_rotation = Some(ConstantRotation::new(rates));
    }

    /// Set the spin rate of one plane, keeping the other rates
    pub fn set_constant_rate(&mut self, plane: RotationPlane, degrees_per_second: f32) {
        self.constant_rotation
            .get_or_insert_with(ConstantRotation::default)
            .rates
            .set(plane, degrees_per_second);
    }

    /// Stop the constant rotation. Returns whether one was running.
    pub fn stop_constant_rotation(&mut self) -> bool {
        match self.constant_rotation.take() {
            Some(mut spin) => {
                let was_active = spin.stop();
                if was_active {
                    log::debug!("Constant rotation stopped");
                }
                was_active
            }
            None => false,
        }
    }

    /// Zero the rotation and stop any constant rotation
    pub fn reset(&mut self) {
        self.stop_constant_rotation();
        self.transform.rotation = Euler4::ZERO;
    }

    // --- Recompute ---

    /// Which parts of the transform differ from the last recompute
    pub fn dirty(&self) -> DirtyFlags {
        let Some(applied) = &self.applied else {
            return DirtyFlags::ALL;
        };

        let current = &self.transform;
        let mut flags = DirtyFlags::NONE;
        if current.position != applied.position {
            flags |= DirtyFlags::POSITION;
        }
        if current.rotation != applied.rotation {
            flags |= DirtyFlags::ROTATION;
        }
        if current.scale != applied.scale {
            flags |= DirtyFlags::SCALE;
        }
        if current.placement != applied.placement {
            flags |= DirtyFlags::PLACEMENT;
        }
        if current.light_distance != applied.light_distance {
            flags |= DirtyFlags::PROJECTION;
        }
        flags
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        !self.dirty().is_empty()
    }

    /// Recompute the frame if anything changed.
    ///
    /// Returns the new frame, or `None` when nothing changed.
    pub fn recompute_if_dirty(&mut self) -> Option<&ProjectedFrame> {
        if !self.is_dirty() {
            return None;
        }
        self.recompute();
        Some(&self.frame)
    }

    /// Advance constant rotation by `dt` seconds, then recompute if needed
    pub fn tick(&mut self, dt: f32) -> Option<&ProjectedFrame> {
        if let Some(spin) = &self.constant_rotation {
            spin.advance(&mut self.transform.rotation, dt);
        }
        self.recompute_if_dirty()
    }

    fn recompute(&mut self) {
        let rotation = self.transform.rotation_matrix();
        let vertices = self.mesh.vertices();

        let mut points = Vec::with_capacity(vertices.len());
        let mut singular = Vec::new();
        for (i, v) in vertices.iter().enumerate() {
            let projected = self.transform.project_checked(self.transform.transform_with(&rotation, *v));
            let point = projected.point + self.transform.placement;
            // non-finite transform fields poison the point without tripping the clamp
            if projected.singular || !point.is_finite() {
                singular.push(i);
            }
            points.push(point);
        }

        if !singular.is_empty() {
            log::warn!(
                "{} vertices reached the light at w = {} or are not finite: {:?}",
                singular.len(),
                self.transform.light_distance,
                singular
            );
        }

        self.frame = ProjectedFrame {
            points,
            singular,
            generation: self.frame.generation + 1,
        };
        self.applied = Some(self.transform);

        log::debug!(
            "Recomputed frame {} ({} vertices)",
            self.frame.generation,
            self.frame.points.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::DEFAULT_LIGHT_DISTANCE;

    const EPSILON: f32 = 0.0001;

    fn vec3_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn unit_mesh() -> Arc<Mesh4D> {
        Arc::new(
            Mesh4D::build(
                vec![Vec4::ZERO, Vec4::X, Vec4::Y, Vec4::W * 0.5],
                vec![0, 1, 2, 3],
                true,
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_initial_recompute() {
        let controller = ShapeController::with_mesh(unit_mesh());
        assert_eq!(controller.frame().generation, 1);
        assert_eq!(controller.frame().points.len(), 4);
        assert!(!controller.is_dirty());
        assert!(vec3_approx_eq(controller.frame().points[1], Vec3::new(1.0 / 1.5, 0.0, 0.0)));
        // w = 0.5 with L = 1.5 scales by 1, but the point is at the xyz origin
        assert_eq!(controller.frame().points[3], Vec3::ZERO);
    }

    #[test]
    fn test_unchanged_input_skips_recompute() {
        let mut controller = ShapeController::with_mesh(unit_mesh());
        assert!(controller.recompute_if_dirty().is_none());

        // writing the same values does not dirty anything
        controller.set_position(Vec4::ZERO);
        controller.set_rotation(Euler4::ZERO);
        controller.follow_pivot(Vec3::ZERO);
        assert_eq!(controller.dirty(), DirtyFlags::NONE);
        assert!(controller.tick(0.016).is_none());
        assert_eq!(controller.frame().generation, 1);
    }

    #[test]
    fn test_dirty_flags_per_field() {
        let mut controller = ShapeController::with_mesh(unit_mesh());
        controller.set_position(Vec4::new(0.0, 0.0, 0.0, 0.1));
        controller.set_plane_angle(RotationPlane::ZW, 10.0);
        assert_eq!(controller.dirty(), DirtyFlags::POSITION | DirtyFlags::ROTATION);

        controller.set_scale(Vec4::new(2.0, 2.0, 2.0, 2.0));
        controller.set_placement(Vec3::new(0.0, 1.0, 0.0));
        controller.set_light_distance(3.0);
        assert_eq!(controller.dirty(), DirtyFlags::ALL);

        assert!(controller.recompute_if_dirty().is_some());
        assert_eq!(controller.dirty(), DirtyFlags::NONE);
        assert_eq!(controller.frame().generation, 2);
    }

    #[test]
    fn test_placement_moves_every_point() {
        let mut controller = ShapeController::with_mesh(unit_mesh());
        let before = controller.frame().points.clone();
        controller.follow_pivot(Vec3::new(1.0, 2.0, 3.0));
        let frame = controller.recompute_if_dirty().unwrap();
        for (a, b) in before.iter().zip(frame.points.iter()) {
            assert!(vec3_approx_eq(*a + Vec3::new(1.0, 2.0, 3.0), *b));
        }
    }

    #[test]
    fn test_rotate_plane_accumulates() {
        let mut controller = ShapeController::with_mesh(unit_mesh());
        controller.rotate_plane(RotationPlane::XW, 10.0);
        controller.rotate_plane(RotationPlane::XW, 5.0);
        assert!(approx_eq(controller.rotation().xw, 15.0));
    }

    #[test]
    fn test_rotate_shape_maps_planes_and_stops_spin() {
        let mut controller = ShapeController::with_mesh(unit_mesh());
        controller.start_constant_rotation(Euler4::from_plane(RotationPlane::XY, 90.0));
        controller.rotate_shape(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));

        assert!(controller.constant_rotation().is_none());
        assert_eq!(controller.rotation(), Euler4::new(3.0, 1.0, 2.0, 4.0, 5.0, 6.0));

        // spin no longer advances
        controller.tick(1.0);
        assert!(approx_eq(controller.rotation().xy, 3.0));
    }

    #[test]
    fn test_tick_applies_constant_rotation() {
        let mut controller = ShapeController::with_mesh(unit_mesh());
        controller.start_constant_rotation(Euler4::from_plane(RotationPlane::YW, 30.0));
        assert!(controller.tick(0.5).is_some());
        assert!(approx_eq(controller.rotation().yw, 15.0));
        assert!(controller.tick(0.5).is_some());
        assert!(approx_eq(controller.rotation().yw, 30.0));
        assert_eq!(controller.frame().generation, 3);
    }

    #[test]
    fn test_set_constant_rate() {
        let mut controller = ShapeController::with_mesh(unit_mesh());
        controller.set_constant_rate(RotationPlane::XZ, 20.0);
        controller.set_constant_rate(RotationPlane::ZW, -10.0);
        let rates = controller.constant_rotation().unwrap().rates;
        assert_eq!(rates, Euler4::new(0.0, 0.0, 20.0, 0.0, 0.0, -10.0));

        controller.tick(0.25);
        assert!(approx_eq(controller.rotation().xz, 5.0));
        assert!(approx_eq(controller.rotation().zw, -2.5));
    }

    #[test]
    fn test_reset() {
        let mut controller = ShapeController::with_mesh(unit_mesh());
        controller.start_constant_rotation(Euler4::from_plane(RotationPlane::XY, 90.0));
        controller.tick(1.0);
        controller.reset();
        assert!(controller.rotation().is_zero());
        assert!(controller.constant_rotation().is_none());
        assert!(!controller.stop_constant_rotation());
    }

    #[test]
    fn test_singular_vertex_is_reported() {
        let mut controller = ShapeController::with_mesh(unit_mesh());
        controller.set_light_distance(0.5);
        let frame = controller.recompute_if_dirty().unwrap();
        assert_eq!(frame.singular, vec![3]);
        assert!(frame.points.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_non_finite_points_are_reported() {
        let mut controller = ShapeController::with_mesh(unit_mesh());
        controller.set_light_distance(f32::NAN);
        let frame = controller.recompute_if_dirty().unwrap();
        assert!(frame.is_singular());
        assert_eq!(frame.singular, vec![0, 1, 2, 3]);

        controller.set_light_distance(DEFAULT_LIGHT_DISTANCE);
        let frame = controller.recompute_if_dirty().unwrap();
        assert!(!frame.is_singular());

        controller.set_position(Vec4::new(f32::INFINITY, 0.0, 0.0, 0.0));
        let frame = controller.recompute_if_dirty().unwrap();
        assert_eq!(frame.singular, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_mesh_is_shared() {
        let mesh = unit_mesh();
        let controller = ShapeController::with_mesh(Arc::clone(&mesh));
        assert!(Arc::ptr_eq(controller.mesh(), &mesh));
        assert_eq!(Arc::strong_count(&mesh), 2);
    }
}
