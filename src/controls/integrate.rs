//! Per-frame motion integrators.
//!
//! Each integrator reads the drag anchors, moves the offset (`eye`), camera
//! up vector, fov or target, then advances its anchors. A live delta is
//! applied in full; without one, and unless static moving, the residual is
//! replayed with exponential decay, which is what gives drags inertia.
//!
//! Order matters: rotate, zoom, spin, pan. Pan reads the offset length
//! after rotate and zoom have resized it.

use glam::{Quat, Vec3};

use super::mode::ExclusiveMode;
use crate::camera::CameraRig;
use crate::input::DragAnchors;
use crate::options::TrackballOptions;

/// Residual orbit angles below this (radians) stop the spin-down.
pub(crate) const RESIDUAL_ANGLE_EPSILON: f32 = 1e-7;

/// Mutable view of everything an integrator may touch in one frame.
pub(crate) struct Frame<'a, C> {
    pub(crate) camera: &'a mut C,
    pub(crate) target: &'a mut Vec3,
    pub(crate) eye: &'a mut Vec3,
    pub(crate) anchors: &'a mut DragAnchors,
    pub(crate) options: &'a TrackballOptions,
}

/// Integrator state kept between frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Integrators {
    last_axis: Vec3,
    last_angle: f32,
}

impl Integrators {
    /// Angle (radians) the orbit will replay on the next idle frame, before
    /// decay.
    pub(crate) fn residual_angle(&self) -> f32 {
        self.last_angle
    }

    /// Orbit the offset and up vector around the target.
    pub(crate) fn rotate<C: CameraRig>(&mut self, frame: &mut Frame<'_, C>) {
        let delta = frame.anchors.move_curr - frame.anchors.move_prev;
        let angle = delta.length();

        if angle > 0.0 {
            *frame.eye = frame.camera.position() - *frame.target;

            let eye_direction = frame.eye.normalize_or_zero();
            let up_direction = frame.camera.up().normalize_or_zero();
            let sideways_direction =
                up_direction.cross(eye_direction).normalize_or_zero();
            let move_direction =
                up_direction * delta.y + sideways_direction * delta.x;
            let axis = move_direction.cross(*frame.eye).normalize_or_zero();

            if axis != Vec3::ZERO {
                let angle = angle
                    * frame.options.speeds.rotate
                    * frame.camera.fov().to_radians();
                apply_rotation(frame, axis, angle);
                self.last_axis = axis;
                self.last_angle = angle;
            }
        } else if !frame.options.damping.static_moving
            && self.last_angle != 0.0
        {
            self.last_angle *= frame.options.damping.angular_decay();
            if self.last_angle.abs() < RESIDUAL_ANGLE_EPSILON {
                self.last_angle = 0.0;
            } else {
                *frame.eye = frame.camera.position() - *frame.target;
                apply_rotation(frame, self.last_axis, self.last_angle);
            }
        }

        frame.anchors.move_prev = frame.anchors.move_curr;
    }

    /// Dolly the offset and scale the fov; pinch zoom while two fingers are
    /// down.
    pub(crate) fn zoom<C: CameraRig>(
        frame: &mut Frame<'_, C>,
        mode: Option<ExclusiveMode>,
    ) {
        let anchors = &mut *frame.anchors;
        let options = frame.options;

        if mode == Some(ExclusiveMode::TouchZoomPan) {
            let factor = anchors.touch_zoom_distance_start
                / anchors.touch_zoom_distance_end;
            anchors.touch_zoom_distance_start =
                anchors.touch_zoom_distance_end;
            if factor.is_finite() && factor > 0.0 {
                *frame.eye *= factor;
            }
            return;
        }

        if options.gestures.fov {
            let fov_factor = 1.0
                + (anchors.fov_end - anchors.fov_start) * options.speeds.fov;
            if fov_factor != 1.0 && fov_factor > 0.0 {
                anchors.fov_start =
                    options.damping.advance(anchors.fov_start, anchors.fov_end);
                let fov = frame.camera.fov();
                frame.camera.set_fov(fov * fov_factor);
            }
        }

        let zoom_factor = 1.0
            + (anchors.zoom_end - anchors.zoom_start) * options.speeds.zoom;
        if zoom_factor != 1.0 && zoom_factor > 0.0 {
            *frame.eye *= zoom_factor;
        }
        anchors.zoom_start =
            options.damping.advance(anchors.zoom_start, anchors.zoom_end);
    }

    /// Roll the up vector around the axis through the camera position.
    pub(crate) fn spin<C: CameraRig>(frame: &mut Frame<'_, C>) {
        let anchors = &mut *frame.anchors;
        let options = frame.options;

        let factor =
            (anchors.spin_end - anchors.spin_start) * options.speeds.spin;
        if factor != 0.0 {
            let axis = frame.camera.position().normalize_or_zero();
            if axis != Vec3::ZERO {
                let rotation = Quat::from_axis_angle(axis, -factor);
                let up = frame.camera.up();
                frame.camera.set_up(rotation * up);
            }
        }
        anchors.spin_start =
            options.damping.advance(anchors.spin_start, anchors.spin_end);
    }

    /// Translate camera and target across the view plane.
    pub(crate) fn pan<C: CameraRig>(frame: &mut Frame<'_, C>) {
        let anchors = &mut *frame.anchors;
        let options = frame.options;

        let change = anchors.pan_end - anchors.pan_start;
        if change.length_squared() == 0.0 {
            return;
        }

        let change = change * (frame.eye.length() * options.speeds.pan);
        let up = frame.camera.up();
        let pan = frame.eye.cross(up).normalize_or_zero() * change.x
            + up.normalize_or_zero() * change.y;

        let position = frame.camera.position();
        frame.camera.set_position(position + pan);
        *frame.target += pan;

        anchors.pan_start =
            options.damping.advance_vec(anchors.pan_start, anchors.pan_end);
    }
}

fn apply_rotation<C: CameraRig>(
    frame: &mut Frame<'_, C>,
    axis: Vec3,
    angle: f32,
) {
    let rotation = Quat::from_axis_angle(axis, angle);
    *frame.eye = rotation * *frame.eye;
    let up = frame.camera.up();
    frame.camera.set_up(rotation * up);
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::camera::Camera;

    struct Rig {
        camera: Camera,
        target: Vec3,
        eye: Vec3,
        anchors: DragAnchors,
        options: TrackballOptions,
    }

    impl Rig {
        fn new() -> Self {
            let camera =
                Camera::looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
            let mut options = TrackballOptions::default();
            options.damping.static_moving = true;
            Self {
                eye: camera.eye,
                camera,
                target: Vec3::ZERO,
                anchors: DragAnchors::default(),
                options,
            }
        }

        fn frame(&mut self) -> Frame<'_, Camera> {
            Frame {
                camera: &mut self.camera,
                target: &mut self.target,
                eye: &mut self.eye,
                anchors: &mut self.anchors,
                options: &self.options,
            }
        }
    }

    #[test]
    fn rotate_keeps_radius_and_consumes_delta() {
        let mut rig = Rig::new();
        let mut integrators = Integrators::default();
        rig.anchors.anchor_rotate(Vec2::ZERO);
        rig.anchors.track_rotate(Vec2::new(0.1, 0.0));

        integrators.rotate(&mut rig.frame());

        assert!((rig.eye.length() - 10.0).abs() < 1e-4);
        assert!(rig.eye.x.abs() > 1e-3);
        assert_eq!(rig.anchors.move_prev, rig.anchors.move_curr);
    }

    #[test]
    fn rotate_axis_is_orthogonal_to_offset_and_move() {
        let mut rig = Rig::new();
        let mut integrators = Integrators::default();
        rig.anchors.anchor_rotate(Vec2::ZERO);
        rig.anchors.track_rotate(Vec2::new(0.05, 0.03));
        let offset = rig.eye;
        let delta = rig.anchors.move_curr - rig.anchors.move_prev;
        let up = rig.camera.up.normalize();
        let sideways = up.cross(offset.normalize()).normalize();
        let move_direction = up * delta.y + sideways * delta.x;

        integrators.rotate(&mut rig.frame());

        assert!(integrators.last_axis.dot(offset).abs() < 1e-4);
        assert!(integrators.last_axis.dot(move_direction).abs() < 1e-4);
        assert!(integrators.residual_angle() > 0.0);
    }

    #[test]
    fn rotate_residual_decays_geometrically() {
        let mut rig = Rig::new();
        rig.options.damping.static_moving = false;
        let mut integrators = Integrators::default();
        rig.anchors.anchor_rotate(Vec2::ZERO);
        rig.anchors.track_rotate(Vec2::new(0.1, 0.0));
        integrators.rotate(&mut rig.frame());

        let decay = rig.options.damping.angular_decay();
        let mut previous = integrators.residual_angle();
        for _ in 0..10 {
            integrators.rotate(&mut rig.frame());
            let angle = integrators.residual_angle();
            assert!((angle - previous * decay).abs() < 1e-6);
            assert!(angle < previous);
            previous = angle;
        }
    }

    #[test]
    fn static_rotate_does_not_replay() {
        let mut rig = Rig::new();
        let mut integrators = Integrators::default();
        rig.anchors.anchor_rotate(Vec2::ZERO);
        rig.anchors.track_rotate(Vec2::new(0.1, 0.0));
        integrators.rotate(&mut rig.frame());
        let eye = rig.eye;

        integrators.rotate(&mut rig.frame());

        assert_eq!(rig.eye, eye);
    }

    #[test]
    fn zoom_scales_offset_by_track_difference() {
        let mut rig = Rig::new();
        rig.anchors.zoom_start = -0.025;
        Integrators::zoom(&mut rig.frame(), None);

        let expected = 10.0 * (1.0 + 0.025 * 1.2);
        assert!((rig.eye.length() - expected).abs() < 1e-4);
        assert_eq!(rig.anchors.zoom_start, rig.anchors.zoom_end);
    }

    #[test]
    fn zoom_rejects_non_positive_factor() {
        let mut rig = Rig::new();
        rig.anchors.zoom_start = 5.0;
        Integrators::zoom(&mut rig.frame(), None);
        assert_eq!(rig.eye, Vec3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn fov_track_scales_field_of_view() {
        let mut rig = Rig::new();
        rig.anchors.fov_end = 0.1;
        Integrators::zoom(&mut rig.frame(), None);
        assert!((rig.camera.fovy - 50.0 * 1.12).abs() < 1e-3);
        assert_eq!(rig.anchors.fov_start, 0.1);
    }

    #[test]
    fn fov_track_ignored_when_disabled() {
        let mut rig = Rig::new();
        rig.options.gestures.fov = false;
        rig.anchors.fov_end = 0.1;
        Integrators::zoom(&mut rig.frame(), None);
        assert_eq!(rig.camera.fovy, 50.0);
    }

    #[test]
    fn pinch_applies_ratio_once() {
        let mut rig = Rig::new();
        rig.anchors.touch_zoom_distance_start = 100.0;
        rig.anchors.touch_zoom_distance_end = 50.0;
        let mode = Some(ExclusiveMode::TouchZoomPan);

        Integrators::zoom(&mut rig.frame(), mode);
        assert!((rig.eye.length() - 20.0).abs() < 1e-4);
        assert_eq!(rig.anchors.touch_zoom_distance_start, 50.0);

        Integrators::zoom(&mut rig.frame(), mode);
        assert!((rig.eye.length() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn pinch_ignores_zero_distance() {
        let mut rig = Rig::new();
        rig.anchors.touch_zoom_distance_start = 100.0;
        Integrators::zoom(&mut rig.frame(), Some(ExclusiveMode::TouchZoomPan));
        assert_eq!(rig.eye, Vec3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn spin_rolls_up_vector_only() {
        let mut rig = Rig::new();
        rig.anchors.spin_end = 0.1;
        Integrators::spin(&mut rig.frame());

        assert!((rig.camera.up.length() - 1.0).abs() < 1e-5);
        assert!(rig.camera.up.x.abs() > 1e-3);
        assert_eq!(rig.eye, Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(rig.anchors.spin_start, 0.1);
    }

    #[test]
    fn pan_moves_camera_and_target_together() {
        let mut rig = Rig::new();
        rig.anchors.anchor_pan(Vec2::new(0.5, 0.5));
        rig.anchors.pan_end = Vec2::new(0.6, 0.5);
        Integrators::pan(&mut rig.frame());

        // 0.1 * |eye| * pan speed, toward camera-left
        let expected = Vec3::new(-0.1 * 10.0 * 0.3, 0.0, 0.0);
        assert!((rig.target - expected).length() < 1e-5);
        let moved = Vec3::new(0.0, 0.0, 10.0) + expected;
        assert!((rig.camera.eye - moved).length() < 1e-5);
        assert_eq!(rig.anchors.pan_start, rig.anchors.pan_end);
    }

    #[test]
    fn damped_pan_eases_toward_end() {
        let mut rig = Rig::new();
        rig.options.damping.static_moving = false;
        rig.anchors.anchor_pan(Vec2::ZERO);
        rig.anchors.pan_end = Vec2::new(1.0, 0.0);
        Integrators::pan(&mut rig.frame());
        assert!((rig.anchors.pan_start.x - 0.15).abs() < 1e-6);
    }
}
