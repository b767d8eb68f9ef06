use glam::{Mat4, Quat, Vec3};

use super::rig::CameraRig;

/// Perspective camera defined by eye position, look-at point, and
/// projection parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Point the camera currently looks at.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO)
    }
}

impl Camera {
    /// Camera at `eye` looking at `target` with a Y-up vector, 50° fov and
    /// a square aspect ratio.
    #[must_use]
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: 50.0,
            znear: 0.1,
            zfar: 2000.0,
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// Right-handed view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // [0, 1] depth range
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// World-space orientation implied by looking from `eye` at `target`.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_mat4(&self.build_view().inverse()).normalize()
    }

    /// Unit vector from the eye toward the look-at point.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

impl CameraRig for Camera {
    fn position(&self) -> Vec3 {
        self.eye
    }

    fn set_position(&mut self, position: Vec3) {
        self.eye = position;
    }

    fn up(&self) -> Vec3 {
        self.up
    }

    fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    fn fov(&self) -> f32 {
        self.fovy
    }

    fn set_fov(&mut self, fov: f32) {
        self.fovy = fov;
    }

    fn look_at(&mut self, point: Vec3) {
        self.target = point;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_points_at_target() {
        let camera = Camera::looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn orientation_maps_negative_z_onto_forward() {
        let camera =
            Camera::looking_at(Vec3::new(3.0, 4.0, 5.0), Vec3::X);
        let mapped = camera.orientation() * Vec3::NEG_Z;
        assert!((mapped - camera.forward()).length() < 1e-5);
    }

    #[test]
    fn resize_ignores_zero_height() {
        let mut camera = Camera::default();
        camera.resize(800, 0);
        assert_eq!(camera.aspect, 1.0);
        camera.resize(800, 400);
        assert_eq!(camera.aspect, 2.0);
    }

    #[test]
    fn look_at_moves_target_only() {
        let mut camera = Camera::default();
        let eye = camera.eye;
        CameraRig::look_at(&mut camera, Vec3::ONE);
        assert_eq!(camera.target, Vec3::ONE);
        assert_eq!(camera.eye, eye);
    }
}
