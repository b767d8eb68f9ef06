use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;

/// The slice of a camera the trackball reads and writes.
///
/// Position and up vector are mutated in place every frame; the field of
/// view is scaled by the fov track; `look_at` re-orients the camera after
/// the new position is known.
pub trait CameraRig {
    /// World-space camera position.
    fn position(&self) -> Vec3;
    /// Move the camera.
    fn set_position(&mut self, position: Vec3);
    /// Camera up vector.
    fn up(&self) -> Vec3;
    /// Replace the camera up vector.
    fn set_up(&mut self, up: Vec3);
    /// Vertical field of view in degrees.
    fn fov(&self) -> f32;
    /// Replace the vertical field of view (degrees).
    fn set_fov(&mut self, fov: f32);
    /// Orient the camera toward `point`, keeping its current up vector.
    fn look_at(&mut self, point: Vec3);
}

/// Something the camera can keep looking at while it orbits the target.
///
/// Hosts adapt their scene objects to this; a plain point, a boxed closure,
/// or a shared handle to another provider all work.
pub trait TargetProvider {
    /// Current world-space position to look at.
    fn tracked_position(&self) -> Vec3;
}

impl TargetProvider for Vec3 {
    fn tracked_position(&self) -> Vec3 {
        *self
    }
}

impl TargetProvider for Box<dyn Fn() -> Vec3> {
    fn tracked_position(&self) -> Vec3 {
        (**self)()
    }
}

impl<T: TargetProvider> TargetProvider for Rc<RefCell<T>> {
    fn tracked_position(&self) -> Vec3 {
        self.borrow().tracked_position()
    }
}
