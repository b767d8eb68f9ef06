//! Trackball camera controller.
//!
//! [`TrackballControls`] turns [`InputEvent`](crate::input::InputEvent)s
//! into drag anchors and held-key state, and [`TrackballControls::update`]
//! integrates them into camera motion once per frame: orbit, dolly, field
//! of view, roll and pan, with optional inertial damping.
//!
//! # Example
//!
//! ```
//! use trackball::camera::Camera;
//! use trackball::controls::{ScreenRect, TrackballControls};
//! use trackball::input::InputEvent;
//! use trackball::options::TrackballOptions;
//!
//! let mut controls = TrackballControls::new(
//!     Camera::default(),
//!     ScreenRect::new(0.0, 0.0, 800.0, 600.0),
//!     TrackballOptions::default(),
//! );
//! let _ = controls.handle_event(InputEvent::key_down("KeyA"));
//! controls.update();
//! // Held rotate-left swings the camera toward -x
//! assert!(controls.camera().eye.x < 0.0);
//! ```

/// Screen rect and the coordinate spaces derived from it.
pub mod geometry;
/// Exclusive drag-mode arbitration.
pub mod mode;
/// Change/start/end notifications.
pub mod notify;
/// Input channels the controller listens on.
pub mod subscription;

mod handlers;
mod integrate;
mod nudge;

use glam::Vec3;

pub use self::geometry::{InputSurface, ScreenRect};
pub use self::mode::{ExclusiveMode, ModeArbiter};
pub use self::notify::{ControlEvent, EventDispatcher, ListenerId};
pub use self::subscription::{Channel, Subscriptions};
use self::integrate::{Frame, Integrators};
use crate::camera::{Camera, CameraRig, TargetProvider};
use crate::input::{DragAnchors, HeldKeys};
use crate::options::TrackballOptions;

/// Smallest field of view (degrees) the controller allows.
pub const FOV_MIN: f32 = 0.05;
/// Largest field of view (degrees) the controller allows.
pub const FOV_MAX: f32 = 160.0;
/// Squared camera displacement above which a frame counts as a change.
pub const CHANGE_EPSILON: f32 = 1e-6;

/// Pose captured at construction (or by [`TrackballControls::save_state`])
/// that [`TrackballControls::reset`] returns to.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PoseSnapshot {
    target: Vec3,
    position: Vec3,
    up: Vec3,
}

/// Interactive orbit controller driving a [`CameraRig`].
pub struct TrackballControls<C: CameraRig = Camera> {
    /// Gesture toggles, speeds, damping, distance limits and key table.
    /// Changes take effect on the next event or frame.
    pub options: TrackballOptions,
    /// While false, every input handler except blur is a no-op. Anchors
    /// are left as they were.
    pub enabled: bool,

    camera: C,
    target: Vec3,
    screen: ScreenRect,
    eye: Vec3,
    keys: HeldKeys,
    anchors: DragAnchors,
    mode: ModeArbiter,
    integrators: Integrators,
    last_position: Vec3,
    snapshot: PoseSnapshot,
    tracking: Option<Box<dyn TargetProvider>>,
    subscriptions: Subscriptions,
    dispatcher: EventDispatcher,
}

// ── Construction ──

impl<C: CameraRig> TrackballControls<C> {
    /// Controller orbiting the origin.
    #[must_use]
    pub fn new(
        camera: C,
        screen: ScreenRect,
        options: TrackballOptions,
    ) -> Self {
        Self::new_with_target(camera, Vec3::ZERO, screen, options)
    }

    /// Controller orbiting `target`.
    ///
    /// Captures the reset pose, subscribes to input and runs one
    /// [`update`](Self::update) so the camera faces the target right away.
    #[must_use]
    pub fn new_with_target(
        camera: C,
        target: Vec3,
        screen: ScreenRect,
        options: TrackballOptions,
    ) -> Self {
        if screen.is_degenerate() {
            log::warn!("trackball created with degenerate screen {screen:?}");
        }
        let position = camera.position();
        let snapshot = PoseSnapshot {
            target,
            position,
            up: camera.up(),
        };

        let mut controls = Self {
            options,
            enabled: true,
            camera,
            target,
            screen,
            eye: position - target,
            keys: HeldKeys::default(),
            anchors: DragAnchors::default(),
            mode: ModeArbiter::new(),
            integrators: Integrators::default(),
            last_position: Vec3::ZERO,
            snapshot,
            tracking: None,
            subscriptions: Subscriptions::default(),
            dispatcher: EventDispatcher::new(),
        };
        controls.subscriptions.attach();
        controls.update();
        controls
    }

    /// Controller orbiting the origin, with the screen rect read from
    /// `surface`.
    #[must_use]
    pub fn with_surface(
        camera: C,
        surface: &dyn InputSurface,
        options: TrackballOptions,
    ) -> Self {
        Self::new(camera, ScreenRect::from_surface(surface), options)
    }
}

// ── Accessors ──

impl<C: CameraRig> TrackballControls<C> {
    /// The driven camera.
    #[must_use]
    pub fn camera(&self) -> &C {
        &self.camera
    }

    /// Mutable access to the driven camera. Position and up changes are
    /// picked up by the next [`update`](Self::update).
    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    /// Give the camera back, dropping the controller.
    #[must_use]
    pub fn into_camera(self) -> C {
        self.camera
    }

    /// Point the camera orbits.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Move the orbit target. The camera keeps its position; the offset is
    /// re-derived on the next frame.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Offset from the target to the camera as of the last frame.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Screen rect used for coordinate conversions.
    #[must_use]
    pub fn screen(&self) -> ScreenRect {
        self.screen
    }

    /// Replace the screen rect.
    pub fn set_screen(&mut self, screen: ScreenRect) {
        if screen.is_degenerate() {
            log::warn!("ignoring degenerate screen rect {screen:?}");
            return;
        }
        log::debug!(
            "trackball screen {}x{} at ({}, {})",
            screen.width,
            screen.height,
            screen.left,
            screen.top
        );
        self.screen = screen;
    }

    /// Re-read the screen rect from `surface`, e.g. after a window resize.
    pub fn handle_resize(&mut self, surface: &dyn InputSurface) {
        self.set_screen(ScreenRect::from_surface(surface));
    }

    /// Exclusive drag mode currently active.
    #[must_use]
    pub fn mode(&self) -> Option<ExclusiveMode> {
        self.mode.current()
    }

    /// Mode arbiter, including the lock-key restore slot.
    #[must_use]
    pub fn arbiter(&self) -> &ModeArbiter {
        &self.mode
    }

    /// Keys currently held.
    #[must_use]
    pub fn held_keys(&self) -> &HeldKeys {
        &self.keys
    }

    /// Pending drag anchors.
    #[must_use]
    pub fn anchors(&self) -> &DragAnchors {
        &self.anchors
    }

    /// Orbit angle (radians) still being replayed by damping.
    #[must_use]
    pub fn residual_angle(&self) -> f32 {
        self.integrators.residual_angle()
    }
}

// ── Tracking and listeners ──

impl<C: CameraRig> TrackballControls<C> {
    /// Keep the camera looking at `provider` instead of the orbit target.
    /// The orbit itself still pivots around the target.
    pub fn set_tracking(&mut self, provider: impl TargetProvider + 'static) {
        log::debug!("trackball tracking enabled");
        self.tracking = Some(Box::new(provider));
    }

    /// Look at whatever `position` returns, polled once per frame.
    pub fn track_with(&mut self, position: impl Fn() -> Vec3 + 'static) {
        let provider: Box<dyn Fn() -> Vec3> = Box::new(position);
        self.set_tracking(provider);
    }

    /// Go back to looking at the orbit target.
    pub fn clear_tracking(&mut self) {
        if self.tracking.take().is_some() {
            log::debug!("trackball tracking cleared");
        }
    }

    /// Whether a tracked object overrides the look-at point.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    /// Register a callback for [`ControlEvent`]s.
    pub fn add_listener(
        &mut self,
        listener: impl FnMut(ControlEvent) + 'static,
    ) -> ListenerId {
        self.dispatcher.add_listener(listener)
    }

    /// Unregister a callback. Returns whether it was registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.dispatcher.remove_listener(id)
    }
}

// ── Frame update ──

impl<C: CameraRig> TrackballControls<C> {
    /// Advance one frame: apply held keys and pending drag motion, clamp,
    /// re-orient the camera and emit [`ControlEvent::Change`] if it moved.
    pub fn update(&mut self) {
        self.eye = self.camera.position() - self.target;

        let gestures = self.options.gestures;
        let mode = self.mode.current();
        let mut frame = Frame {
            camera: &mut self.camera,
            target: &mut self.target,
            eye: &mut self.eye,
            anchors: &mut self.anchors,
            options: &self.options,
        };

        if gestures.rotate {
            nudge::rotate(frame.anchors, &self.keys, frame.options);
            self.integrators.rotate(&mut frame);
        }
        if gestures.zoom {
            nudge::zoom(frame.anchors, &self.keys, frame.options);
            Integrators::zoom(&mut frame, mode);
        }
        if gestures.spin {
            nudge::spin(frame.anchors, &self.keys, frame.options);
            Integrators::spin(&mut frame);
        }
        if gestures.pan {
            Integrators::pan(&mut frame);
        }

        self.camera.set_position(self.target + self.eye);
        self.check_limits();

        let look_at = self
            .tracking
            .as_ref()
            .map_or(self.target, |tracked| tracked.tracked_position());
        self.camera.look_at(look_at);

        let position = self.camera.position();
        if self.last_position.distance_squared(position) > CHANGE_EPSILON {
            log::trace!("trackball moved to {position:?}");
            self.dispatcher.dispatch(ControlEvent::Change);
            self.last_position = position;
        }
    }

    /// Clamp the field of view, then the orbit distance when zoom or pan
    /// can change it. Hitting a distance bound drops pending scalar motion.
    fn check_limits(&mut self) {
        let fov = self.camera.fov();
        let clamped = fov.clamp(FOV_MIN, FOV_MAX);
        if clamped != fov {
            self.camera.set_fov(clamped);
        }

        let gestures = self.options.gestures;
        if !gestures.zoom && !gestures.pan {
            return;
        }
        let (min, max) = (self.options.distance.min, self.options.distance.max);

        if self.eye.length_squared() > max * max {
            self.clamp_distance(max);
        }
        if self.eye.length_squared() < min * min {
            self.clamp_distance(min);
        }
    }

    fn clamp_distance(&mut self, length: f32) {
        self.eye = self.eye.normalize_or_zero() * length;
        self.camera.set_position(self.target + self.eye);
        self.anchors.settle_scalar_tracks();
    }

    /// Return to the saved pose and drop any active mode. Raises exactly
    /// one [`ControlEvent::Change`].
    ///
    /// Pending anchors and residual damping are kept; a spinning camera
    /// keeps coasting from the restored pose.
    pub fn reset(&mut self) {
        self.mode.reset();

        let snapshot = self.snapshot;
        self.target = snapshot.target;
        self.camera.set_position(snapshot.position);
        self.camera.set_up(snapshot.up);
        self.eye = snapshot.position - snapshot.target;
        self.camera.look_at(self.target);

        log::debug!("trackball reset to {:?}", snapshot.position);
        self.dispatcher.dispatch(ControlEvent::Change);
        self.last_position = self.camera.position();
    }

    /// Make the current pose the one [`reset`](Self::reset) returns to.
    pub fn save_state(&mut self) {
        self.snapshot = PoseSnapshot {
            target: self.target,
            position: self.camera.position(),
            up: self.camera.up(),
        };
        log::debug!("trackball pose saved at {:?}", self.snapshot.position);
    }

    /// Release every input subscription. State is left intact; further
    /// events are ignored.
    pub fn dispose(&mut self) {
        self.subscriptions.dispose();
    }

    /// Whether [`dispose`](Self::dispose) has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.subscriptions.is_detached()
    }
}

impl<C: CameraRig + std::fmt::Debug> std::fmt::Debug for TrackballControls<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackballControls")
            .field("camera", &self.camera)
            .field("target", &self.target)
            .field("enabled", &self.enabled)
            .field("mode", &self.mode)
            .field("tracking", &self.tracking.is_some())
            .field("listeners", &self.dispatcher.len())
            .finish_non_exhaustive()
    }
}
