use glam::Vec2;

use super::flags::{
    Modifier, Modifiers, RotateDirection, RotateFlags, SpinDirection,
    SpinFlags, ZoomDirection, ZoomFlags,
};
use super::keyboard::KeySlot;

/// Drag anchors every gesture writes and the integrators consume.
///
/// Rotate anchors live in circle space, pan anchors in screen-fraction
/// space; zoom, fov and spin are scalar tracks. Pointer, touch, wheel and
/// held keys all write into these same fields, which is what unifies them
/// at the integrator boundary.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragAnchors {
    /// Rotate anchor consumed by the previous frame.
    pub move_prev: Vec2,
    /// Latest rotate anchor.
    pub move_curr: Vec2,
    /// Distance track: consumed position.
    pub zoom_start: f32,
    /// Distance track: requested position.
    pub zoom_end: f32,
    /// Field-of-view track: consumed position.
    pub fov_start: f32,
    /// Field-of-view track: requested position.
    pub fov_end: f32,
    /// Spin track: consumed position.
    pub spin_start: f32,
    /// Spin track: requested position.
    pub spin_end: f32,
    /// Pinch distance consumed by the last frame.
    pub touch_zoom_distance_start: f32,
    /// Latest pinch distance.
    pub touch_zoom_distance_end: f32,
    /// Pan anchor consumed so far.
    pub pan_start: Vec2,
    /// Latest pan anchor.
    pub pan_end: Vec2,
}

impl DragAnchors {
    /// Start a rotate drag at `point` with no pending motion.
    pub fn anchor_rotate(&mut self, point: Vec2) {
        self.move_curr = point;
        self.move_prev = point;
    }

    /// Advance the rotate drag to `point`.
    pub fn track_rotate(&mut self, point: Vec2) {
        self.move_prev = self.move_curr;
        self.move_curr = point;
    }

    /// Start a zoom drag at screen-fraction height `y`.
    pub fn anchor_zoom(&mut self, y: f32) {
        self.zoom_start = y;
        self.zoom_end = y;
    }

    /// Start a pan drag at `point`.
    pub fn anchor_pan(&mut self, point: Vec2) {
        self.pan_start = point;
        self.pan_end = point;
    }

    /// Start a pinch at finger separation `distance`.
    pub fn anchor_pinch(&mut self, distance: f32) {
        self.touch_zoom_distance_start = distance;
        self.touch_zoom_distance_end = distance;
    }

    /// Drop any pending zoom, spin and fov motion.
    pub fn settle_scalar_tracks(&mut self) {
        self.zoom_start = self.zoom_end;
        self.spin_start = self.spin_end;
        self.fov_start = self.fov_end;
    }
}

/// Keys currently held, grouped by what they drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys {
    /// Held orbit directions.
    pub rotate: RotateFlags,
    /// Held zoom directions.
    pub zoom: ZoomFlags,
    /// Held spin directions.
    pub spin: SpinFlags,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

impl HeldKeys {
    /// Record a key slot going down (`pressed`) or up.
    ///
    /// Lock slots and `focus` carry no held state and are ignored.
    pub fn apply(&mut self, slot: KeySlot, pressed: bool) {
        match slot {
            KeySlot::RotateUp => self.rotate.set(RotateDirection::Up, pressed),
            KeySlot::RotateDown => {
                self.rotate.set(RotateDirection::Down, pressed);
            }
            KeySlot::RotateLeft => {
                self.rotate.set(RotateDirection::Left, pressed);
            }
            KeySlot::RotateRight => {
                self.rotate.set(RotateDirection::Right, pressed);
            }
            KeySlot::ZoomIn => self.zoom.set(ZoomDirection::In, pressed),
            KeySlot::ZoomOut => self.zoom.set(ZoomDirection::Out, pressed),
            KeySlot::SpinLeft => self.spin.set(SpinDirection::Left, pressed),
            KeySlot::SpinRight => {
                self.spin.set(SpinDirection::Right, pressed);
            }
            KeySlot::ModifierAlt => {
                self.modifiers.set(Modifier::Alt, pressed);
            }
            KeySlot::ModifierCtrl => {
                self.modifiers.set(Modifier::Ctrl, pressed);
            }
            KeySlot::ModifierShift => {
                self.modifiers.set(Modifier::Shift, pressed);
            }
            KeySlot::LockRotate
            | KeySlot::LockZoom
            | KeySlot::LockPan
            | KeySlot::Focus => {}
        }
    }

    /// Mirror the caps-lock state a key event reported.
    pub fn poll_caps_lock(&mut self, caps_lock: bool) {
        self.modifiers.set(Modifier::CapsLock, caps_lock);
    }

    /// Forget every held key (focus lost mid-gesture).
    pub fn clear(&mut self) {
        self.rotate.clear();
        self.zoom.clear();
        self.spin.clear();
        self.modifiers.clear();
    }

    /// Whether `modifier` is held.
    #[must_use]
    pub fn has(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(modifier)
    }
}
