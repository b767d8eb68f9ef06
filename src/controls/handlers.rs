//! Input event handlers for `TrackballControls`.

use glam::Vec2;

use super::{ControlEvent, ExclusiveMode, TrackballControls};
use crate::camera::CameraRig;
use crate::input::{
    InputEvent, KeySlot, Modifier, PointerButton, TouchPoint, WheelDeltaMode,
};

/// Wheel-to-track factor per delta unit.
fn wheel_factor(mode: WheelDeltaMode) -> f32 {
    match mode {
        WheelDeltaMode::Pixel => 0.00025,
        WheelDeltaMode::Line => 0.01,
        WheelDeltaMode::Page => 0.025,
    }
}

// ── Unified input handler ──

impl<C: CameraRig> TrackballControls<C> {
    /// Feed one input event to the controller.
    ///
    /// Returns `true` when the event was consumed and the host should
    /// suppress its default action (scrolling, the context menu, text
    /// selection while dragging).
    ///
    /// Events are dropped when the controller is disabled (blur excepted),
    /// disposed, or when they arrive on a channel it does not currently
    /// hold: pointer moves and releases are only taken between a
    /// pointer-down and its pointer-up.
    ///
    /// # Example
    ///
    /// ```ignore
    /// controls.handle_event(InputEvent::PointerDown { x, y, button });
    /// controls.handle_event(InputEvent::PointerMove { x, y });
    /// ```
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        if !self.subscriptions.accepts(&event) {
            return false;
        }
        if !self.enabled && !matches!(event, InputEvent::Blur) {
            return false;
        }

        match event {
            InputEvent::KeyDown { key, caps_lock } => {
                self.on_key_down(&key, caps_lock);
                false
            }
            InputEvent::KeyUp { key, caps_lock } => {
                self.on_key_up(&key, caps_lock);
                false
            }
            InputEvent::PointerDown { x, y, button } => {
                self.on_pointer_down(x, y, button)
            }
            InputEvent::PointerMove { x, y } => self.on_pointer_move(x, y),
            InputEvent::PointerUp { .. } => {
                self.on_pointer_up();
                true
            }
            InputEvent::Wheel { delta_y, mode } => self.on_wheel(delta_y, mode),
            InputEvent::TouchStart { touches } => self.on_touch_start(&touches),
            InputEvent::TouchMove { touches } => self.on_touch_move(&touches),
            InputEvent::TouchEnd { touches } => {
                self.on_touch_end(&touches);
                true
            }
            InputEvent::Blur => {
                self.keys.clear();
                log::debug!("focus lost, held keys cleared");
                false
            }
            InputEvent::ContextMenu => true,
        }
    }

    // ── Keyboard ──

    fn on_key_down(&mut self, key: &str, caps_lock: bool) {
        for &slot in self.options.keybindings.slots_for(key) {
            self.keys.apply(slot, true);
        }
        self.keys.poll_caps_lock(caps_lock);

        let lock = self.lock_mode_for(key);
        let before = self.mode.current();
        self.mode.lock_key_down(lock);
        if self.mode.current() != before {
            log::debug!("lock key {key} selects {:?}", self.mode.current());
        }
    }

    fn on_key_up(&mut self, key: &str, caps_lock: bool) {
        for &slot in self.options.keybindings.slots_for(key) {
            self.keys.apply(slot, false);
        }
        self.keys.poll_caps_lock(caps_lock);

        let is_lock = self.lock_mode_for(key).is_some();
        let before = self.mode.current();
        self.mode.lock_key_up(is_lock);
        if self.mode.current() != before {
            log::debug!("lock key {key} restores {:?}", self.mode.current());
        }
    }

    /// Mode `key` locks, when it is bound to the lock slot of an enabled
    /// gesture. Rotate, zoom and pan are checked in that order.
    fn lock_mode_for(&self, key: &str) -> Option<ExclusiveMode> {
        let gestures = self.options.gestures;
        let bindings = &self.options.keybindings;
        [
            (KeySlot::LockRotate, gestures.rotate, ExclusiveMode::Rotate),
            (KeySlot::LockZoom, gestures.zoom, ExclusiveMode::Zoom),
            (KeySlot::LockPan, gestures.pan, ExclusiveMode::Pan),
        ]
        .into_iter()
        .find(|&(slot, enabled, _)| enabled && bindings.matches(slot, key))
        .map(|(_, _, mode)| mode)
    }

    // ── Pointer ──

    fn on_pointer_down(
        &mut self,
        x: f32,
        y: f32,
        button: PointerButton,
    ) -> bool {
        if self.screen.is_degenerate() {
            log::warn!("pointer-down ignored, screen rect is degenerate");
            return false;
        }
        match ExclusiveMode::for_button(button) {
            Some(mode) => self.mode.begin_drag(mode),
            None if self.mode.current().is_none() => {
                log::trace!("ignoring pointer-down for {button:?}");
                return false;
            }
            None => {}
        }

        let gestures = self.options.gestures;
        match self.mode.current() {
            Some(ExclusiveMode::Rotate) if gestures.rotate => {
                let point = self.screen.to_circle_space(x, y);
                self.anchors.anchor_rotate(point);
            }
            Some(ExclusiveMode::Zoom) if gestures.zoom => {
                let fraction = self.screen.to_screen_fraction(x, y);
                self.anchors.anchor_zoom(fraction.y);
            }
            Some(ExclusiveMode::Pan) if gestures.pan => {
                let fraction = self.screen.to_screen_fraction(x, y);
                self.anchors.anchor_pan(fraction);
            }
            _ => {}
        }
        log::debug!("drag started in {:?}", self.mode.current());

        self.subscriptions.begin_drag();
        self.dispatcher.dispatch(ControlEvent::Start);
        true
    }

    fn on_pointer_move(&mut self, x: f32, y: f32) -> bool {
        let gestures = self.options.gestures;
        match self.mode.current() {
            Some(ExclusiveMode::Rotate) if gestures.rotate => {
                let point = self.screen.to_circle_space(x, y);
                self.anchors.track_rotate(point);
            }
            Some(ExclusiveMode::Zoom) if gestures.zoom => {
                self.anchors.zoom_end = self.screen.to_screen_fraction(x, y).y;
            }
            Some(ExclusiveMode::Pan) if gestures.pan => {
                self.anchors.pan_end = self.screen.to_screen_fraction(x, y);
            }
            _ => {}
        }
        true
    }

    fn on_pointer_up(&mut self) {
        self.mode.release();
        self.subscriptions.end_drag();
        log::debug!("drag ended");
        self.dispatcher.dispatch(ControlEvent::End);
    }

    // ── Wheel ──

    fn on_wheel(&mut self, delta_y: f32, mode: WheelDeltaMode) -> bool {
        if !self.options.gestures.zoom {
            return false;
        }

        let mut factor = wheel_factor(mode);
        if self.keys.has(Modifier::Alt) {
            factor /= 4.0;
        }
        if self.keys.has(Modifier::Ctrl) {
            factor /= 4.0;
        }
        if self.keys.has(Modifier::CapsLock) {
            factor /= 8.0;
        }

        if self.keys.has(Modifier::Shift) {
            if self.options.gestures.fov {
                self.anchors.fov_start -= delta_y * factor;
            }
        } else {
            self.anchors.zoom_start -= delta_y * factor;
        }

        self.dispatcher.dispatch(ControlEvent::Start);
        self.dispatcher.dispatch(ControlEvent::End);
        true
    }

    // ── Touch ──

    fn on_touch_start(&mut self, touches: &[TouchPoint]) -> bool {
        if self.screen.is_degenerate() {
            log::warn!("touch-start ignored, screen rect is degenerate");
            return false;
        }
        match touches {
            [] => {
                log::warn!("touch-start without touches ignored");
                return false;
            }
            [only] => {
                self.mode.enter_touch(ExclusiveMode::TouchRotate);
                let point = self.screen.to_circle_space(only.x, only.y);
                self.anchors.anchor_rotate(point);
            }
            [first, second, ..] => {
                self.mode.enter_touch(ExclusiveMode::TouchZoomPan);
                self.anchors.anchor_pinch(pinch_distance(first, second));
                let center = pinch_center(first, second);
                let fraction =
                    self.screen.to_screen_fraction(center.x, center.y);
                self.anchors.anchor_pan(fraction);
            }
        }
        log::debug!("touch started in {:?}", self.mode.current());
        self.dispatcher.dispatch(ControlEvent::Start);
        true
    }

    fn on_touch_move(&mut self, touches: &[TouchPoint]) -> bool {
        if self.screen.is_degenerate() {
            return false;
        }
        match touches {
            [] => return false,
            [only] => {
                let point = self.screen.to_circle_space(only.x, only.y);
                self.anchors.track_rotate(point);
            }
            [first, second, ..] => {
                self.anchors.touch_zoom_distance_end =
                    pinch_distance(first, second);
                let center = pinch_center(first, second);
                self.anchors.pan_end =
                    self.screen.to_screen_fraction(center.x, center.y);
            }
        }
        true
    }

    fn on_touch_end(&mut self, touches: &[TouchPoint]) {
        match touches {
            [] => self.mode.release(),
            [only] if !self.screen.is_degenerate() => {
                self.mode.enter_touch(ExclusiveMode::TouchRotate);
                let point = self.screen.to_circle_space(only.x, only.y);
                self.anchors.anchor_rotate(point);
            }
            _ => {}
        }
        log::debug!("touch ended, mode {:?}", self.mode.current());
        self.dispatcher.dispatch(ControlEvent::End);
    }
}

fn pinch_distance(first: &TouchPoint, second: &TouchPoint) -> f32 {
    Vec2::new(first.x - second.x, first.y - second.y).length()
}

fn pinch_center(first: &TouchPoint, second: &TouchPoint) -> Vec2 {
    Vec2::new(first.x + second.x, first.y + second.y) * 0.5
}
