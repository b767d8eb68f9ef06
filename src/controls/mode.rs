//! Exclusive drag-mode arbitration.
//!
//! At most one gesture owns pointer drags at a time. A pointer button or a
//! held lock key picks it; releasing the pointer (or lifting every finger)
//! drops it. Lock keys remember a single previous mode so "hold to switch"
//! can fall back; this is one slot, not a stack.

use crate::input::PointerButton;

/// The gesture currently capturing drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExclusiveMode {
    /// Pointer orbit.
    Rotate,
    /// Pointer dolly.
    Zoom,
    /// Pointer pan.
    Pan,
    /// Single-finger orbit.
    TouchRotate,
    /// Two-finger pinch zoom plus pan.
    TouchZoomPan,
}

impl ExclusiveMode {
    /// Mode selected by a pointer button, if any.
    #[must_use]
    pub fn for_button(button: PointerButton) -> Option<Self> {
        match button {
            PointerButton::Primary => Some(Self::Rotate),
            PointerButton::Middle => Some(Self::Zoom),
            PointerButton::Secondary => Some(Self::Pan),
            PointerButton::Other(_) => None,
        }
    }
}

/// Single-slot state machine over [`ExclusiveMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeArbiter {
    current: Option<ExclusiveMode>,
    previous: Option<ExclusiveMode>,
}

impl ModeArbiter {
    /// Arbiter with no active mode.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            previous: None,
        }
    }

    /// Active mode.
    #[must_use]
    pub fn current(&self) -> Option<ExclusiveMode> {
        self.current
    }

    /// Mode a lock-key release would restore.
    #[must_use]
    pub fn previous(&self) -> Option<ExclusiveMode> {
        self.previous
    }

    /// Whether `mode` is active.
    #[must_use]
    pub fn is(&self, mode: ExclusiveMode) -> bool {
        self.current == Some(mode)
    }

    /// Pointer went down with `mode` selected by its button. A mode that is
    /// already active (drag or lock key) wins.
    pub fn begin_drag(&mut self, mode: ExclusiveMode) {
        if self.current.is_none() {
            self.current = Some(mode);
        }
    }

    /// Any key went down. `lock` is the mode it locks, when it is an enabled
    /// lock key. The previous slot is overwritten on every key-down.
    pub fn lock_key_down(&mut self, lock: Option<ExclusiveMode>) {
        self.previous = self.current;
        if self.current.is_some() {
            return;
        }
        if let Some(mode) = lock {
            self.current = Some(mode);
        }
    }

    /// A key was released. When no mode is active and the key is an enabled
    /// lock key, the previous slot is restored, whichever key stored it.
    pub fn lock_key_up(&mut self, is_lock: bool) {
        if self.current.is_some() {
            return;
        }
        if is_lock {
            self.current = self.previous;
        }
    }

    /// Enter a touch mode (touch handlers only).
    pub fn enter_touch(&mut self, mode: ExclusiveMode) {
        self.current = Some(mode);
    }

    /// Drop the active mode (pointer up, every finger lifted).
    pub fn release(&mut self) {
        self.current = None;
    }

    /// Clear both slots.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_map_to_modes() {
        assert_eq!(
            ExclusiveMode::for_button(PointerButton::Primary),
            Some(ExclusiveMode::Rotate)
        );
        assert_eq!(
            ExclusiveMode::for_button(PointerButton::Middle),
            Some(ExclusiveMode::Zoom)
        );
        assert_eq!(
            ExclusiveMode::for_button(PointerButton::Secondary),
            Some(ExclusiveMode::Pan)
        );
        assert_eq!(ExclusiveMode::for_button(PointerButton::Other(4)), None);
    }

    #[test]
    fn drag_does_not_override_active_mode() {
        let mut arbiter = ModeArbiter::new();
        arbiter.lock_key_down(Some(ExclusiveMode::Pan));
        arbiter.begin_drag(ExclusiveMode::Rotate);
        assert!(arbiter.is(ExclusiveMode::Pan));
        arbiter.release();
        assert_eq!(arbiter.current(), None);
    }

    #[test]
    fn lock_key_during_drag_records_previous_only() {
        let mut arbiter = ModeArbiter::new();
        arbiter.begin_drag(ExclusiveMode::Zoom);
        arbiter.lock_key_down(Some(ExclusiveMode::Rotate));
        assert!(arbiter.is(ExclusiveMode::Zoom));
        assert_eq!(arbiter.previous(), Some(ExclusiveMode::Zoom));
    }

    #[test]
    fn lock_key_up_restores_previous_when_idle() {
        let mut arbiter = ModeArbiter::new();
        arbiter.begin_drag(ExclusiveMode::Pan);
        arbiter.lock_key_down(None);
        arbiter.release();
        // Any enabled lock key restores the single slot
        arbiter.lock_key_up(true);
        assert!(arbiter.is(ExclusiveMode::Pan));
    }

    #[test]
    fn lock_key_up_is_ignored_while_active() {
        let mut arbiter = ModeArbiter::new();
        arbiter.lock_key_down(Some(ExclusiveMode::Rotate));
        arbiter.lock_key_up(true);
        assert!(arbiter.is(ExclusiveMode::Rotate));
    }

    #[test]
    fn non_lock_key_up_keeps_idle() {
        let mut arbiter = ModeArbiter::new();
        arbiter.begin_drag(ExclusiveMode::Zoom);
        arbiter.lock_key_down(None);
        arbiter.release();
        arbiter.lock_key_up(false);
        assert_eq!(arbiter.current(), None);
    }

    #[test]
    fn reset_clears_both_slots() {
        let mut arbiter = ModeArbiter::new();
        arbiter.enter_touch(ExclusiveMode::TouchZoomPan);
        arbiter.lock_key_down(None);
        arbiter.reset();
        assert_eq!(arbiter, ModeArbiter::default());
    }
}
