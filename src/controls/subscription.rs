//! Input subscriptions held by a controller.
//!
//! A controller listens on the input surface (pointer-down, wheel, touch,
//! context menu) and on the window (keys, blur) for its whole life, and on
//! the drag channel (pointer move/up anywhere) only between pointer-down and
//! pointer-up. Events arriving on a channel it does not hold are dropped,
//! so a released drag cannot leak moves into the next gesture and a
//! disposed controller ignores everything.

use crate::input::flags::{Flag, FlagSet};
use crate::input::InputEvent;

/// Where an input event is delivered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The input surface element.
    Surface,
    /// The window (keyboard and focus).
    Window,
    /// Global pointer move/up, held only while dragging.
    Drag,
}

impl Flag for Channel {
    const ALL: &'static [Self] = &[Self::Surface, Self::Window, Self::Drag];

    fn bit(self) -> u8 {
        self as u8
    }
}

impl Channel {
    /// Channel an event arrives on.
    #[must_use]
    pub fn of(event: &InputEvent) -> Self {
        match event {
            InputEvent::PointerDown { .. }
            | InputEvent::Wheel { .. }
            | InputEvent::TouchStart { .. }
            | InputEvent::TouchMove { .. }
            | InputEvent::TouchEnd { .. }
            | InputEvent::ContextMenu => Self::Surface,
            InputEvent::KeyDown { .. }
            | InputEvent::KeyUp { .. }
            | InputEvent::Blur => Self::Window,
            InputEvent::PointerMove { .. } | InputEvent::PointerUp { .. } => {
                Self::Drag
            }
        }
    }
}

/// Set of channels a controller currently listens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Subscriptions {
    held: FlagSet<Channel>,
}

impl Subscriptions {
    /// Subscribe to the surface and window channels.
    pub fn attach(&mut self) {
        self.held.insert(Channel::Surface);
        self.held.insert(Channel::Window);
        log::debug!("trackball attached to surface and window");
    }

    /// Subscribe to global pointer move/up for the length of a drag.
    pub fn begin_drag(&mut self) {
        self.held.insert(Channel::Drag);
        log::trace!("drag subscription acquired");
    }

    /// Release the drag subscription.
    pub fn end_drag(&mut self) {
        self.held.remove(Channel::Drag);
        log::trace!("drag subscription released");
    }

    /// Release every subscription.
    pub fn dispose(&mut self) {
        self.held.clear();
        log::debug!("trackball detached from all input");
    }

    /// Whether `channel` is held.
    #[must_use]
    pub fn holds(&self, channel: Channel) -> bool {
        self.held.contains(channel)
    }

    /// Whether `event` would be delivered.
    #[must_use]
    pub fn accepts(&self, event: &InputEvent) -> bool {
        self.holds(Channel::of(event))
    }

    /// Whether nothing is held.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.held.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_channel_only_between_down_and_up() {
        let mut subs = Subscriptions::default();
        subs.attach();
        let moved = InputEvent::PointerMove { x: 1.0, y: 1.0 };
        assert!(!subs.accepts(&moved));
        subs.begin_drag();
        assert!(subs.accepts(&moved));
        subs.end_drag();
        assert!(!subs.accepts(&moved));
        assert!(subs.accepts(&InputEvent::Blur));
    }

    #[test]
    fn dispose_drops_everything() {
        let mut subs = Subscriptions::default();
        subs.attach();
        subs.begin_drag();
        subs.dispose();
        assert!(subs.is_detached());
        assert!(!subs.accepts(&InputEvent::ContextMenu));
        assert!(!subs.accepts(&InputEvent::key_down("KeyW")));
    }
}
