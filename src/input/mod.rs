//! Input handling: event types, held-key state, drag anchors, and the
//! optional `winit` translation layer.

/// Platform-agnostic input events.
pub mod event;
/// Typed flag sets for held directions and modifiers.
pub mod flags;
/// Named key-table slots.
pub mod keyboard;
/// Held keys and drag anchors.
pub mod state;
/// Translates `winit` window events into [`InputEvent`]s.
#[cfg(feature = "viewer")]
pub mod platform;

pub use event::{InputEvent, PointerButton, TouchPoint, WheelDeltaMode};
pub use flags::{
    Modifier, Modifiers, RotateDirection, RotateFlags, SpinDirection,
    SpinFlags, ZoomDirection, ZoomFlags,
};
pub use keyboard::KeySlot;
pub use state::{DragAnchors, HeldKeys};
