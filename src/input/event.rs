/// Platform-agnostic input events.
///
/// These are fed into
/// [`TrackballControls::handle_event`](crate::controls::TrackballControls::handle_event).
/// Coordinates are page coordinates in the same space as the
/// [`ScreenRect`](crate::controls::ScreenRect) the controller was given.
///
/// # Example
///
/// ```ignore
/// let consumed = controls.handle_event(InputEvent::Wheel {
///     delta_y: 100.0,
///     mode: WheelDeltaMode::Pixel,
/// });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key went down.
    KeyDown {
        /// Physical key in `winit` `KeyCode` debug format (`"KeyW"`).
        key: String,
        /// Caps-lock state reported alongside the key.
        caps_lock: bool,
    },
    /// A key was released.
    KeyUp {
        /// Physical key in `winit` `KeyCode` debug format (`"KeyW"`).
        key: String,
        /// Caps-lock state reported alongside the key.
        caps_lock: bool,
    },
    /// A pointer button was pressed over the input surface.
    PointerDown {
        /// Horizontal page coordinate.
        x: f32,
        /// Vertical page coordinate.
        y: f32,
        /// Which button went down.
        button: PointerButton,
    },
    /// The pointer moved (anywhere; only consumed during a drag).
    PointerMove {
        /// Horizontal page coordinate.
        x: f32,
        /// Vertical page coordinate.
        y: f32,
    },
    /// A pointer button was released (only consumed during a drag).
    PointerUp {
        /// Horizontal page coordinate.
        x: f32,
        /// Vertical page coordinate.
        y: f32,
    },
    /// Wheel step over the input surface.
    Wheel {
        /// Vertical scroll delta; positive scrolls down / zooms out.
        delta_y: f32,
        /// Unit of `delta_y`.
        mode: WheelDeltaMode,
    },
    /// New touch contact; `touches` lists every active contact.
    TouchStart {
        /// All touches currently on the surface.
        touches: Vec<TouchPoint>,
    },
    /// Touch contacts moved.
    TouchMove {
        /// All touches currently on the surface.
        touches: Vec<TouchPoint>,
    },
    /// A touch contact lifted; `touches` lists the remaining ones.
    TouchEnd {
        /// Touches still on the surface.
        touches: Vec<TouchPoint>,
    },
    /// The window lost focus.
    Blur,
    /// Context-menu request over the input surface (suppressed).
    ContextMenu,
}

impl InputEvent {
    /// Shorthand for a key-down without caps lock.
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_owned(),
            caps_lock: false,
        }
    }

    /// Shorthand for a key-up without caps lock.
    #[must_use]
    pub fn key_up(key: &str) -> Self {
        Self::KeyUp {
            key: key.to_owned(),
            caps_lock: false,
        }
    }
}

/// Platform-agnostic pointer button identifier.
///
/// The first three map onto the rotate, zoom, and pan drag modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (left) button.
    Primary,
    /// Middle button (wheel click).
    Middle,
    /// Secondary (right) button.
    Secondary,
    /// Any other button, by platform index.
    Other(u16),
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Primary,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Right => Self::Secondary,
            winit::event::MouseButton::Back => Self::Other(3),
            winit::event::MouseButton::Forward => Self::Other(4),
            winit::event::MouseButton::Other(index) => Self::Other(index),
        }
    }
}

/// Unit of a wheel delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WheelDeltaMode {
    /// Delta in pixels.
    #[default]
    Pixel,
    /// Delta in lines.
    Line,
    /// Delta in pages.
    Page,
}

/// A single touch contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Platform touch identifier.
    pub id: u64,
    /// Horizontal page coordinate.
    pub x: f32,
    /// Vertical page coordinate.
    pub y: f32,
}

impl TouchPoint {
    /// Touch contact at `(x, y)`.
    #[must_use]
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}
