//! `winit` window events to [`InputEvent`]s.
//!
//! `winit` reports cursor position, buttons and touches separately; the
//! controller wants page-coordinate pointer events and full touch lists.
//! [`WinitInput`] keeps the little state needed to bridge the two.

use winit::event::{
    ElementState, KeyEvent, MouseScrollDelta, Touch, TouchPhase, WindowEvent,
};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::{InputEvent, TouchPoint, WheelDeltaMode};
use crate::controls::{InputSurface, ScreenRect};

/// Stateful translator from `winit` window events.
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    cursor: (f32, f32),
    /// Active touches in first-contact order.
    touches: Vec<TouchPoint>,
    caps_lock: bool,
}

impl WinitInput {
    /// Translator with no cursor position, touches, or caps lock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> (f32, f32) {
        self.cursor
    }

    /// Whether caps lock is believed to be on.
    ///
    /// `winit` does not report lock state, so this toggles on every
    /// caps-lock press and may start out of sync with the keyboard.
    #[must_use]
    pub fn caps_lock(&self) -> bool {
        self.caps_lock
    }

    /// Translate one window event. Events the controller has no use for
    /// (and key repeats) yield `None`.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                Some(InputEvent::PointerMove {
                    x: self.cursor.0,
                    y: self.cursor.1,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let (x, y) = self.cursor;
                Some(match state {
                    ElementState::Pressed => InputEvent::PointerDown {
                        x,
                        y,
                        button: (*button).into(),
                    },
                    ElementState::Released => InputEvent::PointerUp { x, y },
                })
            }
            WindowEvent::MouseWheel { delta, .. } => Some(wheel(*delta)),
            WindowEvent::KeyboardInput { event, .. } => self.key(event),
            WindowEvent::Touch(touch) => Some(self.touch(touch)),
            WindowEvent::Focused(false) => Some(InputEvent::Blur),
            _ => None,
        }
    }

    fn key(&mut self, event: &KeyEvent) -> Option<InputEvent> {
        if event.repeat {
            return None;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        let pressed = event.state == ElementState::Pressed;
        if pressed && code == KeyCode::CapsLock {
            self.caps_lock = !self.caps_lock;
        }

        let key = format!("{code:?}");
        let caps_lock = self.caps_lock;
        Some(if pressed {
            InputEvent::KeyDown { key, caps_lock }
        } else {
            InputEvent::KeyUp { key, caps_lock }
        })
    }

    fn touch(&mut self, touch: &Touch) -> InputEvent {
        let point = TouchPoint::new(
            touch.id,
            touch.location.x as f32,
            touch.location.y as f32,
        );
        let slot = self.touches.iter().position(|t| t.id == touch.id);

        match touch.phase {
            TouchPhase::Started => {
                match slot {
                    Some(i) => self.touches[i] = point,
                    None => self.touches.push(point),
                }
                InputEvent::TouchStart {
                    touches: self.touches.clone(),
                }
            }
            TouchPhase::Moved => {
                if let Some(i) = slot {
                    self.touches[i] = point;
                }
                InputEvent::TouchMove {
                    touches: self.touches.clone(),
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if let Some(i) = slot {
                    let _ = self.touches.remove(i);
                }
                InputEvent::TouchEnd {
                    touches: self.touches.clone(),
                }
            }
        }
    }
}

/// `winit` scrolls up with positive deltas; the controller zooms out on
/// positive deltas, like a browser wheel event.
fn wheel(delta: MouseScrollDelta) -> InputEvent {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => InputEvent::Wheel {
            delta_y: -y,
            mode: WheelDeltaMode::Line,
        },
        MouseScrollDelta::PixelDelta(position) => InputEvent::Wheel {
            delta_y: -(position.y as f32),
            mode: WheelDeltaMode::Pixel,
        },
    }
}

/// A window is its own input surface: pointer coordinates are already
/// relative to its client area.
impl InputSurface for winit::window::Window {
    fn bounding_rect(&self) -> Option<ScreenRect> {
        let size = self.inner_size();
        Some(ScreenRect::new(
            0.0,
            0.0,
            size.width as f32,
            size.height as f32,
        ))
    }

    fn viewport(&self) -> (f32, f32) {
        let size = self.inner_size();
        (size.width as f32, size.height as f32)
    }
}
