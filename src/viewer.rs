//! Standalone demo window backed by winit.
//!
//! Opens an empty window, routes its input through
//! [`WinitInput`](crate::input::platform::WinitInput) into a
//! [`TrackballControls`] driving a default [`Camera`], and logs the camera
//! pose whenever it moves. The `focus` key resets the view.
//!
//! ```no_run
//! # use trackball::viewer::Viewer;
//! Viewer::builder()
//!     .with_title("Trackball")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::camera::Camera;
use crate::controls::{ControlEvent, TrackballControls};
use crate::error::TrackballError;
use crate::input::platform::WinitInput;
use crate::input::KeySlot;
use crate::options::TrackballOptions;
use crate::util::frame_clock::FrameClock;

/// Frame rate the controller is updated at.
const TARGET_FPS: u32 = 60;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<TrackballOptions>,
    title: String,
}

impl ViewerBuilder {
    /// Builder with the title "Trackball" and default options.
    fn new() -> Self {
        Self {
            options: None,
            title: "Trackball".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: TrackballOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window whose camera is driven by trackball controls.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: TrackballOptions,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`TrackballError::Viewer`] if the event loop cannot be
    /// created or exits with an error.
    pub fn run(self) -> Result<(), TrackballError> {
        let event_loop = EventLoop::new()
            .map_err(|e| TrackballError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            controls: None,
            input: WinitInput::new(),
            clock: FrameClock::new(TARGET_FPS),
            moved: Rc::new(Cell::new(false)),
            options: Some(self.options),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| TrackballError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

struct ViewerApp {
    window: Option<Arc<Window>>,
    controls: Option<TrackballControls>,
    input: WinitInput,
    clock: FrameClock,
    /// Set by the change listener, drained after each frame.
    moved: Rc<Cell<bool>>,
    options: Option<TrackballOptions>,
    title: String,
}

impl ViewerApp {
    /// Run one controller frame when the clock allows it.
    fn frame(&mut self) {
        let Some(controls) = &mut self.controls else {
            return;
        };
        if !self.clock.is_due() {
            return;
        }
        controls.update();
        let _ = self.clock.tick();

        if self.moved.replace(false) {
            let camera = controls.camera();
            log::debug!(
                "camera eye {:?} up {:?} fov {:.2}",
                camera.eye,
                camera.up,
                camera.fovy
            );
        }
        if self.clock.frames() % (u64::from(TARGET_FPS) * 10) == 0 {
            log::info!("{:.1} fps", self.clock.fps());
        }
    }

    /// Whether `event` is a press of the key bound to the focus slot.
    fn is_focus_press(&self, event: &WindowEvent) -> bool {
        let WindowEvent::KeyboardInput { event, .. } = event else {
            return false;
        };
        let PhysicalKey::Code(code) = event.physical_key else {
            return false;
        };
        event.state == ElementState::Pressed
            && !event.repeat
            && self.controls.as_ref().is_some_and(|controls| {
                controls
                    .options
                    .keybindings
                    .matches(KeySlot::Focus, &format!("{code:?}"))
            })
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1024, 768));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let mut camera = Camera::default();
        let size = window.inner_size();
        camera.resize(size.width, size.height);

        let options = self.options.take().unwrap_or_default();
        let mut controls =
            TrackballControls::with_surface(camera, window.as_ref(), options);
        let moved = Rc::clone(&self.moved);
        let _ = controls.add_listener(move |event| {
            if event == ControlEvent::Change {
                moved.set(true);
            }
        });

        log::info!("window {}x{} ready", size.width, size.height);
        window.request_redraw();
        self.window = Some(window);
        self.controls = Some(controls);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and controls must be initialised.
        let (Some(window), Some(_)) = (self.window.clone(), &self.controls)
        else {
            return;
        };

        match event {
            WindowEvent::Resized(size) => {
                if let Some(controls) = &mut self.controls {
                    controls.handle_resize(window.as_ref());
                    controls.camera_mut().resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                self.frame();
                window.request_redraw();
            }

            _ => {
                let focus = self.is_focus_press(&event);
                let Some(input) = self.input.translate(&event) else {
                    return;
                };
                if let Some(controls) = &mut self.controls {
                    if focus {
                        controls.reset();
                    }
                    let _ = controls.handle_event(input);
                }
            }
        }
    }
}
