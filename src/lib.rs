// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Trackball camera controls.
//!
//! Maps pointer drags, wheel steps, multi-touch gestures and held keys onto
//! incremental orbit, dolly, field-of-view, spin and pan motions of a camera
//! circling a target point. Motion is integrated once per frame, either
//! snapping straight to the requested pose (`static_moving`) or easing
//! toward it with exponential damping so drags carry inertia.
//!
//! # Key entry points
//!
//! - [`controls::TrackballControls`] - the controller: feed it
//!   [`input::InputEvent`]s and call `update()` once per frame
//! - [`camera::CameraRig`] - the capability a host camera must provide;
//!   [`camera::Camera`] is a ready-made implementation
//! - [`options::TrackballOptions`] - speeds, damping, distance limits and
//!   key bindings, loadable from TOML presets
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use trackball::camera::Camera;
//! use trackball::controls::{ScreenRect, TrackballControls};
//! use trackball::input::{InputEvent, PointerButton};
//! use trackball::options::TrackballOptions;
//!
//! let camera = Camera::looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
//! let screen = ScreenRect::new(0.0, 0.0, 800.0, 600.0);
//! let mut controls =
//!     TrackballControls::new(camera, screen, TrackballOptions::default());
//!
//! let _ = controls.handle_event(InputEvent::PointerDown {
//!     x: 400.0,
//!     y: 300.0,
//!     button: PointerButton::Primary,
//! });
//! let _ =
//!     controls.handle_event(InputEvent::PointerMove { x: 440.0, y: 300.0 });
//! controls.update();
//! ```

pub mod camera;
pub mod controls;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
