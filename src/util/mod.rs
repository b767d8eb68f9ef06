//! Shared runtime helpers.
//!
//! Frame pacing for hosts that drive the controller from an event loop.

pub mod frame_clock;
