//! Camera types the trackball drives.
//!
//! The controller only needs the small [`CameraRig`] capability; hosts with
//! their own camera implement it directly. [`Camera`] is a perspective
//! camera that implements it out of the box.

/// Perspective camera with view/projection matrix helpers.
pub mod core;
/// Capability traits: the driven camera and the tracked look-at target.
pub mod rig;

pub use self::core::Camera;
pub use rig::{CameraRig, TargetProvider};
