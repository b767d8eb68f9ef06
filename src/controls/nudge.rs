//! Held-key velocity nudges.
//!
//! Every frame a held direction key adds a small fixed step to the same
//! anchors the pointer writes, so keyboard and pointer motion go through
//! the same integrators (and the same damping).

use crate::input::{
    DragAnchors, HeldKeys, Modifier, RotateDirection, SpinDirection,
    ZoomDirection,
};
use crate::options::TrackballOptions;

/// Circle-space step per frame for a held orbit key.
const ROTATE_STEP: f32 = 0.01;
/// Track step per frame for held zoom, fov and spin keys.
const TRACK_STEP: f32 = 0.001;

pub(crate) fn rotate(
    anchors: &mut DragAnchors,
    keys: &HeldKeys,
    options: &TrackballOptions,
) {
    if keys.rotate.is_empty() {
        return;
    }
    let mut factor = options.speeds.rotate;
    if keys.has(Modifier::Shift) {
        factor /= 8.0;
    }
    if keys.has(Modifier::CapsLock) {
        factor /= 16.0;
    }
    let step = ROTATE_STEP * factor;

    for direction in keys.rotate.iter() {
        match direction {
            RotateDirection::Up => anchors.move_curr.y -= step,
            RotateDirection::Down => anchors.move_curr.y += step,
            RotateDirection::Left => anchors.move_curr.x += step,
            RotateDirection::Right => anchors.move_curr.x -= step,
        }
    }
}

/// Shift redirects held zoom keys to the fov track.
pub(crate) fn zoom(
    anchors: &mut DragAnchors,
    keys: &HeldKeys,
    options: &TrackballOptions,
) {
    if keys.zoom.is_empty() {
        return;
    }
    let fov_track = keys.has(Modifier::Shift);
    if fov_track && !options.gestures.fov {
        return;
    }

    let mut factor = if fov_track {
        options.speeds.fov
    } else {
        options.speeds.zoom
    };
    if keys.has(Modifier::CapsLock) {
        factor /= if fov_track { 10.0 } else { 16.0 };
    }
    if keys.has(Modifier::Alt) {
        factor /= 4.0;
    }
    if keys.has(Modifier::Ctrl) {
        factor /= 4.0;
    }
    let step = TRACK_STEP * factor;

    for direction in keys.zoom.iter() {
        match (direction, fov_track) {
            (ZoomDirection::In, true) => anchors.fov_end -= step,
            (ZoomDirection::Out, true) => anchors.fov_end += step,
            (ZoomDirection::In, false) => anchors.zoom_end += step,
            (ZoomDirection::Out, false) => anchors.zoom_end -= step,
        }
    }
}

pub(crate) fn spin(
    anchors: &mut DragAnchors,
    keys: &HeldKeys,
    options: &TrackballOptions,
) {
    if keys.spin.is_empty() {
        return;
    }
    let mut factor = options.speeds.spin;
    if keys.has(Modifier::Shift) {
        factor /= 8.0;
    }
    if keys.has(Modifier::CapsLock) {
        factor /= 16.0;
    }
    let step = TRACK_STEP * factor;

    for direction in keys.spin.iter() {
        match direction {
            SpinDirection::Left => anchors.spin_end -= step,
            SpinDirection::Right => anchors.spin_end += step,
        }
    }
}
