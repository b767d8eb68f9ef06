use serde::{Deserialize, Serialize};

/// Named slots of the remappable key table.
///
/// Serde serializes as `kebab-case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// rotate-up = "KeyW"
/// lock-pan = "KeyP"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum KeySlot {
    /// While held, force the rotate drag mode.
    LockRotate,
    /// While held, force the zoom drag mode.
    LockZoom,
    /// While held, force the pan drag mode.
    LockPan,
    /// Orbit upward while held.
    RotateUp,
    /// Orbit downward while held.
    RotateDown,
    /// Orbit left while held.
    RotateLeft,
    /// Orbit right while held.
    RotateRight,
    /// Dolly in (or narrow the fov with shift) while held.
    ZoomIn,
    /// Dolly out (or widen the fov with shift) while held.
    ZoomOut,
    /// Roll counter-clockwise while held.
    SpinLeft,
    /// Roll clockwise while held.
    SpinRight,
    /// Alt modifier.
    ModifierAlt,
    /// Ctrl modifier.
    ModifierCtrl,
    /// Shift modifier.
    ModifierShift,
    /// Reserved for the host (e.g. focus the selection); unused here.
    Focus,
}

impl KeySlot {
    /// Every slot, in table order.
    pub const ALL: [Self; 15] = [
        Self::LockRotate,
        Self::LockZoom,
        Self::LockPan,
        Self::RotateUp,
        Self::RotateDown,
        Self::RotateLeft,
        Self::RotateRight,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::SpinLeft,
        Self::SpinRight,
        Self::ModifierAlt,
        Self::ModifierCtrl,
        Self::ModifierShift,
        Self::Focus,
    ];
}
