use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[schemars(title = "Gestures", inline)]
#[serde(default)]
/// Which gestures the controller reacts to.
pub struct GestureOptions {
    /// Orbit around the target (drag, touch, held keys).
    #[schemars(title = "Rotate")]
    pub rotate: bool,
    /// Dolly toward/away from the target (drag, wheel, pinch, held keys).
    #[schemars(title = "Zoom")]
    pub zoom: bool,
    /// Roll the up vector around the view axis (held keys).
    #[schemars(title = "Spin")]
    pub spin: bool,
    /// Change the field of view (shift + wheel, shift + zoom keys).
    #[schemars(title = "Field of View")]
    pub fov: bool,
    /// Translate camera and target together (drag, two-finger touch).
    #[schemars(title = "Pan")]
    pub pan: bool,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            rotate: true,
            zoom: true,
            spin: true,
            fov: true,
            pan: true,
        }
    }
}
