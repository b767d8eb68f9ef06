use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Speeds", inline)]
#[serde(default)]
/// Per-gesture sensitivity multipliers.
pub struct SpeedOptions {
    /// Orbit sensitivity. Scaled by the current fov, so narrow views turn
    /// slower.
    #[schemars(
        title = "Rotate Speed",
        range(min = 0.1, max = 5.0),
        extend("step" = 0.05)
    )]
    pub rotate: f32,
    /// Dolly sensitivity.
    #[schemars(
        title = "Zoom Speed",
        range(min = 0.1, max = 5.0),
        extend("step" = 0.05)
    )]
    pub zoom: f32,
    /// Roll sensitivity.
    #[schemars(
        title = "Spin Speed",
        range(min = 0.1, max = 5.0),
        extend("step" = 0.05)
    )]
    pub spin: f32,
    /// Field-of-view sensitivity.
    #[schemars(
        title = "Fov Speed",
        range(min = 0.1, max = 5.0),
        extend("step" = 0.05)
    )]
    pub fov: f32,
    /// Pan sensitivity, relative to the orbit radius.
    #[schemars(
        title = "Pan Speed",
        range(min = 0.05, max = 2.0),
        extend("step" = 0.05)
    )]
    pub pan: f32,
}

impl Default for SpeedOptions {
    fn default() -> Self {
        Self {
            rotate: 0.9,
            zoom: 1.2,
            spin: 1.2,
            fov: 1.2,
            pan: 0.3,
        }
    }
}
