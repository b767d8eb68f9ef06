use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Distance", inline)]
#[serde(default)]
/// Bounds on the camera-to-target distance.
///
/// Enforced after every update while zoom or pan is enabled. The bounds are
/// taken as given; an inverted range is a configuration error.
pub struct DistanceOptions {
    /// Closest the camera may get to the target.
    #[schemars(title = "Min Distance", range(min = 0.0))]
    pub min: f32,
    /// Farthest the camera may get from the target.
    #[schemars(skip)]
    pub max: f32,
}

impl Default for DistanceOptions {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: f32::INFINITY,
        }
    }
}
