use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Damping", inline)]
#[serde(default)]
/// Inertia applied to every gesture.
pub struct DampingOptions {
    /// Apply each step in full on the frame it arrives, with no carry-over.
    #[schemars(title = "Static Moving")]
    pub static_moving: bool,
    /// Fraction of the remaining motion consumed per frame when not static
    /// moving. Also sets how fast a released orbit spins down.
    #[schemars(
        title = "Damping Factor",
        range(min = 0.01, max = 0.99),
        extend("step" = 0.01)
    )]
    pub dynamic_damping_factor: f32,
}

impl Default for DampingOptions {
    fn default() -> Self {
        Self {
            static_moving: false,
            dynamic_damping_factor: 0.15,
        }
    }
}

impl DampingOptions {
    /// Move `start` toward `end`: all the way when static moving, otherwise
    /// by the damping factor.
    #[must_use]
    pub fn advance(&self, start: f32, end: f32) -> f32 {
        if self.static_moving {
            end
        } else {
            start + (end - start) * self.dynamic_damping_factor
        }
    }

    /// [`advance`](Self::advance) for 2D anchors.
    #[must_use]
    pub fn advance_vec(&self, start: Vec2, end: Vec2) -> Vec2 {
        if self.static_moving {
            end
        } else {
            start + (end - start) * self.dynamic_damping_factor
        }
    }

    /// Per-frame multiplier applied to a released orbit's residual angle.
    #[must_use]
    pub fn angular_decay(&self) -> f32 {
        (1.0 - self.dynamic_damping_factor).sqrt()
    }
}
