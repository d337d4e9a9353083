use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Zoom", inline)]
#[serde(default)]
/// Bounds and rates of the log2 zoom exponent.
pub struct ZoomOptions {
    /// Smallest exponent (furthest zoomed in).
    #[schemars(title = "Minimum", range(min = -8.0, max = 0.0), extend("step" = 0.5))]
    pub min: f64,
    /// Largest exponent (furthest zoomed out).
    #[schemars(title = "Maximum", range(min = 0.0, max = 8.0), extend("step" = 0.5))]
    pub max: f64,
    /// Exponent change per wheel notch.
    #[schemars(title = "Wheel Step", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub wheel_step: f64,
    /// Exponent change per second while a zoom button is held.
    #[schemars(title = "Button Rate", range(min = 0.1, max = 4.0), extend("step" = 0.1))]
    pub button_rate: f64,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            min: -3.0,
            max: 2.0,
            wheel_step: 0.1,
            button_rate: 1.0,
        }
    }
}

impl ZoomOptions {
    /// Clamp `exponent` into `[min, max]`. A reversed range collapses to
    /// `min`.
    #[must_use]
    pub fn clamp(&self, exponent: f64) -> f64 {
        exponent.min(self.max).max(self.min)
    }
}
