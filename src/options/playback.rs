use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Playback", inline)]
#[serde(default)]
/// Path playback pacing.
pub struct PlaybackOptions {
    /// Knots the playback head advances per tick, before per-knot speed.
    #[schemars(title = "Step", range(min = 0.01, max = 4.0), extend("step" = 0.01))]
    pub step: f64,
    /// Ticks a gliding move takes to reach its destination.
    #[schemars(title = "Glide Ticks", range(min = 1, max = 600))]
    pub glide_ticks: u32,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            step: 1.0,
            glide_ticks: 60,
        }
    }
}
