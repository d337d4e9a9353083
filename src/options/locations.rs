use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::location::DEFAULT_SLOTS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Locations", inline)]
#[serde(default)]
/// Saved-viewpoint slots.
pub struct LocationOptions {
    /// Number of location slots.
    #[schemars(title = "Slots", range(min = 1, max = 64))]
    pub slots: usize,
}

impl Default for LocationOptions {
    fn default() -> Self {
        Self {
            slots: DEFAULT_SLOTS,
        }
    }
}
