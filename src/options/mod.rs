//! Centralized viewer options with TOML file support.
//!
//! Zoom bounds, playback pacing, cache tuning, location slots and key
//! bindings are consolidated here and handed to the controller at
//! construction. Nothing is read from global state.

mod cache;
mod keybindings;
mod locations;
mod playback;
mod zoom;

use std::path::Path;

pub use cache::CacheOptions;
pub use keybindings::{KeyBindings, KeyCommandTag};
pub use locations::LocationOptions;
pub use playback::PlaybackOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use zoom::ZoomOptions;

use crate::error::VistaError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[zoom]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Zoom exponent bounds and rates.
    pub zoom: ZoomOptions,
    /// Playback pacing.
    pub playback: PlaybackOptions,
    /// Host cache tuning.
    pub cache: CacheOptions,
    /// Location slots.
    pub locations: LocationOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VistaError> {
        let content = std::fs::read_to_string(path).map_err(VistaError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VistaError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VistaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VistaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VistaError::Io)?;
        }
        std::fs::write(path, content).map_err(VistaError::Io)
    }
}
