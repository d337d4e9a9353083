use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::playback::{Target, ViewCommand};

/// Maps physical key strings to [`ViewCommand`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"F7"`, `"Digit3"`, `"BracketRight"`, etc.
///
/// Only discrete commands make sense as key bindings. Zoom rates and
/// wheel deltas come from the input processor, not key lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: FxHashMap<String, KeyCommandTag>,
}

/// Serializable tag for the key-bindable subset of [`ViewCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Drop cached content.
    FlushCache,
    /// Toggle recording.
    ToggleRecord,
    /// Toggle playback (shift for movie mode).
    TogglePlay,
    /// Run the head forward (shift for movie mode).
    FastForward,
    /// Run the head backward (shift for movie mode).
    Rewind,
    /// Stop the head.
    Stop,
    /// Reset the zoom exponent.
    ZoomHome,
    /// Log the current view as a path step.
    ReportState,
    /// Log the current latitude/longitude.
    ReportLocation,
    /// Move to a location slot.
    Location(usize),
    /// Insert a step before the cursor.
    InsertStep,
    /// Insert a step after the cursor.
    AppendStep,
    /// Overwrite the step under the cursor.
    ReplaceStep,
    /// Delete the step under the cursor.
    DeleteStep,
    /// Select the next step.
    NextStep,
    /// Select the previous step.
    PrevStep,
    /// Cursor and head to the first step.
    HomeStep,
    /// Snap the head to the cursor.
    JumpToStep,
    /// Speed up the step under the cursor.
    Faster,
    /// Slow down the step under the cursor.
    Slower,
    /// Raise tension.
    IncTension,
    /// Lower tension.
    DecTension,
    /// Raise bias.
    IncBias,
    /// Lower bias.
    DecBias,
    /// Raise continuity.
    IncContinuity,
    /// Lower continuity.
    DecContinuity,
}

impl KeyCommandTag {
    /// Convert to the corresponding [`ViewCommand`]. `shift` selects the
    /// movie variants of the playback commands.
    #[must_use]
    pub fn to_command(self, shift: bool) -> ViewCommand {
        match self {
            Self::FlushCache => ViewCommand::FlushCache,
            Self::ToggleRecord => ViewCommand::ToggleRecord,
            Self::TogglePlay => ViewCommand::TogglePlay { movie: shift },
            Self::FastForward => ViewCommand::FastForward { movie: shift },
            Self::Rewind => ViewCommand::Rewind { movie: shift },
            Self::Stop => ViewCommand::Stop,
            Self::ZoomHome => ViewCommand::ZoomHome,
            Self::ReportState => ViewCommand::ReportState,
            Self::ReportLocation => ViewCommand::ReportLocation,
            Self::Location(slot) => ViewCommand::MoveTo(Target::Location(slot)),
            Self::InsertStep => ViewCommand::InsertStep,
            Self::AppendStep => ViewCommand::AppendStep,
            Self::ReplaceStep => ViewCommand::ReplaceStep,
            Self::DeleteStep => ViewCommand::DeleteStep,
            Self::NextStep => ViewCommand::NextStep,
            Self::PrevStep => ViewCommand::PrevStep,
            Self::HomeStep => ViewCommand::HomeStep,
            Self::JumpToStep => ViewCommand::JumpToStep,
            Self::Faster => ViewCommand::Faster,
            Self::Slower => ViewCommand::Slower,
            Self::IncTension => ViewCommand::IncTension,
            Self::DecTension => ViewCommand::DecTension,
            Self::IncBias => ViewCommand::IncBias,
            Self::DecBias => ViewCommand::DecBias,
            Self::IncContinuity => ViewCommand::IncContinuity,
            Self::DecContinuity => ViewCommand::DecContinuity,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings: FxHashMap<String, KeyCommandTag> = [
            ("F5", KeyCommandTag::FlushCache),
            ("F7", KeyCommandTag::ToggleRecord),
            ("F8", KeyCommandTag::TogglePlay),
            ("Home", KeyCommandTag::ZoomHome),
            ("PageUp", KeyCommandTag::ReportState),
            ("PageDown", KeyCommandTag::ReportLocation),
            ("Insert", KeyCommandTag::InsertStep),
            ("Enter", KeyCommandTag::AppendStep),
            ("Backspace", KeyCommandTag::ReplaceStep),
            ("Delete", KeyCommandTag::DeleteStep),
            ("Period", KeyCommandTag::NextStep),
            ("Comma", KeyCommandTag::PrevStep),
            ("KeyH", KeyCommandTag::HomeStep),
            ("KeyJ", KeyCommandTag::JumpToStep),
            ("BracketRight", KeyCommandTag::FastForward),
            ("BracketLeft", KeyCommandTag::Rewind),
            ("Space", KeyCommandTag::Stop),
            ("Equal", KeyCommandTag::Faster),
            ("Minus", KeyCommandTag::Slower),
        ]
        .into_iter()
        .map(|(key, tag)| (key.to_owned(), tag))
        .collect();

        for slot in 0..8 {
            let _ = bindings
                .insert(format!("Digit{slot}"), KeyCommandTag::Location(slot));
        }
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str, shift: bool) -> Option<ViewCommand> {
        self.bindings.get(key).map(|tag| tag.to_command(shift))
    }

    /// Tag bound to `key`.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<KeyCommandTag> {
        self.bindings.get(key).copied()
    }

    /// Bind `key` to `tag`, returning the tag it replaces.
    pub fn bind(
        &mut self,
        key: impl Into<String>,
        tag: KeyCommandTag,
    ) -> Option<KeyCommandTag> {
        self.bindings.insert(key.into(), tag)
    }

    /// Remove the binding for `key`.
    pub fn unbind(&mut self, key: &str) -> Option<KeyCommandTag> {
        self.bindings.remove(key)
    }
}
