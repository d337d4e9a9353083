//! Path and tour documents.
//!
//! A path document is a list of `[[step]]` tables; a tour document is a list
//! of `[[state]]` tables that additionally carry an `i` location slot. Both
//! use the short attribute names of [`StateRecord`].
//!
//! ```toml
//! [[step]]
//! name = "approach"
//! q0 = 0.0
//! q1 = 0.0
//! q2 = 0.0
//! q3 = 1.0
//! r = 2.5
//! f0 = "mars"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::VistaError;
use crate::state::{StateRecord, ViewState};

#[derive(Debug, Default, Serialize, Deserialize)]
struct PathDocument {
    #[serde(default, rename = "step", skip_serializing_if = "Vec::is_empty")]
    steps: Vec<StateRecord>,
}

/// Decoded tour document.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourDocument {
    /// Location states in document order.
    #[serde(default, rename = "state", skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<StateRecord>,
}

impl TourDocument {
    /// Decode a tour document.
    pub fn parse(text: &str) -> Result<Self, VistaError> {
        toml::from_str(text).map_err(|e| VistaError::DocumentParse(e.to_string()))
    }

    /// Encode the tour.
    pub fn write(&self) -> Result<String, VistaError> {
        toml::to_string(self)
            .map_err(|e| VistaError::DocumentSerialize(e.to_string()))
    }
}

/// Decode a path document into its states.
pub fn parse_path(text: &str) -> Result<Vec<ViewState>, VistaError> {
    let doc: PathDocument = toml::from_str(text)
        .map_err(|e| VistaError::DocumentParse(e.to_string()))?;
    Ok(doc.steps.iter().map(StateRecord::to_state).collect())
}

/// Encode `steps` as a path document.
pub fn write_path(steps: &[ViewState]) -> Result<String, VistaError> {
    let doc = PathDocument {
        steps: steps.iter().map(StateRecord::from).collect(),
    };
    toml::to_string(&doc)
        .map_err(|e| VistaError::DocumentSerialize(e.to_string()))
}
