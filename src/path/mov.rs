//! Text motion-capture samples ("MOV" exports).
//!
//! One sample per line, whitespace separated:
//!
//! ```text
//! x y z rx ry rz u v w
//! ```
//!
//! `x y z` is the camera translation, `rx ry rz` its orientation as XYZ
//! Euler angles in degrees, and `u v w` are reserved. Reserved fields may be
//! omitted on input and are written as zeros.

use std::fmt::Write as _;

use glam::{DQuat, DVec3, EulerRot};

use crate::error::VistaError;
use crate::state::{SceneSet, ViewState};

const EULER: EulerRot = EulerRot::XYZ;
const REQUIRED_FIELDS: usize = 6;

/// Parse motion-capture `text` into states that show `scenes`.
///
/// Blank lines are skipped. Any other line must start with six numbers.
pub fn import_mov(
    text: &str,
    scenes: &SceneSet,
) -> Result<Vec<ViewState>, VistaError> {
    let mut states = Vec::new();
    for (n, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields = parse_fields(line).map_err(|message| {
            VistaError::MovParse {
                line: n + 1,
                message,
            }
        })?;
        states.push(sample_to_state(&fields, scenes));
    }
    Ok(states)
}

/// Write `states` as motion-capture text, one line per state.
#[must_use]
pub fn export_mov(states: &[ViewState]) -> String {
    let mut out = String::new();
    for state in states {
        let p = state.world_position();
        let (rx, ry, rz) = state.orientation().to_euler(EULER);
        let _ = writeln!(
            out,
            "{:?} {:?} {:?} {:?} {:?} {:?} 0.0 0.0 0.0",
            p.x,
            p.y,
            p.z,
            rx.to_degrees(),
            ry.to_degrees(),
            rz.to_degrees()
        );
    }
    out
}

fn parse_fields(line: &str) -> Result<Vec<f64>, String> {
    let fields = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| format!("invalid number {token:?}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if fields.len() < REQUIRED_FIELDS {
        return Err(format!(
            "expected at least {REQUIRED_FIELDS} fields, found {}",
            fields.len()
        ));
    }
    Ok(fields)
}

fn sample_to_state(fields: &[f64], scenes: &SceneSet) -> ViewState {
    let translation = DVec3::new(fields[0], fields[1], fields[2]);
    let orientation = DQuat::from_euler(
        EULER,
        fields[3].to_radians(),
        fields[4].to_radians(),
        fields[5].to_radians(),
    );
    ViewState::new()
        .with_orientation(orientation)
        .with_position(translation)
        .with_distance(translation.length())
        .with_scenes(scenes.clone())
}
