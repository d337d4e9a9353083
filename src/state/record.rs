use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use super::scene::{SceneRef, SceneSet};
use super::view::ViewState;

/// A [`ViewState`] as it appears in path and tour documents.
///
/// Attribute names are the short forms used by existing path files. Every
/// attribute is optional on input and falls back to the `ViewState` default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateRecord {
    /// Location slot the state belongs to (tour documents only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i: Option<i64>,
    /// Label used for name-addressed jumps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Orientation quaternion x.
    pub q0: f64,
    /// Orientation quaternion y.
    pub q1: f64,
    /// Orientation quaternion z.
    pub q2: f64,
    /// Orientation quaternion w.
    pub q3: f64,
    /// Position direction x.
    pub p0: f64,
    /// Position direction y.
    pub p1: f64,
    /// Position direction z.
    pub p2: f64,
    /// Light direction x.
    pub l0: f64,
    /// Light direction y.
    pub l1: f64,
    /// Light direction z.
    pub l2: f64,
    /// Distance.
    pub r: f64,
    /// Zoom multiplier.
    pub z: f64,
    /// Cross-fade weight.
    pub k: f64,
    /// Playback speed.
    pub s: f64,
    /// Spline tension.
    pub t: f64,
    /// Spline continuity.
    pub c: f64,
    /// Spline bias.
    pub b: f64,
    /// First foreground scene name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f0: Option<String>,
    /// Second foreground scene name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f1: Option<String>,
    /// First background scene name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b0: Option<String>,
    /// Second background scene name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b1: Option<String>,
}

impl Default for StateRecord {
    fn default() -> Self {
        Self::from(&ViewState::default())
    }
}

impl From<&ViewState> for StateRecord {
    fn from(state: &ViewState) -> Self {
        let q = state.orientation();
        let p = state.position();
        let l = state.light();
        let scenes = state.scenes();
        let scene_name =
            |scene: &Option<SceneRef>| scene.as_ref().map(|s| s.name().to_owned());

        Self {
            i: None,
            name: state.name().map(str::to_owned),
            q0: q.x,
            q1: q.y,
            q2: q.z,
            q3: q.w,
            p0: p.x,
            p1: p.y,
            p2: p.z,
            l0: l.x,
            l1: l.y,
            l2: l.z,
            r: state.distance(),
            z: state.zoom(),
            k: state.fade(),
            s: state.speed(),
            t: state.tension(),
            c: state.continuity(),
            b: state.bias(),
            f0: scene_name(&scenes.foreground0),
            f1: scene_name(&scenes.foreground1),
            b0: scene_name(&scenes.background0),
            b1: scene_name(&scenes.background1),
        }
    }
}

impl StateRecord {
    /// Record for `state` tagged with a location slot.
    #[must_use]
    pub fn for_location(state: &ViewState, slot: usize) -> Self {
        Self {
            i: i64::try_from(slot).ok(),
            ..Self::from(state)
        }
    }

    /// Location slot, if the record names a valid one.
    #[must_use]
    pub fn slot(&self) -> Option<usize> {
        self.i.and_then(|i| usize::try_from(i).ok())
    }

    /// Build the state this record describes. Out-of-range attributes are
    /// clamped by the `ViewState` mutators.
    #[must_use]
    pub fn to_state(&self) -> ViewState {
        let scene = |name: &Option<String>| {
            name.as_deref()
                .filter(|n| !n.is_empty())
                .map(SceneRef::from)
        };
        let scenes = SceneSet {
            foreground0: scene(&self.f0),
            foreground1: scene(&self.f1),
            background0: scene(&self.b0),
            background1: scene(&self.b1),
        };

        let mut state = ViewState::new()
            .with_orientation(DQuat::from_xyzw(self.q0, self.q1, self.q2, self.q3))
            .with_position(DVec3::new(self.p0, self.p1, self.p2))
            .with_light(DVec3::new(self.l0, self.l1, self.l2))
            .with_distance(self.r)
            .with_zoom(self.z)
            .with_fade(self.k)
            .with_speed(self.s)
            .with_shape(self.t, self.c, self.b)
            .with_scenes(scenes);
        state.set_name(self.name.clone());
        state
    }
}
