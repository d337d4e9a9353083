//! Navigation strategies: how a viewer gets from here to a target.
//!
//! The controller only ever talks to the [`Navigator`] trait. Viewers that
//! want something richer than a teleport supply their own implementation.

use crate::options::PlaybackOptions;
use crate::state::ViewState;

/// Defines how moves, fades and navigation rates behave for one kind of
/// viewer.
pub trait Navigator: Send + Sync {
    /// States to play from `here` to `there`.
    ///
    /// `None` teleports. A plan is flown like a path, paced by the speeds
    /// of its states, and always lands on `there` as given.
    fn plan_move(
        &self,
        _here: &ViewState,
        _there: &ViewState,
    ) -> Option<Vec<ViewState>> {
        None
    }

    /// View after fading from `here` to the content of `there`.
    ///
    /// Default: keep the camera, take the scenes.
    fn fade(&self, here: &ViewState, there: &ViewState) -> ViewState {
        let mut out = here.clone();
        out.set_scenes(there.scenes().clone());
        out
    }

    /// Rate at which user input moves the camera from `here`.
    fn speed(&self, _here: &ViewState) -> f64 {
        1.0
    }

    /// Scale applied to the scene when viewed from `here`.
    fn scale(&self, _here: &ViewState) -> f64 {
        1.0
    }

    /// Optional name for debugging/logging.
    fn name(&self) -> &'static str {
        "unnamed"
    }
}

/// Jump straight to the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct Teleport;

impl Navigator for Teleport {
    fn name(&self) -> &'static str {
        "teleport"
    }
}

/// Fly a two-knot spline from here to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glide {
    /// Ticks the move takes at a playback step of 1.
    pub ticks: u32,
}

impl Default for Glide {
    fn default() -> Self {
        Self::from_options(&PlaybackOptions::default())
    }
}

impl Glide {
    /// Glide lasting `ticks` ticks (at least one).
    #[must_use]
    pub fn new(ticks: u32) -> Self {
        Self {
            ticks: ticks.max(1),
        }
    }

    /// Glide paced by the playback options.
    #[must_use]
    pub fn from_options(options: &PlaybackOptions) -> Self {
        Self::new(options.glide_ticks)
    }
}

impl Navigator for Glide {
    fn plan_move(
        &self,
        here: &ViewState,
        there: &ViewState,
    ) -> Option<Vec<ViewState>> {
        let speed = 1.0 / f64::from(self.ticks);
        Some(vec![
            here.clone().with_speed(speed),
            there.clone().with_speed(speed),
        ])
    }

    fn name(&self) -> &'static str {
        "glide"
    }
}

/// Ground radius below which a scene is treated as a panorama.
pub const PANORAMA_RADIUS: f64 = 100.0;

/// Altitude-aware navigation for planetary scenes.
///
/// Moves teleport. Input speed grows with height above ground and the scene
/// is scaled down when the camera is far above it. Small spheres are
/// panoramas and are never scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Altitude {
    /// Radius of the ground under the camera.
    pub ground: f64,
    /// Smallest ground radius anywhere in the scene.
    pub minimum_ground: f64,
    /// Host camera distance used to normalise the scale.
    pub view_distance: f64,
    /// Lower bound of the navigation speed.
    pub speed_min: f64,
    /// Upper bound of the navigation speed.
    pub speed_max: f64,
}

impl Default for Altitude {
    fn default() -> Self {
        Self {
            ground: 1.0,
            minimum_ground: 1.0,
            view_distance: 1.0,
            speed_min: 0.0,
            speed_max: 0.2,
        }
    }
}

impl Altitude {
    /// Whether the scene is a panorama rather than a planet.
    #[must_use]
    pub fn pan_mode(&self) -> bool {
        self.minimum_ground < PANORAMA_RADIUS
    }

    fn height(&self, here: &ViewState) -> f64 {
        here.distance() - self.ground
    }
}

impl Navigator for Altitude {
    fn speed(&self, here: &ViewState) -> f64 {
        if !self.ground.is_finite() || self.ground <= 0.0 {
            return self.speed_min;
        }
        let k = self.height(here) / self.ground;
        if k > self.speed_max {
            self.speed_max
        } else if k < self.speed_min {
            self.speed_min
        } else {
            k
        }
    }

    fn scale(&self, here: &ViewState) -> f64 {
        let height = self.height(here);
        if self.pan_mode() || height.is_nan() || height <= 0.0 {
            return 1.0;
        }
        (self.view_distance / height).min(1.0)
    }

    fn name(&self) -> &'static str {
        "altitude"
    }
}
