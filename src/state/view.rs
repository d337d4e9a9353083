use glam::{DQuat, DVec3};

use super::scene::SceneSet;

/// Smallest playback rate a state may carry.
pub const MIN_SPEED: f64 = 1e-3;

/// Smallest zoom multiplier a state may carry.
pub const MIN_ZOOM: f64 = 1e-6;

/// Unit-length tolerance under which vectors are kept bit-for-bit.
const UNIT_TOLERANCE: f64 = 1e-12;

/// Below this length a direction is treated as degenerate.
const DEGENERATE_LENGTH: f64 = 1e-12;

/// One camera and scene configuration at an instant.
///
/// A `ViewState` is a value: it is cloned freely and every mutator keeps it
/// valid. Orientation is a unit quaternion, position and light are unit
/// directions, distance is non-negative, fade lies in `[0, 1]`, and zoom and
/// speed stay strictly positive. Non-finite input is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    orientation: DQuat,
    position: DVec3,
    light: DVec3,
    distance: f64,
    zoom: f64,
    fade: f64,
    speed: f64,
    tension: f64,
    continuity: f64,
    bias: f64,
    name: Option<String>,
    scenes: SceneSet,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Identity view looking down the unit sphere's +Z axis from its centre.
    #[must_use]
    pub fn new() -> Self {
        Self {
            orientation: DQuat::IDENTITY,
            position: DVec3::Z,
            light: DVec3::Z,
            distance: 0.0,
            zoom: 1.0,
            fade: 0.0,
            speed: 1.0,
            tension: 0.0,
            continuity: 0.0,
            bias: 0.0,
            name: None,
            scenes: SceneSet::default(),
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// Camera attitude.
    #[must_use]
    pub fn orientation(&self) -> DQuat {
        self.orientation
    }

    /// Direction from the sphere centre to the camera.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Light direction.
    #[must_use]
    pub fn light(&self) -> DVec3 {
        self.light
    }

    /// Radius at which the camera sits.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Zoom multiplier.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Cross-fade weight between the foreground and background pairs.
    #[must_use]
    pub fn fade(&self) -> f64 {
        self.fade
    }

    /// Local playback rate multiplier.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Spline tension at this knot.
    #[must_use]
    pub fn tension(&self) -> f64 {
        self.tension
    }

    /// Spline continuity at this knot.
    #[must_use]
    pub fn continuity(&self) -> f64 {
        self.continuity
    }

    /// Spline bias at this knot.
    #[must_use]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Label used for name-addressed jumps.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Scenes this view shows.
    #[must_use]
    pub fn scenes(&self) -> &SceneSet {
        &self.scenes
    }

    /// Camera position in world space (`position * distance`).
    #[must_use]
    pub fn world_position(&self) -> DVec3 {
        self.position * self.distance
    }

    /// Latitude and longitude of the camera in degrees.
    #[must_use]
    pub fn lat_lon(&self) -> (f64, f64) {
        let p = self.position;
        let lon = p.x.atan2(p.z).to_degrees();
        let lat = p.y.clamp(-1.0, 1.0).asin().to_degrees();
        (lat, lon)
    }

    /// Whether the state references anything to draw.
    #[must_use]
    pub fn renderable(&self) -> bool {
        !self.scenes.is_empty()
    }

    // ── Mutators ────────────────────────────────────────────────────────

    /// Set the attitude. Degenerate quaternions reset to identity.
    pub fn set_orientation(&mut self, q: DQuat) {
        if !q.is_finite() {
            return;
        }
        let len_sq = q.length_squared();
        self.orientation = if len_sq < DEGENERATE_LENGTH {
            DQuat::IDENTITY
        } else if (len_sq - 1.0).abs() <= UNIT_TOLERANCE {
            q
        } else {
            q / len_sq.sqrt()
        };
    }

    /// Set the camera direction. Degenerate vectors reset to +Z.
    pub fn set_position(&mut self, p: DVec3) {
        if let Some(p) = unit_direction(p) {
            self.position = p;
        }
    }

    /// Set the light direction. Degenerate vectors reset to +Z.
    pub fn set_light(&mut self, l: DVec3) {
        if let Some(l) = unit_direction(l) {
            self.light = l;
        }
    }

    /// Set the radius, clamped to be non-negative.
    pub fn set_distance(&mut self, r: f64) {
        if r.is_finite() {
            self.distance = r.max(0.0);
        }
    }

    /// Set the zoom multiplier, floored at [`MIN_ZOOM`].
    pub fn set_zoom(&mut self, z: f64) {
        if z.is_finite() {
            self.zoom = z.max(MIN_ZOOM);
        }
    }

    /// Set the cross-fade weight, clamped to `[0, 1]`.
    pub fn set_fade(&mut self, k: f64) {
        if k.is_finite() {
            self.fade = k.clamp(0.0, 1.0);
        }
    }

    /// Set the playback rate, floored at [`MIN_SPEED`].
    pub fn set_speed(&mut self, s: f64) {
        if s.is_finite() {
            self.speed = s.max(MIN_SPEED);
        }
    }

    /// Set the spline tension.
    pub fn set_tension(&mut self, t: f64) {
        if t.is_finite() {
            self.tension = t;
        }
    }

    /// Set the spline continuity.
    pub fn set_continuity(&mut self, c: f64) {
        if c.is_finite() {
            self.continuity = c;
        }
    }

    /// Set the spline bias.
    pub fn set_bias(&mut self, b: f64) {
        if b.is_finite() {
            self.bias = b;
        }
    }

    /// Set or clear the label.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name.filter(|n| !n.is_empty());
    }

    /// Replace the referenced scenes.
    pub fn set_scenes(&mut self, scenes: SceneSet) {
        self.scenes = scenes;
    }

    // ── Builders ────────────────────────────────────────────────────────

    /// Builder form of [`set_orientation`](Self::set_orientation).
    #[must_use]
    pub fn with_orientation(mut self, q: DQuat) -> Self {
        self.set_orientation(q);
        self
    }

    /// Builder form of [`set_position`](Self::set_position).
    #[must_use]
    pub fn with_position(mut self, p: DVec3) -> Self {
        self.set_position(p);
        self
    }

    /// Builder form of [`set_light`](Self::set_light).
    #[must_use]
    pub fn with_light(mut self, l: DVec3) -> Self {
        self.set_light(l);
        self
    }

    /// Builder form of [`set_distance`](Self::set_distance).
    #[must_use]
    pub fn with_distance(mut self, r: f64) -> Self {
        self.set_distance(r);
        self
    }

    /// Builder form of [`set_zoom`](Self::set_zoom).
    #[must_use]
    pub fn with_zoom(mut self, z: f64) -> Self {
        self.set_zoom(z);
        self
    }

    /// Builder form of [`set_fade`](Self::set_fade).
    #[must_use]
    pub fn with_fade(mut self, k: f64) -> Self {
        self.set_fade(k);
        self
    }

    /// Builder form of [`set_speed`](Self::set_speed).
    #[must_use]
    pub fn with_speed(mut self, s: f64) -> Self {
        self.set_speed(s);
        self
    }

    /// Builder form of the three spline shape setters.
    #[must_use]
    pub fn with_shape(mut self, tension: f64, continuity: f64, bias: f64) -> Self {
        self.set_tension(tension);
        self.set_continuity(continuity);
        self.set_bias(bias);
        self
    }

    /// Builder form of [`set_name`](Self::set_name).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(Some(name.into()));
        self
    }

    /// Builder form of [`set_scenes`](Self::set_scenes).
    #[must_use]
    pub fn with_scenes(mut self, scenes: SceneSet) -> Self {
        self.set_scenes(scenes);
        self
    }
}

/// Normalize `v`, mapping degenerate input to +Z and rejecting non-finite
/// input. Vectors already of unit length are returned unchanged.
fn unit_direction(v: DVec3) -> Option<DVec3> {
    if !v.is_finite() {
        return None;
    }
    let len_sq = v.length_squared();
    Some(if len_sq < DEGENERATE_LENGTH {
        DVec3::Z
    } else if (len_sq - 1.0).abs() <= UNIT_TOLERANCE {
        v
    } else {
        v / len_sq.sqrt()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_loader_defaults() {
        let s = ViewState::default();
        assert_eq!(s.orientation(), DQuat::IDENTITY);
        assert_eq!(s.position(), DVec3::Z);
        assert_eq!(s.light(), DVec3::Z);
        assert_eq!(s.distance(), 0.0);
        assert_eq!(s.zoom(), 1.0);
        assert_eq!(s.fade(), 0.0);
        assert_eq!(s.speed(), 1.0);
        assert!(s.name().is_none());
        assert!(!s.renderable());
    }

    #[test]
    fn orientation_is_normalized() {
        let s = ViewState::new()
            .with_orientation(DQuat::from_xyzw(0.0, 0.0, 2.0, 0.0));
        assert!((s.orientation().length() - 1.0).abs() < 1e-12);
        assert_eq!(s.orientation().z, 1.0);
    }

    #[test]
    fn degenerate_vectors_fall_back() {
        let s = ViewState::new()
            .with_orientation(DQuat::from_xyzw(0.0, 0.0, 0.0, 0.0))
            .with_position(DVec3::ZERO);
        assert_eq!(s.orientation(), DQuat::IDENTITY);
        assert_eq!(s.position(), DVec3::Z);
    }

    #[test]
    fn scalars_are_clamped() {
        let s = ViewState::new()
            .with_distance(-4.0)
            .with_fade(1.5)
            .with_speed(-1.0)
            .with_zoom(0.0);
        assert_eq!(s.distance(), 0.0);
        assert_eq!(s.fade(), 1.0);
        assert_eq!(s.speed(), MIN_SPEED);
        assert_eq!(s.zoom(), MIN_ZOOM);
    }

    #[test]
    fn non_finite_input_is_ignored() {
        let mut s = ViewState::new().with_distance(3.0);
        s.set_distance(f64::NAN);
        s.set_speed(f64::INFINITY);
        s.set_position(DVec3::new(f64::NAN, 0.0, 0.0));
        assert_eq!(s.distance(), 3.0);
        assert_eq!(s.speed(), 1.0);
        assert_eq!(s.position(), DVec3::Z);
    }

    #[test]
    fn unit_values_are_kept_exactly() {
        let q = DQuat::from_rotation_y(0.3);
        let s = ViewState::new().with_orientation(q);
        let again = s.clone().with_orientation(s.orientation());
        assert_eq!(s.orientation(), again.orientation());
    }

    #[test]
    fn empty_name_clears_label() {
        let mut s = ViewState::new().with_name("home");
        assert_eq!(s.name(), Some("home"));
        s.set_name(Some(String::new()));
        assert!(s.name().is_none());
    }

    #[test]
    fn lat_lon_of_axes() {
        let north = ViewState::new().with_position(DVec3::Y);
        let (lat, _) = north.lat_lon();
        assert!((lat - 90.0).abs() < 1e-9);

        let east = ViewState::new().with_position(DVec3::X);
        let (lat, lon) = east.lat_lon();
        assert!(lat.abs() < 1e-9);
        assert!((lon - 90.0).abs() < 1e-9);
    }

    #[test]
    fn world_position_scales_by_distance() {
        let s = ViewState::new()
            .with_position(DVec3::new(0.0, 3.0, 4.0))
            .with_distance(10.0);
        assert!((s.world_position() - DVec3::new(0.0, 6.0, 8.0)).length() < 1e-12);
    }
}
