//! Kochanek-Bartels (tension/continuity/bias) blending.
//!
//! Pure numeric code with no knowledge of paths or playback. States are
//! lowered to [`ControlPoint`]s, blended component-wise with a cubic Hermite
//! basis whose tangents come from the TCB parameters of the two central
//! knots, then raised back to a valid [`ViewState`].

use std::ops::{Add, Mul, Sub};

use glam::{DQuat, DVec3, DVec4};

use crate::state::ViewState;

/// Tension, continuity and bias of one knot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Shape {
    tension: f64,
    continuity: f64,
    bias: f64,
}

impl Shape {
    fn lerp(self, other: Self, k: f64) -> Self {
        Self {
            tension: lerp(self.tension, other.tension, k),
            continuity: lerp(self.continuity, other.continuity, k),
            bias: lerp(self.bias, other.bias, k),
        }
    }
}

/// Unconstrained numeric form of a view state.
///
/// Extrapolated boundary points live only in this form, so they may carry
/// negative distances or non-unit directions without violating any
/// `ViewState` invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ControlPoint {
    orientation: DVec4,
    position: DVec3,
    light: DVec3,
    distance: f64,
    zoom: f64,
    fade: f64,
    speed: f64,
    shape: Shape,
}

impl From<&ViewState> for ControlPoint {
    fn from(state: &ViewState) -> Self {
        let q = state.orientation();
        Self {
            orientation: DVec4::new(q.x, q.y, q.z, q.w),
            position: state.position(),
            light: state.light(),
            distance: state.distance(),
            zoom: state.zoom(),
            fade: state.fade(),
            speed: state.speed(),
            shape: Shape {
                tension: state.tension(),
                continuity: state.continuity(),
                bias: state.bias(),
            },
        }
    }
}

impl ControlPoint {
    /// Flip the quaternion onto the hemisphere of `reference` so the blend
    /// takes the short way round.
    #[must_use]
    fn aligned_to(mut self, reference: &Self) -> Self {
        if self.orientation.dot(reference.orientation) < 0.0 {
            self.orientation = -self.orientation;
        }
        self
    }

    /// Point at parameter `s` on the line through `self` (s = 0) and `next`
    /// (s = 1). Values of `s` outside `[0, 1]` extrapolate.
    #[must_use]
    pub(crate) fn extrapolate(&self, next: &Self, s: f64) -> Self {
        let next = next.aligned_to(self);
        Self {
            orientation: lerp(self.orientation, next.orientation, s),
            position: lerp(self.position, next.position, s),
            light: lerp(self.light, next.light, s),
            distance: lerp(self.distance, next.distance, s),
            zoom: lerp(self.zoom, next.zoom, s),
            fade: lerp(self.fade, next.fade, s),
            speed: lerp(self.speed, next.speed, s),
            shape: self.shape.lerp(next.shape, s),
        }
    }
}

/// Tangent weights derived from the shape of the two central knots.
///
/// `out_b = w[0]·(b−a) + w[1]·(c−b)` leaves knot `b`;
/// `in_c = w[2]·(c−b) + w[3]·(d−c)` arrives at knot `c`.
fn tangent_weights(b: Shape, c: Shape) -> [f64; 4] {
    let tb = 1.0 - b.tension;
    let tc = 1.0 - c.tension;
    [
        0.5 * tb * (1.0 + b.continuity) * (1.0 + b.bias),
        0.5 * tb * (1.0 - b.continuity) * (1.0 - b.bias),
        0.5 * tc * (1.0 - c.continuity) * (1.0 + c.bias),
        0.5 * tc * (1.0 + c.continuity) * (1.0 - c.bias),
    ]
}

/// Cubic Hermite basis `[h00, h10, h01, h11]` at `k`.
fn hermite_basis(k: f64) -> [f64; 4] {
    let k2 = k * k;
    let k3 = k2 * k;
    [
        2.0 * k3 - 3.0 * k2 + 1.0,
        k3 - 2.0 * k2 + k,
        -2.0 * k3 + 3.0 * k2,
        k3 - k2,
    ]
}

/// Blend one component across the four control values.
fn kochanek_bartels<T>(a: T, b: T, c: T, d: T, w: [f64; 4], h: [f64; 4]) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T>,
{
    let out_b = (b - a) * w[0] + (c - b) * w[1];
    let in_c = (c - b) * w[2] + (d - c) * w[3];
    b * h[0] + out_b * h[1] + c * h[2] + in_c * h[3]
}

fn lerp<T>(a: T, b: T, s: f64) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T>,
{
    a + (b - a) * s
}

/// Interpolate strictly inside the segment from `from` to `to`.
///
/// `a`..`d` are the lowered control points (`b` and `c` correspond to `from`
/// and `to`); `k` is the fractional position in `(0, 1)`. The result takes
/// its scene references from `from` and carries no name.
pub(crate) fn blend(
    from: &ViewState,
    to: &ViewState,
    points: [ControlPoint; 4],
    k: f64,
) -> ViewState {
    let [a, b, c, d] = points;
    let a = a.aligned_to(&b);
    let c = c.aligned_to(&b);
    let d = d.aligned_to(&c);

    let w = tangent_weights(b.shape, c.shape);
    let h = hermite_basis(k);
    let scalar =
        |f: fn(&ControlPoint) -> f64| kochanek_bartels(f(&a), f(&b), f(&c), f(&d), w, h);

    let mut out = from.clone();
    out.set_name(None);

    let q = kochanek_bartels(
        a.orientation,
        b.orientation,
        c.orientation,
        d.orientation,
        w,
        h,
    );
    if let Some(q) = unit_quat(q, if k < 0.5 { from } else { to }) {
        out.set_orientation(q);
    }

    let position = kochanek_bartels(a.position, b.position, c.position, d.position, w, h);
    if position.length_squared() > f64::EPSILON {
        out.set_position(position);
    }
    let light = kochanek_bartels(a.light, b.light, c.light, d.light, w, h);
    if light.length_squared() > f64::EPSILON {
        out.set_light(light);
    }

    out.set_distance(scalar(|p: &ControlPoint| p.distance));
    out.set_zoom(scalar(|p: &ControlPoint| p.zoom));
    out.set_fade(scalar(|p: &ControlPoint| p.fade));
    out.set_speed(scalar(|p: &ControlPoint| p.speed));

    let shape = b.shape.lerp(c.shape, k);
    out.set_tension(shape.tension);
    out.set_continuity(shape.continuity);
    out.set_bias(shape.bias);
    out
}

/// Normalize a blended quaternion and put it on the hemisphere of `nearest`
/// so component values converge on the knot. `None` if degenerate.
fn unit_quat(v: DVec4, nearest: &ViewState) -> Option<DQuat> {
    let len_sq = v.length_squared();
    if !len_sq.is_finite() || len_sq < f64::EPSILON {
        return None;
    }
    let v = v / len_sq.sqrt();
    let knot = nearest.orientation();
    let v = if v.dot(DVec4::new(knot.x, knot.y, knot.z, knot.w)) < 0.0 {
        -v
    } else {
        v
    };
    Some(DQuat::from_xyzw(v.x, v.y, v.z, v.w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shape_is_catmull_rom() {
        let w = tangent_weights(Shape::default(), Shape::default());
        assert_eq!(w, [0.5; 4]);
    }

    #[test]
    fn full_tension_flattens_tangents() {
        let tight = Shape {
            tension: 1.0,
            ..Shape::default()
        };
        assert_eq!(tangent_weights(tight, tight), [0.0; 4]);
    }

    #[test]
    fn hermite_basis_partitions_unity() {
        for k in [0.0, 0.2, 0.5, 0.9, 1.0] {
            let h = hermite_basis(k);
            assert!((h[0] + h[2] - 1.0).abs() < 1e-12);
        }
        assert_eq!(hermite_basis(0.0), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(hermite_basis(1.0), [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn scalar_blend_hits_endpoints() {
        let w = [0.5; 4];
        assert_eq!(kochanek_bartels(0.0, 1.0, 2.0, 3.0, w, hermite_basis(0.0)), 1.0);
        assert_eq!(kochanek_bartels(0.0, 1.0, 2.0, 3.0, w, hermite_basis(1.0)), 2.0);
        let mid = kochanek_bartels(0.0, 1.0, 2.0, 3.0, w, hermite_basis(0.5));
        assert!((mid - 1.5).abs() < 1e-12);
    }

    #[test]
    fn extrapolation_mirrors_through_the_first_point() {
        let p = ControlPoint::from(&ViewState::new().with_distance(1.0));
        let q = ControlPoint::from(&ViewState::new().with_distance(3.0));
        assert_eq!(p.extrapolate(&q, -1.0).distance, -1.0);
        assert_eq!(p.extrapolate(&q, 2.0).distance, 5.0);
    }

    #[test]
    fn alignment_flips_opposite_quaternions() {
        let p = ControlPoint::from(&ViewState::new());
        let mut q = p;
        q.orientation = -q.orientation;
        assert_eq!(q.aligned_to(&p).orientation, p.orientation);
    }

    #[test]
    fn blend_takes_the_short_arc() {
        let a = ViewState::new();
        let b = ViewState::new().with_orientation(DQuat::from_rotation_y(0.2));
        // Same rotation as `b`, stored on the opposite hemisphere.
        let c = ViewState::new().with_orientation(-DQuat::from_rotation_y(0.4));
        let pts = [&a, &a, &b, &c].map(ControlPoint::from);

        let out = blend(&a, &b, pts, 0.5);
        let angle = out.orientation().angle_between(DQuat::from_rotation_y(0.1));
        assert!(angle < 0.05, "angle {angle}");
        assert!((out.orientation().length() - 1.0).abs() < 1e-12);
    }
}
