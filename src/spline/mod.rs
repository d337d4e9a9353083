//! Spline evaluation over an ordered sequence of view states.
//!
//! [`erp`] maps a real parameter onto the sequence: integer parameters land
//! exactly on the stored knots, fractional ones blend the four surrounding
//! knots with a Kochanek-Bartels spline. Missing neighbours at either end
//! are synthesized by mirroring the last two knots, which gives both end
//! segments a tangent without looping or duplicating data. That boundary
//! rule is an approximation, not a canonical spline end condition.

mod tcb;

use tcb::ControlPoint;

use crate::state::ViewState;

/// Smallest parameter spacing [`sample`] will step by.
const MIN_SPACING: f64 = 1e-3;

/// Interpolated state at parameter `t` along `states`.
///
/// - Empty input yields the default state.
/// - A single knot is returned for every `t`.
/// - `t` is clamped to `[0, len - 1]`; NaN evaluates at 0.
/// - Integer `t` returns the knot itself, bit for bit.
///
/// Pure: the same input always produces the same output.
#[must_use]
pub fn erp(states: &[ViewState], t: f64) -> ViewState {
    let (first, last) = match states {
        [] => return ViewState::default(),
        [only] => return only.clone(),
        [first, .., last] => (first, last),
    };

    let m = states.len() - 1;
    if t.is_nan() || t <= 0.0 {
        return first.clone();
    }
    if t >= m as f64 {
        return last.clone();
    }

    let i = t.floor() as usize;
    let k = t - t.floor();
    if k == 0.0 {
        return states[i].clone();
    }

    let point = |j: usize| ControlPoint::from(&states[j]);
    let a = if i > 0 {
        point(i - 1)
    } else {
        point(0).extrapolate(&point(1), -1.0)
    };
    let d = if i + 2 <= m {
        point(i + 2)
    } else {
        point(m - 1).extrapolate(&point(m), 2.0)
    };

    tcb::blend(&states[i], &states[i + 1], [a, point(i), point(i + 1), d], k)
}

/// Walk the whole sequence, stepping the parameter by `spacing` scaled by
/// the local speed, and return the visited states. The last knot is always
/// included. Renderers use this to preview a path.
#[must_use]
pub fn sample(states: &[ViewState], spacing: f64) -> Vec<ViewState> {
    let Some(last) = states.last() else {
        return Vec::new();
    };
    let spacing = if spacing.is_finite() {
        spacing.max(MIN_SPACING)
    } else {
        1.0
    };

    let end = (states.len() - 1) as f64;
    let mut samples = Vec::new();
    let mut t = 0.0;
    while t < end {
        let state = erp(states, t);
        t += spacing * state.speed();
        samples.push(state);
    }
    samples.push(last.clone());
    samples
}
