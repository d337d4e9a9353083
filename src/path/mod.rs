//! Ordered, cursor-addressed sequences of view states with a playback head.
//!
//! A [`PathContainer`] is what the user authors (insert, delete, reshape
//! knots), what a recording session fills, and what playback scrubs through.
//! The head is a real-valued parameter into the sequence that the spline
//! evaluator turns into a view.

/// TOML path documents.
pub mod document;
/// Text motion-capture import/export.
pub mod mov;

use std::path::Path;

use crate::error::VistaError;
use crate::playback::Host;
use crate::spline;
use crate::state::ViewState;

/// Factor applied by [`PathContainer::faster`] and
/// [`PathContainer::slower`].
pub const SPEED_FACTOR: f64 = 1.1;

/// Increment applied by the tension/continuity/bias editors.
pub const SHAPE_STEP: f64 = 0.1;

/// Direction the playback head moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Toward the first knot.
    Backward,
    /// Not moving.
    #[default]
    Stopped,
    /// Toward the last knot.
    Forward,
}

impl Direction {
    /// Signed unit step: -1, 0 or +1.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Backward => -1.0,
            Self::Stopped => 0.0,
            Self::Forward => 1.0,
        }
    }
}

/// Ordered sequence of view states plus a cursor and a playback head.
///
/// When non-empty, `cursor` is always a valid index and the head lies in
/// `[0, len - 1]`. Every editing and navigation operation is a silent no-op
/// on an empty container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathContainer {
    steps: Vec<ViewState>,
    cursor: usize,
    head_t: f64,
    head_d: Direction,
}

impl PathContainer {
    /// Empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Path holding `steps`, cursor and head at the start.
    #[must_use]
    pub fn from_steps(steps: Vec<ViewState>) -> Self {
        Self {
            steps,
            ..Self::default()
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// Number of stored states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the path holds no states.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// State at index `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&ViewState> {
        self.steps.get(i)
    }

    /// State under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&ViewState> {
        self.steps.get(self.cursor)
    }

    /// Stored states in order.
    pub fn iter(&self) -> impl Iterator<Item = &ViewState> {
        self.steps.iter()
    }

    /// Stored states as a slice, for spline evaluation.
    #[must_use]
    pub fn steps(&self) -> &[ViewState] {
        &self.steps
    }

    /// Cursor index (0 when empty).
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Playback head parameter.
    #[must_use]
    pub fn head(&self) -> f64 {
        self.head_t
    }

    /// Direction the head is moving in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.head_d
    }

    /// Whether the head is moving.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.head_d != Direction::Stopped
    }

    /// Interpolated view at the head.
    #[must_use]
    pub fn now(&self) -> ViewState {
        spline::erp(&self.steps, self.head_t)
    }

    /// Move the cursor to `i`. Out-of-range indices are ignored.
    pub fn set_cursor(&mut self, i: usize) {
        if i < self.steps.len() {
            self.cursor = i;
        }
    }

    // ── Editing ─────────────────────────────────────────────────────────

    /// Remove every state and reset the cursor and head.
    pub fn clear(&mut self) {
        self.steps.clear();
        self.cursor = 0;
        self.head_t = 0.0;
    }

    /// Replace the whole sequence, keeping the cursor and head in range.
    pub fn reset(&mut self, steps: Vec<ViewState>) {
        self.steps = steps;
        self.clamp();
    }

    /// Insert `state` before the cursor and select it.
    pub fn insert(&mut self, state: ViewState) {
        if self.steps.is_empty() {
            self.steps.push(state);
            self.cursor = 0;
        } else {
            self.steps.insert(self.cursor, state);
        }
    }

    /// Insert `state` after the cursor and select it.
    pub fn append(&mut self, state: ViewState) {
        if self.steps.is_empty() {
            self.steps.push(state);
            self.cursor = 0;
        } else {
            self.cursor += 1;
            self.steps.insert(self.cursor, state);
        }
    }

    /// Push `state` at the very end without moving the cursor.
    pub fn push(&mut self, state: ViewState) {
        self.steps.push(state);
    }

    /// Overwrite the state under the cursor.
    pub fn replace(&mut self, state: ViewState) {
        if let Some(slot) = self.steps.get_mut(self.cursor) {
            *slot = state;
        }
    }

    /// Remove the state under the cursor and select its predecessor,
    /// wrapping to the last state.
    pub fn delete(&mut self) {
        if self.steps.is_empty() {
            return;
        }
        let _ = self.steps.remove(self.cursor);
        self.cursor = self.wrapped(-1);
        self.clamp();
    }

    // ── Navigation ──────────────────────────────────────────────────────

    /// Select the next state, wrapping to the first.
    pub fn next(&mut self) {
        self.cursor = self.wrapped(1);
    }

    /// Select the previous state, wrapping to the last.
    pub fn prev(&mut self) {
        self.cursor = self.wrapped(-1);
    }

    /// Cursor and head back to the start.
    pub fn home(&mut self) {
        self.cursor = 0;
        self.head_t = 0.0;
    }

    /// Snap the head to the cursor.
    pub fn jump(&mut self) {
        self.head_t = self.cursor as f64;
    }

    // ── Playback head ───────────────────────────────────────────────────

    /// Start moving forward, or stop if already doing so.
    pub fn fast_forward(&mut self, movie: bool, host: &mut dyn Host) {
        self.start(Direction::Forward, movie, host);
    }

    /// Start moving backward, or stop if already doing so.
    pub fn rewind(&mut self, movie: bool, host: &mut dyn Host) {
        self.start(Direction::Backward, movie, host);
    }

    fn start(
        &mut self,
        direction: Direction,
        movie: bool,
        host: &mut dyn Host,
    ) {
        if self.steps.is_empty() || self.head_d == direction {
            self.stop(host);
            return;
        }
        self.head_d = direction;
        if movie {
            host.set_movie_mode(true);
            host.set_synchronous(true);
        }
        log::debug!(
            "Path head {direction:?} from {:.3} ({} steps{})",
            self.head_t,
            self.steps.len(),
            if movie { ", movie" } else { "" }
        );
    }

    /// Stop the head and release the host from movie mode.
    pub fn stop(&mut self, host: &mut dyn Host) {
        self.head_d = Direction::Stopped;
        host.set_movie_mode(false);
        host.set_synchronous(false);
    }

    /// Move the head by `step` knots, scaled by the local speed. Reaching
    /// either end clamps the head and stops.
    pub fn advance(&mut self, step: f64, host: &mut dyn Host) {
        if self.steps.is_empty() {
            self.stop(host);
            return;
        }
        if !self.is_moving() {
            return;
        }

        let last = (self.steps.len() - 1) as f64;
        let speed = self.now().speed();
        let t = self.head_t + self.head_d.sign() * step * speed;
        if t.is_nan() || t <= 0.0 {
            self.head_t = 0.0;
            self.stop(host);
        } else if t >= last {
            self.head_t = last;
            self.stop(host);
        } else {
            self.head_t = t;
        }
    }

    // ── Shape editing ───────────────────────────────────────────────────

    /// Speed up playback through the current state.
    pub fn faster(&mut self) {
        self.edit(|s| s.set_speed(s.speed() * SPEED_FACTOR));
    }

    /// Slow down playback through the current state.
    pub fn slower(&mut self) {
        self.edit(|s| s.set_speed(s.speed() / SPEED_FACTOR));
    }

    /// Raise the current state's tension.
    pub fn inc_tension(&mut self) {
        self.edit(|s| s.set_tension(s.tension() + SHAPE_STEP));
    }

    /// Lower the current state's tension.
    pub fn dec_tension(&mut self) {
        self.edit(|s| s.set_tension(s.tension() - SHAPE_STEP));
    }

    /// Raise the current state's bias.
    pub fn inc_bias(&mut self) {
        self.edit(|s| s.set_bias(s.bias() + SHAPE_STEP));
    }

    /// Lower the current state's bias.
    pub fn dec_bias(&mut self) {
        self.edit(|s| s.set_bias(s.bias() - SHAPE_STEP));
    }

    /// Raise the current state's continuity.
    pub fn inc_continuity(&mut self) {
        self.edit(|s| s.set_continuity(s.continuity() + SHAPE_STEP));
    }

    /// Lower the current state's continuity.
    pub fn dec_continuity(&mut self) {
        self.edit(|s| s.set_continuity(s.continuity() - SHAPE_STEP));
    }

    fn edit(&mut self, f: impl FnOnce(&mut ViewState)) {
        if let Some(state) = self.steps.get_mut(self.cursor) {
            f(state);
        }
    }

    // ── Persistence ─────────────────────────────────────────────────────

    /// Parse a path document.
    pub fn from_document(text: &str) -> Result<Self, VistaError> {
        document::parse_path(text).map(Self::from_steps)
    }

    /// Encode the sequence as a path document.
    pub fn to_document(&self) -> Result<String, VistaError> {
        document::write_path(&self.steps)
    }

    /// Write the sequence to `path`.
    pub fn save(&self, path: &Path) -> Result<(), VistaError> {
        let content = self.to_document()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VistaError::Io)?;
        }
        std::fs::write(path, content).map_err(VistaError::Io)?;
        log::info!(
            "Saved path {} ({} steps)",
            path.display(),
            self.steps.len()
        );
        Ok(())
    }

    /// Replace the sequence with the contents of `path`. The container is
    /// untouched if reading or parsing fails.
    pub fn load(&mut self, path: &Path) -> Result<(), VistaError> {
        let content = std::fs::read_to_string(path).map_err(VistaError::Io)?;
        let steps = document::parse_path(&content)?;
        log::info!("Loaded path {} ({} steps)", path.display(), steps.len());
        self.reset(steps);
        Ok(())
    }

    // ── Internals ───────────────────────────────────────────────────────

    /// Cursor moved by `offset` with a true modulus.
    fn wrapped(&self, offset: i64) -> usize {
        let len = self.steps.len() as i64;
        if len == 0 {
            return 0;
        }
        let cursor = self.cursor as i64 + offset;
        cursor.rem_euclid(len) as usize
    }

    fn clamp(&mut self) {
        match self.steps.len() {
            0 => {
                self.cursor = 0;
                self.head_t = 0.0;
            }
            n => {
                self.cursor = self.cursor.min(n - 1);
                self.head_t = self.head_t.clamp(0.0, (n - 1) as f64);
            }
        }
    }
}
