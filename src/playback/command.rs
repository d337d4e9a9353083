//! The controller's complete interactive vocabulary.
//!
//! Every operation, whether triggered by a key press, a wheel notch, a GUI
//! button or a scripted call, is represented as a [`ViewCommand`] and passed
//! to [`PlaybackController::execute`](super::PlaybackController::execute).

/// What a navigation command is aimed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Front of a location slot.
    Location(usize),
    /// Location slot whose front state carries this name.
    Named(String),
    /// Absolute index into the path.
    Step(usize),
    /// Offset from the path cursor, wrapping at either end.
    Relative(isize),
}

/// Every operation the playback controller understands.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    // ── Navigation ──────────────────────────────────────────────────
    /// Move to a target using the active navigator.
    MoveTo(Target),

    /// Teleport to a target.
    JumpTo(Target),

    /// Take the target's scenes without moving the camera.
    FadeTo(Target),

    // ── Recording and playback ──────────────────────────────────────
    /// Start or stop recording the view into the path.
    ToggleRecord,

    /// Start or stop playing the path from the beginning.
    TogglePlay {
        /// Render at a fixed timestep with synchronous loads.
        movie: bool,
    },

    /// Run the path head forward (toggle).
    FastForward {
        /// Render at a fixed timestep with synchronous loads.
        movie: bool,
    },

    /// Run the path head backward (toggle).
    Rewind {
        /// Render at a fixed timestep with synchronous loads.
        movie: bool,
    },

    /// Stop the path head.
    Stop,

    // ── Path editing ────────────────────────────────────────────────
    /// Select the next step.
    NextStep,
    /// Select the previous step.
    PrevStep,
    /// Cursor and head back to the first step.
    HomeStep,
    /// Snap the head to the cursor and show that step.
    JumpToStep,
    /// Insert the current view before the cursor.
    InsertStep,
    /// Insert the current view after the cursor.
    AppendStep,
    /// Overwrite the step under the cursor with the current view.
    ReplaceStep,
    /// Remove the step under the cursor.
    DeleteStep,
    /// Raise the speed of the step under the cursor.
    Faster,
    /// Lower the speed of the step under the cursor.
    Slower,
    /// Raise the tension of the step under the cursor.
    IncTension,
    /// Lower the tension of the step under the cursor.
    DecTension,
    /// Raise the bias of the step under the cursor.
    IncBias,
    /// Lower the bias of the step under the cursor.
    DecBias,
    /// Raise the continuity of the step under the cursor.
    IncContinuity,
    /// Lower the continuity of the step under the cursor.
    DecContinuity,

    // ── Zoom ────────────────────────────────────────────────────────
    /// Change the zoom exponent by `delta` (positive = zoom out).
    Zoom {
        /// Exponent change.
        delta: f64,
    },

    /// Change the zoom exponent continuously.
    ZoomRate {
        /// Exponent change per second; 0 stops.
        rate: f64,
    },

    /// Reset the zoom exponent to 0.
    ZoomHome,

    // ── Host and diagnostics ────────────────────────────────────────
    /// Ask the host to drop cached content.
    FlushCache,

    /// Log latitude, longitude and distance of the current view.
    ReportLocation,

    /// Log the current view as a path document step.
    ReportState,
}
