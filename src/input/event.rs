/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`ViewCommand`](crate::playback::ViewCommand) values.
/// Key presses go through
/// [`handle_key_press`](super::InputProcessor::handle_key_press) instead.
///
/// # Example
///
/// ```ignore
/// if let Some(cmd) = processor.handle_event(InputEvent::Scroll { delta: 1.0 }) {
///     controller.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Scroll wheel notches (positive = zoom out).
    Scroll {
        /// Number of notches.
        delta: f64,
    },
    /// Zoom button pressed or released.
    ZoomButton {
        /// Which button changed.
        button: ZoomButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
    /// Host-defined event asking to move to a named location.
    User {
        /// Location name carried by the event.
        name: String,
    },
}

/// Joystick or on-screen zoom button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoomButton {
    /// Zoom in while held.
    In,
    /// Zoom out while held.
    Out,
    /// Reset the zoom.
    Home,
}
