//! Converts raw host events into controller commands.
//!
//! The `InputProcessor` owns the transient input state (modifier keys), the
//! key-binding map and the zoom rates. It is the only thing that sits
//! between raw window events and
//! [`PlaybackController::execute`](crate::playback::PlaybackController::execute).

use super::event::{InputEvent, ZoomButton};
use crate::options::{KeyBindings, Options, ZoomOptions};
use crate::playback::{Target, ViewCommand};

/// Converts raw host events into [`ViewCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = processor.handle_key_press("F8") {
///     controller.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
    /// Wheel step and button rate.
    zoom: ZoomOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor using the bindings and zoom rates in `options`.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            shift_pressed: false,
            key_bindings: options.keybindings.clone(),
            zoom: options.zoom.clone(),
        }
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    /// Shift selects movie mode for the playback commands.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewCommand> {
        self.key_bindings.lookup(key, self.shift_pressed)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ViewCommand> {
        match event {
            InputEvent::Scroll { delta } => Some(ViewCommand::Zoom {
                delta: delta * self.zoom.wheel_step,
            }),
            InputEvent::ZoomButton { button, pressed } => {
                Some(self.handle_zoom_button(button, pressed))
            }
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
            InputEvent::User { name } if !name.is_empty() => {
                Some(ViewCommand::MoveTo(Target::Named(name)))
            }
            InputEvent::User { .. } => None,
        }
    }

    fn handle_zoom_button(
        &self,
        button: ZoomButton,
        pressed: bool,
    ) -> ViewCommand {
        let rate = if pressed { self.zoom.button_rate } else { 0.0 };
        match button {
            ZoomButton::In => ViewCommand::ZoomRate { rate: -rate },
            ZoomButton::Out => ViewCommand::ZoomRate { rate },
            ZoomButton::Home => ViewCommand::ZoomHome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::KeyCommandTag;

    #[test]
    fn shift_turns_playback_into_movie_mode() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_key_press("F8"),
            Some(ViewCommand::TogglePlay { movie: false })
        );
        assert!(input
            .handle_event(InputEvent::ModifiersChanged { shift: true })
            .is_none());
        assert!(input.shift_pressed());
        assert_eq!(
            input.handle_key_press("BracketRight"),
            Some(ViewCommand::FastForward { movie: true })
        );
        assert_eq!(input.handle_key_press("F7"), Some(ViewCommand::ToggleRecord));
        assert_eq!(input.handle_key_press("KeyZ"), None);
    }

    #[test]
    fn wheel_scales_by_step() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: 3.0 }),
            Some(ViewCommand::Zoom { delta: 3.0 * 0.1 })
        );
    }

    #[test]
    fn zoom_buttons_start_and_stop_rates() {
        let mut input = InputProcessor::new();
        let press = |button| InputEvent::ZoomButton {
            button,
            pressed: true,
        };
        assert_eq!(
            input.handle_event(press(ZoomButton::In)),
            Some(ViewCommand::ZoomRate { rate: -1.0 })
        );
        assert_eq!(
            input.handle_event(press(ZoomButton::Out)),
            Some(ViewCommand::ZoomRate { rate: 1.0 })
        );
        assert_eq!(
            input.handle_event(InputEvent::ZoomButton {
                button: ZoomButton::Out,
                pressed: false,
            }),
            Some(ViewCommand::ZoomRate { rate: 0.0 })
        );
        assert_eq!(
            input.handle_event(press(ZoomButton::Home)),
            Some(ViewCommand::ZoomHome)
        );
    }

    #[test]
    fn user_events_move_to_named_locations() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::User {
                name: "gale".into()
            }),
            Some(ViewCommand::MoveTo(Target::Named("gale".into())))
        );
        assert!(input
            .handle_event(InputEvent::User {
                name: String::new()
            })
            .is_none());
    }

    #[test]
    fn options_supply_bindings_and_rates() {
        let mut options = Options::default();
        options.zoom.wheel_step = 0.5;
        let _ = options.keybindings.bind("KeyT", KeyCommandTag::IncTension);
        let mut input = InputProcessor::from_options(&options);
        assert_eq!(input.handle_key_press("KeyT"), Some(ViewCommand::IncTension));
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: -1.0 }),
            Some(ViewCommand::Zoom { delta: -0.5 })
        );

        let _ = input.key_bindings_mut().unbind("KeyT");
        assert!(input.key_bindings().tag("KeyT").is_none());
    }
}
