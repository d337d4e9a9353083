//! Input handling: event types and the input processor that converts raw
//! host events into controller commands.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into controller commands.
pub mod processor;

pub use event::{InputEvent, ZoomButton};
pub use processor::InputProcessor;
