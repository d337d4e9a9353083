//! Recording, scrubbing and frame-locked playback of camera paths.
//!
//! [`PlaybackController`] owns the current view and drives a single
//! [`PathContainer`](crate::path::PathContainer) through the spline
//! evaluator. It talks to the outside world through two seams: the
//! [`Host`] it asks for movie mode, synchronous loads and cache flushes, and
//! the [`Navigator`] strategy that decides how moves are carried out.

/// Command vocabulary.
pub mod command;
/// The controller itself.
pub mod controller;
/// Host signalling.
pub mod host;
/// Navigation strategies.
pub mod navigator;
/// Zoom exponent integrator.
pub mod zoom;

pub use command::{Target, ViewCommand};
pub use controller::{PlaybackController, RenderFrame};
pub use host::{Host, LogHost, NullHost};
pub use navigator::{Altitude, Glide, Navigator, Teleport, PANORAMA_RADIUS};
pub use zoom::Zoom;
