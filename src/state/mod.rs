//! View states: the camera and scene configuration at one instant.
//!
//! A [`ViewState`] is the unit everything else trades in. Paths and location
//! queues store them, the spline blends them, and the playback controller
//! publishes one per frame for the renderer.

/// Persisted attribute form of a view state.
pub mod record;
/// Non-owning scene handles.
pub mod scene;
/// The view state value type.
pub mod view;

pub use record::StateRecord;
pub use scene::{SceneRef, SceneSet};
pub use view::{ViewState, MIN_SPEED, MIN_ZOOM};
