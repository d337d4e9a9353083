// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera path and view-state interpolation for panoramic and planetary
//! viewers.
//!
//! Vista records, edits, saves and plays back camera paths. A path is a list
//! of [`state::ViewState`] knots joined by a Kochanek-Bartels spline; the
//! play head moves along it at a per-knot speed.
//!
//! # Key entry points
//!
//! - [`playback::PlaybackController`] - per-frame playback, recording and
//!   location navigation
//! - [`path::PathContainer`] - editable path with a cursor and a play head
//! - [`spline::erp`] - spline evaluation between knots
//! - [`location::LocationQueue`] - rotating named viewpoint slots
//! - [`options::Options`] - runtime configuration (zoom, playback, cache,
//!   key bindings)
//!
//! # Architecture
//!
//! The controller never touches the host directly: cache and movie-mode
//! requests go through the [`playback::Host`] trait, and move planning
//! through [`playback::Navigator`]. Raw input is turned into
//! [`playback::ViewCommand`]s by [`input::InputProcessor`].

pub mod error;
pub mod input;
pub mod location;
pub mod options;
pub mod path;
pub mod playback;
pub mod spline;
pub mod state;

pub use error::VistaError;
pub use options::Options;
pub use path::PathContainer;
pub use playback::PlaybackController;
pub use state::ViewState;
