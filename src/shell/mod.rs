//! Shell orchestration.
//!
//! Drives each navigation through match → load → render and owns the
//! seams to the host: the renderer and the navigation entry point.

pub mod navigator;
pub mod view;

pub use navigator::{NavigationOutcome, NavigationState, Shell};
pub use view::{Renderer, View};
