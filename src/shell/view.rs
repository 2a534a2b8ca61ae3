//! Views and the renderer seam.
//!
//! # Design Decisions
//! - The shell never mounts anything itself; it hands a `View` to a
//!   host-supplied `Renderer`
//! - Load failures are a distinct view from NotFound, so a matched route
//!   that failed to load is never mistaken for a missing route, and
//!   never shows up blank

use crate::loader::ComponentRef;

/// What the shell asks the host to render for one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// A resolved entry component, local or remote.
    Component(ComponentRef),

    /// Fallback for a path no route matched.
    NotFound,

    /// Error affordance for a matched route whose remote failed to load.
    LoadError {
        remote: String,
        module: String,
        message: String,
    },
}

/// Host-supplied mounting mechanism.
pub trait Renderer: Send + Sync {
    /// Mount `view`. Called once per completed navigation.
    fn render(&self, view: View);
}
