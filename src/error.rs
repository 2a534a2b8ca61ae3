//! Load-error taxonomy for the shell core.
//!
//! # Design Decisions
//! - Configuration mistakes (unknown remote / module) are distinct from
//!   runtime fetch failures; the startup validation pass catches them
//!   before any navigation runs
//! - `RemoteLoadFailure` is recoverable: the loader never caches it, so
//!   the next navigation to the same route retries the fetch
//! - An unmatched path is not an error; route lookup returns `Option`

use std::time::Duration;

use thiserror::Error;

/// Errors produced when loading a remote's exposed module.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Referenced remote id is absent from the descriptor registry.
    #[error("unknown remote: {0}")]
    UnknownRemote(String),

    /// Remote exists but does not list the requested module name.
    #[error("remote {remote} does not expose module {module}")]
    UnknownExposedModule { remote: String, module: String },

    /// Fetch or instantiation failed at runtime. Eligible for retry on
    /// the next navigation.
    #[error("failed to load {module} from remote {remote}: {cause}")]
    RemoteLoadFailure {
        remote: String,
        module: String,
        #[source]
        cause: ResolveError,
    },
}

impl LoadError {
    /// True for failures a later navigation may retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LoadError::RemoteLoadFailure { .. })
    }
}

/// Result type for module loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Failures surfaced by a [`ModuleResolver`](crate::loader::ModuleResolver)
/// implementation.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The remote's entry location could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The entry manifest could not be parsed.
    #[error("malformed manifest: {0}")]
    MalformedManifest(String),

    /// The manifest does not publish the requested module.
    #[error("manifest does not expose {0}")]
    MissingExposedModule(String),

    /// The manifest names a different remote than the descriptor.
    #[error("manifest names remote {found}, expected {expected}")]
    RemoteNameMismatch { expected: String, found: String },

    /// The caller-supplied load deadline elapsed.
    #[error("load deadline of {0:?} elapsed")]
    Timeout(Duration),
}
