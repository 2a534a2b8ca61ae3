//! Module loader: lazy fetch, cache, in-flight de-duplication.
//!
//! # Responsibilities
//! - Validate (remote, module) against the registry
//! - Serve cached handles without I/O
//! - Collapse concurrent loads of the same module into one fetch
//! - Apply the caller-supplied load deadline
//!
//! # Design Decisions
//! - At most one fetch per (remote, module) is in flight at any time;
//!   concurrent callers suspend on the same initialization
//! - Failures are returned, never cached; the next load retries
//! - The deadline wraps the shared initialization, so every waiter
//!   observes the same timeout

pub mod cache;
pub mod handle;
pub mod resolver;

pub use cache::{ModuleCache, ModuleKey};
pub use handle::{ComponentRef, ModuleHandle};
pub use resolver::{HttpManifestResolver, ModuleResolver};

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{LoadError, LoadResult, ResolveError};
use crate::observability::metrics;
use crate::registry::{RemoteDescriptor, RemoteRegistry};

/// Lazily loads exposed modules from remotes, caching successes for the
/// process lifetime.
pub struct ModuleLoader {
    registry: Arc<RemoteRegistry>,
    resolver: Arc<dyn ModuleResolver>,
    cache: ModuleCache,
    load_timeout: Option<Duration>,
}

impl ModuleLoader {
    pub fn new(registry: Arc<RemoteRegistry>, resolver: Arc<dyn ModuleResolver>) -> Self {
        Self {
            registry,
            resolver,
            cache: ModuleCache::new(),
            load_timeout: None,
        }
    }

    /// Deadline after which a pending load fails with a timeout cause.
    pub fn with_load_timeout(mut self, timeout: Duration) -> Self {
        self.load_timeout = Some(timeout);
        self
    }

    /// True if `(remote, module)` already resolved.
    pub fn is_loaded(&self, remote: &str, module: &str) -> bool {
        self.cache.get(&ModuleKey::new(remote, module)).is_some()
    }

    /// Load `module` from `remote`, fetching at most once per key.
    pub async fn load(&self, remote: &str, module: &str) -> LoadResult<ModuleHandle> {
        let descriptor = self.registry.describe(remote)?;
        if !descriptor.exposes(module) {
            return Err(LoadError::UnknownExposedModule {
                remote: remote.to_string(),
                module: module.to_string(),
            });
        }

        let key = ModuleKey::new(remote, module);
        let slot = self.cache.slot(&key);
        if let Some(handle) = slot.get() {
            tracing::debug!(remote = %remote, module = %module, "Module served from cache");
            return Ok(handle.clone());
        }

        let start = Instant::now();
        let result = slot
            .get_or_try_init(|| self.fetch(&descriptor, module))
            .await
            .cloned();

        match result {
            Ok(handle) => {
                metrics::record_remote_load(remote, module, "ok", start);
                tracing::info!(
                    remote = %remote,
                    module = %module,
                    elapsed = ?start.elapsed(),
                    "Remote module loaded"
                );
                Ok(handle)
            }
            Err(cause) => {
                metrics::record_remote_load(remote, module, "error", start);
                tracing::warn!(
                    remote = %remote,
                    module = %module,
                    error = %cause,
                    "Remote module load failed"
                );
                Err(LoadError::RemoteLoadFailure {
                    remote: remote.to_string(),
                    module: module.to_string(),
                    cause,
                })
            }
        }
    }

    /// One fetch attempt, with the configured deadline applied.
    async fn fetch(
        &self,
        descriptor: &RemoteDescriptor,
        module: &str,
    ) -> Result<ModuleHandle, ResolveError> {
        match self.load_timeout {
            Some(deadline) => {
                tokio::time::timeout(deadline, self.resolver.resolve(descriptor, module))
                    .await
                    .unwrap_or(Err(ResolveError::Timeout(deadline)))
            }
            None => self.resolver.resolve(descriptor, module).await,
        }
    }
}
