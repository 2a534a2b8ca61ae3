//! Remote descriptor registry.
//!
//! # Responsibilities
//! - Hold the static table of known remotes
//! - Answer `describe` lookups by remote id
//!
//! # Design Decisions
//! - Built once at startup, immutable afterwards (thread-safe without locks)
//! - Duplicate ids rejected at construction, not at first use

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use url::Url;

use crate::config::schema::RemoteConfig;
use crate::config::validation::ValidationError;
use crate::error::{LoadError, LoadResult};

/// Static description of an independently deployed remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDescriptor {
    /// Unique remote identifier.
    pub id: String,

    /// Location of the remote's entry manifest.
    pub entry_url: Url,

    /// Module names the remote publishes.
    pub exposed_modules: BTreeSet<String>,
}

impl RemoteDescriptor {
    /// True if the remote publishes `module`.
    pub fn exposes(&self, module: &str) -> bool {
        self.exposed_modules.contains(module)
    }
}

/// Read-only store of remote descriptors, keyed by id.
#[derive(Debug, Default)]
pub struct RemoteRegistry {
    remotes: HashMap<String, Arc<RemoteDescriptor>>,
}

impl RemoteRegistry {
    /// Build a registry from descriptors. Duplicate ids are rejected.
    pub fn new(
        descriptors: impl IntoIterator<Item = RemoteDescriptor>,
    ) -> Result<Self, ValidationError> {
        let mut remotes = HashMap::new();
        for descriptor in descriptors {
            let id = descriptor.id.clone();
            if remotes.insert(id.clone(), Arc::new(descriptor)).is_some() {
                return Err(ValidationError::DuplicateRemote(id));
            }
        }
        Ok(Self { remotes })
    }

    /// Build a registry from configuration, collecting every defect.
    pub fn from_config(remotes: &[RemoteConfig]) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut descriptors = Vec::with_capacity(remotes.len());

        for remote in remotes {
            if remote.exposed_modules.is_empty() {
                errors.push(ValidationError::NoExposedModules(remote.id.clone()));
                continue;
            }
            match Url::parse(&remote.entry_url) {
                Ok(entry_url) => descriptors.push(RemoteDescriptor {
                    id: remote.id.clone(),
                    entry_url,
                    exposed_modules: remote.exposed_modules.iter().cloned().collect(),
                }),
                Err(e) => errors.push(ValidationError::InvalidEntryUrl {
                    remote: remote.id.clone(),
                    reason: e.to_string(),
                }),
            }
        }

        match Self::new(descriptors) {
            Ok(registry) if errors.is_empty() => Ok(registry),
            Ok(_) => Err(errors),
            Err(e) => {
                errors.push(e);
                Err(errors)
            }
        }
    }

    /// Descriptor for `remote_id`, or `UnknownRemote` if absent.
    pub fn describe(&self, remote_id: &str) -> LoadResult<Arc<RemoteDescriptor>> {
        self.remotes
            .get(remote_id)
            .cloned()
            .ok_or_else(|| LoadError::UnknownRemote(remote_id.to_string()))
    }

    /// Number of registered remotes.
    pub fn len(&self) -> usize {
        self.remotes.len()
    }

    /// True if no remotes are registered.
    pub fn is_empty(&self) -> bool {
        self.remotes.is_empty()
    }
}
