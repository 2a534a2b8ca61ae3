//! Remote module resolution.
//!
//! # Responsibilities
//! - Define the seam between the loader and the host's module-fetching
//!   mechanism
//! - Provide the HTTP manifest resolver for remotes publishing a JSON
//!   entry manifest
//!
//! # Design Decisions
//! - The resolver only sees validated descriptors; id and module-name
//!   checks happen in the loader
//! - Manifest format: `{ "name": ..., "exposes": [{ "key", "outFileName" }] }`
//! - Artifact file names are joined against the entry URL, so remotes may
//!   publish relative paths

use async_trait::async_trait;
use serde::Deserialize;

use super::handle::{ComponentRef, ModuleHandle};
use crate::error::ResolveError;
use crate::registry::RemoteDescriptor;

/// Capability that fetches and instantiates one exposed module of a remote.
#[async_trait]
pub trait ModuleResolver: Send + Sync {
    /// Resolve `module` from the remote described by `descriptor`.
    async fn resolve(
        &self,
        descriptor: &RemoteDescriptor,
        module: &str,
    ) -> Result<ModuleHandle, ResolveError>;
}

/// Entry manifest a remote publishes at its entry URL.
#[derive(Debug, Deserialize)]
struct RemoteManifest {
    name: String,
    #[serde(default)]
    exposes: Vec<ManifestExpose>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ManifestExpose {
    key: String,
    out_file_name: String,
}

/// Resolver for HTTP-served remotes.
///
/// Fetches the entry manifest, finds the exposed key, and resolves it to
/// the artifact URL the host's mounting mechanism will fetch.
pub struct HttpManifestResolver {
    client: reqwest::Client,
}

impl HttpManifestResolver {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured client (proxies, custom timeouts).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpManifestResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModuleResolver for HttpManifestResolver {
    async fn resolve(
        &self,
        descriptor: &RemoteDescriptor,
        module: &str,
    ) -> Result<ModuleHandle, ResolveError> {
        let response = self
            .client
            .get(descriptor.entry_url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ResolveError::Network(e.to_string()))?;

        let manifest: RemoteManifest = response
            .json()
            .await
            .map_err(|e| ResolveError::MalformedManifest(e.to_string()))?;

        if manifest.name != descriptor.id {
            return Err(ResolveError::RemoteNameMismatch {
                expected: descriptor.id.clone(),
                found: manifest.name,
            });
        }

        let expose = manifest
            .exposes
            .iter()
            .find(|e| e.key == module)
            .ok_or_else(|| ResolveError::MissingExposedModule(module.to_string()))?;

        let artifact = descriptor
            .entry_url
            .join(&expose.out_file_name)
            .map_err(|e| {
                ResolveError::MalformedManifest(format!(
                    "bad artifact path {}: {}",
                    expose.out_file_name, e
                ))
            })?;

        tracing::debug!(
            remote = %descriptor.id,
            module = %module,
            artifact = %artifact,
            "Resolved exposed module"
        );

        Ok(ModuleHandle {
            remote: descriptor.id.clone(),
            exposed_module: module.to_string(),
            entry_component: ComponentRef::new(artifact.as_str()),
        })
    }
}
