//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the shell.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the shell.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ShellConfig {
    /// Known remotes (id, entry manifest URL, exposed module names).
    pub remotes: Vec<RemoteConfig>,

    /// Ordered route definitions. Declaration order is match order.
    pub routes: Vec<RouteConfig>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// A remote known to the shell.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteConfig {
    /// Unique remote identifier.
    pub id: String,

    /// URL of the remote's entry manifest.
    pub entry_url: String,

    /// Module names the remote publishes from its manifest.
    pub exposed_modules: Vec<String>,
}

/// A route binding a path pattern to a local view or a remote module.
///
/// Exactly one of `view` or the (`remote`, `module`) pair must be set;
/// validation rejects anything else.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Path pattern: "/", an exact path like "/child1", or the wildcard
    /// fallback "/**".
    pub path: String,

    /// Local component name to render.
    #[serde(default)]
    pub view: Option<String>,

    /// Remote id to load from.
    #[serde(default)]
    pub remote: Option<String>,

    /// Exposed module name within the remote.
    #[serde(default)]
    pub module: Option<String>,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Deadline for a single remote load in seconds. 0 disables the
    /// deadline.
    pub load_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { load_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
