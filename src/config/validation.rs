//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (routes reference known remotes and
//!   exposed module names)
//! - Detect duplicate remote ids and routes unreachable behind a wildcard
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ShellConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted into the shell; an invalid config
//!   never reaches the router

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use url::Url;

use crate::config::schema::ShellConfig;
use crate::routing::pattern::RoutePattern;
use crate::routing::table::compile_route;
use crate::routing::RouteBinding;

/// A single configuration defect.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Two remotes declare the same id.
    #[error("duplicate remote id: {0}")]
    DuplicateRemote(String),

    /// A remote's entry URL does not parse.
    #[error("remote {remote} has an invalid entry URL: {reason}")]
    InvalidEntryUrl { remote: String, reason: String },

    /// A remote declares no exposed modules.
    #[error("remote {0} exposes no modules")]
    NoExposedModules(String),

    /// A route's path pattern does not parse.
    #[error("route {path}: invalid pattern: {reason}")]
    InvalidPattern { path: String, reason: String },

    /// A route binds neither a local view nor a remote module.
    #[error("route {path}: must bind either a local view or a remote module")]
    MissingBinding { path: String },

    /// A route sets `remote` or `module` without the other.
    #[error("route {path}: a remote binding needs both remote and module")]
    PartialRemoteBinding { path: String },

    /// A route binds both a local view and a remote module.
    #[error("route {path}: binds both a local view and a remote module")]
    AmbiguousBinding { path: String },

    /// A route references a remote id absent from the remotes table.
    #[error("route {path}: unknown remote {remote}")]
    UnknownRemote { path: String, remote: String },

    /// A route references a module name its remote does not expose.
    #[error("route {path}: remote {remote} does not expose {module}")]
    UnknownExposedModule {
        path: String,
        remote: String,
        module: String,
    },

    /// A route is declared after a wildcard and can never match.
    #[error("route {path} is unreachable: declared after wildcard {wildcard}")]
    UnreachableRoute { path: String, wildcard: String },
}

/// Validate a configuration, collecting every defect found.
pub fn validate_config(config: &ShellConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Remotes: unique ids, parseable entry URLs, non-empty module lists.
    let mut exposed: HashMap<&str, HashSet<&str>> = HashMap::new();
    for remote in &config.remotes {
        if exposed.contains_key(remote.id.as_str()) {
            errors.push(ValidationError::DuplicateRemote(remote.id.clone()));
            continue;
        }
        if let Err(e) = Url::parse(&remote.entry_url) {
            errors.push(ValidationError::InvalidEntryUrl {
                remote: remote.id.clone(),
                reason: e.to_string(),
            });
        }
        if remote.exposed_modules.is_empty() {
            errors.push(ValidationError::NoExposedModules(remote.id.clone()));
        }
        exposed.insert(
            remote.id.as_str(),
            remote.exposed_modules.iter().map(String::as_str).collect(),
        );
    }

    // Routes: compile each entry, then cross-check remote bindings.
    let mut wildcard: Option<&str> = None;
    for route in &config.routes {
        let entry = match compile_route(route) {
            Ok(entry) => entry,
            Err(e) => {
                errors.push(e);
                continue;
            }
        };

        if let Some(w) = wildcard {
            errors.push(ValidationError::UnreachableRoute {
                path: route.path.clone(),
                wildcard: w.to_string(),
            });
        }
        if wildcard.is_none() && matches!(entry.pattern, RoutePattern::Wildcard) {
            wildcard = Some(route.path.as_str());
        }

        if let RouteBinding::Remote { remote, module } = &entry.binding {
            match exposed.get(remote.as_str()) {
                None => errors.push(ValidationError::UnknownRemote {
                    path: route.path.clone(),
                    remote: remote.clone(),
                }),
                Some(modules) if !modules.contains(module.as_str()) => {
                    errors.push(ValidationError::UnknownExposedModule {
                        path: route.path.clone(),
                        remote: remote.clone(),
                        module: module.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> ShellConfig {
        toml::from_str(
            r#"
            [[remotes]]
            id = "child1"
            entry_url = "http://localhost:4201/remoteEntry.json"
            exposed_modules = ["./Component"]

            [[routes]]
            path = "/"
            view = "home"

            [[routes]]
            path = "/child1"
            remote = "child1"
            module = "./Component"

            [[routes]]
            path = "/**"
            view = "not-found"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_unknown_remote_is_rejected() {
        let mut config = valid_config();
        config.routes[1].remote = Some("child9".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::UnknownRemote {
            path: "/child1".to_string(),
            remote: "child9".to_string(),
        }));
    }

    #[test]
    fn test_unknown_exposed_module_is_rejected() {
        let mut config = valid_config();
        config.routes[1].module = Some("./Missing".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::UnknownExposedModule {
            path: "/child1".to_string(),
            remote: "child1".to_string(),
            module: "./Missing".to_string(),
        }));
    }

    #[test]
    fn test_duplicate_remote_is_rejected() {
        let mut config = valid_config();
        config.remotes.push(config.remotes[0].clone());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::DuplicateRemote("child1".to_string())));
    }

    #[test]
    fn test_route_after_wildcard_is_unreachable() {
        let mut config = valid_config();
        config.routes.push(crate::config::schema::RouteConfig {
            path: "/late".to_string(),
            view: Some("late".to_string()),
            remote: None,
            module: None,
        });
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::UnreachableRoute {
            path: "/late".to_string(),
            wildcard: "/**".to_string(),
        }));
    }

    #[test]
    fn test_all_errors_are_collected() {
        let mut config = valid_config();
        config.remotes[0].entry_url = "not a url".to_string();
        config.routes[0].view = None;
        config.routes[1].remote = Some("child9".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_ambiguous_binding_is_rejected() {
        let mut config = valid_config();
        config.routes[1].view = Some("also-local".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::AmbiguousBinding {
            path: "/child1".to_string(),
        }));
    }
}
