//! Route table: ordered patterns bound to views.
//!
//! # Responsibilities
//! - Hold compiled route entries in declaration order
//! - Look up the first entry matching a path
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - First match wins; declaration order, not specificity, decides
//! - Explicit `Option` rather than a synthesized fallback: an unmatched
//!   path is an expected outcome the shell handles, not an error

use crate::config::schema::RouteConfig;
use crate::config::validation::ValidationError;
use crate::loader::ComponentRef;
use crate::routing::pattern::{normalize, RoutePattern};

/// What a matched route renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteBinding {
    /// A view owned by the shell application itself.
    Local(ComponentRef),
    /// An exposed module of an independently deployed remote.
    Remote { remote: String, module: String },
}

/// One pattern → binding pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: RoutePattern,
    pub binding: RouteBinding,
}

impl RouteEntry {
    /// Entry binding `pattern` to a local view.
    pub fn local(pattern: RoutePattern, component: impl Into<ComponentRef>) -> Self {
        Self {
            pattern,
            binding: RouteBinding::Local(component.into()),
        }
    }

    /// Entry binding `pattern` to a remote's exposed module.
    pub fn remote(
        pattern: RoutePattern,
        remote: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        Self {
            pattern,
            binding: RouteBinding::Remote {
                remote: remote.into(),
                module: module.into(),
            },
        }
    }
}

/// Compile one route definition into a table entry.
pub(crate) fn compile_route(config: &RouteConfig) -> Result<RouteEntry, ValidationError> {
    let pattern = RoutePattern::parse(&config.path).map_err(|e| ValidationError::InvalidPattern {
        path: config.path.clone(),
        reason: e.to_string(),
    })?;

    let binding = match (&config.view, &config.remote, &config.module) {
        (Some(view), None, None) => RouteBinding::Local(ComponentRef::from(view.as_str())),
        (None, Some(remote), Some(module)) => RouteBinding::Remote {
            remote: remote.clone(),
            module: module.clone(),
        },
        (None, None, None) => {
            return Err(ValidationError::MissingBinding {
                path: config.path.clone(),
            })
        }
        (None, Some(_), None) | (None, None, Some(_)) => {
            return Err(ValidationError::PartialRemoteBinding {
                path: config.path.clone(),
            })
        }
        _ => {
            return Err(ValidationError::AmbiguousBinding {
                path: config.path.clone(),
            })
        }
    };

    Ok(RouteEntry { pattern, binding })
}

/// Ordered, immutable route table.
#[derive(Debug, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table from entries in declaration order.
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    /// Build a table from configuration, collecting every defect.
    pub fn from_config(routes: &[RouteConfig]) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut entries = Vec::with_capacity(routes.len());

        for route in routes {
            match compile_route(route) {
                Ok(entry) => entries.push(entry),
                Err(e) => errors.push(e),
            }
        }

        if errors.is_empty() {
            Ok(Self::new(entries))
        } else {
            Err(errors)
        }
    }

    /// First entry whose pattern matches `path`, if any.
    pub fn match_path(&self, path: &str) -> Option<&RouteEntry> {
        let path = normalize(path);
        self.entries.iter().find(|entry| entry.pattern.matches(&path))
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::new(vec![
            RouteEntry::local(RoutePattern::parse("/").unwrap(), "home"),
            RouteEntry::remote(RoutePattern::parse("/child1").unwrap(), "child1", "./Component"),
            RouteEntry::local(RoutePattern::Wildcard, "not-found"),
        ])
    }

    #[test]
    fn test_root_matches_home_entry() {
        let table = table();
        let entry = table.match_path("/").unwrap();
        assert_eq!(entry.binding, RouteBinding::Local(ComponentRef::from("home")));
    }

    #[test]
    fn test_exact_match_beats_wildcard_when_declared_first() {
        let table = table();
        let entry = table.match_path("/child1").unwrap();
        assert!(matches!(
            entry.binding,
            RouteBinding::Remote { ref remote, .. } if remote == "child1"
        ));
    }

    #[test]
    fn test_declaration_order_decides_winner() {
        // Same two patterns, wildcard declared first: wildcard wins.
        let table = RouteTable::new(vec![
            RouteEntry::local(RoutePattern::Wildcard, "catch-all"),
            RouteEntry::local(RoutePattern::parse("/child1").unwrap(), "exact"),
        ]);
        let entry = table.match_path("/child1").unwrap();
        assert_eq!(
            entry.binding,
            RouteBinding::Local(ComponentRef::from("catch-all"))
        );
    }

    #[test]
    fn test_unmatched_path_returns_none() {
        let table = RouteTable::new(vec![RouteEntry::local(
            RoutePattern::parse("/child1").unwrap(),
            "child",
        )]);
        assert!(table.match_path("/unknown").is_none());
    }

    #[test]
    fn test_trailing_slash_matches_exact_entry() {
        let table = table();
        let entry = table.match_path("/child1/").unwrap();
        assert!(matches!(entry.binding, RouteBinding::Remote { .. }));
    }

    #[test]
    fn test_compile_route_rejects_partial_remote_binding() {
        let err = compile_route(&RouteConfig {
            path: "/child1".to_string(),
            view: None,
            remote: Some("child1".to_string()),
            module: None,
        })
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::PartialRemoteBinding {
                path: "/child1".to_string()
            }
        );
    }
}
