//! Loaded module handles.

use std::fmt;
use std::sync::Arc;

/// Opaque reference to a mountable entry component.
///
/// The shell never interprets the contents; the host's mounting mechanism
/// decides what the string means (an artifact URL for remotes, a registry
/// key for local views).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentRef(Arc<str>);

impl ComponentRef {
    pub fn new(reference: impl Into<Arc<str>>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentRef {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

impl From<String> for ComponentRef {
    fn from(reference: String) -> Self {
        Self::new(reference)
    }
}

/// A successfully resolved exposed module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleHandle {
    /// Remote the module came from.
    pub remote: String,

    /// Exposed module name within the remote.
    pub exposed_module: String,

    /// Entry component the module publishes.
    pub entry_component: ComponentRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_ref_is_cheap_to_clone_and_compare() {
        let a = ComponentRef::from("http://localhost:4201/main.js");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "http://localhost:4201/main.js");
        assert_eq!(a.to_string(), b.to_string());
    }
}
