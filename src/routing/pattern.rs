//! Route patterns.
//!
//! # Design Decisions
//! - Exact and wildcard patterns only; no parameters, no regex
//! - Paths are normalized (leading slash enforced, trailing slash
//!   stripped except for the root) so "/child1/" and "/child1" match alike
//! - Matching is case-sensitive

use thiserror::Error;

/// A path matcher: one exact path, or the catch-all wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// Matches exactly one normalized path.
    Exact(String),
    /// Matches any path. Written "/**" in configuration.
    Wildcard,
}

/// Error produced when parsing a pattern string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,
    #[error("pattern must start with '/': {0}")]
    MissingLeadingSlash(String),
}

impl RoutePattern {
    /// Parse a pattern string from configuration.
    ///
    /// "/**" (or bare "**") denotes the wildcard; anything else is an
    /// exact path.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if raw.is_empty() {
            return Err(PatternError::Empty);
        }
        if raw == "/**" || raw == "**" {
            return Ok(Self::Wildcard);
        }
        if !raw.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(raw.to_string()));
        }
        Ok(Self::Exact(normalize(raw)))
    }

    /// True if the normalized `path` matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(expected) => expected == path,
            Self::Wildcard => true,
        }
    }
}

/// Normalize a navigation path: enforce the leading slash, strip trailing
/// slashes except for the root.
pub fn normalize(path: &str) -> String {
    let mut normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}
