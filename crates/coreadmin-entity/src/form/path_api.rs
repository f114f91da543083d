//! The `PathApi` join key between request paths and the permission model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Delimiter-joined set of path aliases identifying which request paths a
/// form governs, e.g. `"user|users"`.
///
/// Parsing is deterministic: the raw value is split on `|`, each alias is
/// trimmed, and empty aliases are dropped. Any number of aliases is
/// accepted; a single alias is as valid as two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct PathApi(String);

impl PathApi {
    /// Wrap a raw alias list.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw stored value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the parsed aliases.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.0.split('|').map(str::trim).filter(|a| !a.is_empty())
    }

    /// Whether the given path segment names this form.
    pub fn matches(&self, segment: &str) -> bool {
        !segment.is_empty() && self.aliases().any(|alias| alias == segment)
    }
}

impl fmt::Display for PathApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PathApi {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for PathApi {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
