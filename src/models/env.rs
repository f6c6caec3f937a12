//! Environment variable declarations and request-time overrides

use serde::{Deserialize, Serialize};

/// A permitted environment variable name for a view or step
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvSpec {
    /// Variable name as the command sees it
    pub name: String,
}

impl EnvSpec {
    /// Declare an environment variable by name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A caller-supplied value for a declared [`EnvSpec`]
///
/// Duplicate names are not rejected here. When encoded into a query the
/// last override with a given name wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvOverride {
    /// Name of the overridden variable
    pub name: String,
    /// Value to set for this invocation
    pub value: String,
}

impl EnvOverride {
    /// Create an override pair
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl std::str::FromStr for EnvOverride {
    type Err = String;

    /// Parse `NAME=VALUE`. The value may itself contain `=`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_once('=')
            .map(|(name, value)| Self::new(name, value))
            .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))
    }
}
