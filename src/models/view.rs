//! View catalog and captured step output

use serde::{Deserialize, Deserializer, Serialize};

use super::EnvSpec;

/// One invocable view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ViewSpec {
    /// Identifying name
    pub name: String,
    /// Command template run by the server
    pub command: String,
    /// Accepted environment variables, in declaration order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub env: Vec<EnvSpec>,
}

/// The full catalog of views served by a shellpane instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShellpaneConfig {
    /// Views in server order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub views: Vec<ViewSpec>,
}

impl ShellpaneConfig {
    /// Find a view by name (first match, names are not guaranteed unique)
    #[must_use]
    pub fn view(&self, name: &str) -> Option<&ViewSpec> {
        self.views.iter().find(|v| v.name == name)
    }
}

/// Captured result of one step execution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ViewOutput {
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
    /// Process exit code
    pub exit_code: i64,
}

impl ViewOutput {
    /// Whether the step exited with status zero
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

// The server writes empty sequences as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
