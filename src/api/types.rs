//! API request and response types
//!
//! Responses are transparent wrappers: the body of a successful call is the
//! wrapped domain value itself. Unknown fields the server adds are ignored.

use serde::{Deserialize, Serialize};

use crate::models::{EnvOverride, ShellpaneConfig, ViewOutput};

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request for one step's captured output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetStepOutputRequest {
    /// View the step belongs to
    pub view_name: String,
    /// Step to run
    pub step_name: String,
    /// Overrides for the view's env vars
    #[serde(default)]
    pub view_env: Vec<EnvOverride>,
    /// Overrides for the step's env vars
    #[serde(default)]
    pub step_env: Vec<EnvOverride>,
}

impl GetStepOutputRequest {
    /// Request a step with no overrides
    #[must_use]
    pub fn new(view_name: impl Into<String>, step_name: impl Into<String>) -> Self {
        Self {
            view_name: view_name.into(),
            step_name: step_name.into(),
            view_env: Vec::new(),
            step_env: Vec::new(),
        }
    }

    /// Append a view-level override
    #[must_use]
    pub fn with_view_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.view_env.push(EnvOverride::new(name, value));
        self
    }

    /// Append a step-level override
    #[must_use]
    pub fn with_step_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.step_env.push(EnvOverride::new(name, value));
        self
    }
}

/// Request for the view catalog (no parameters)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetViewSpecsRequest;

// =============================================================================
// RESPONSE TYPES
// =============================================================================

/// Captured output of the requested step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GetStepOutputResponse {
    /// The step's output record
    pub output: ViewOutput,
}

/// The server's view catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GetViewSpecsResponse {
    /// All views the server knows about
    pub config: ShellpaneConfig,
}
