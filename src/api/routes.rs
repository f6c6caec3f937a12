//! Route table and query parameter names

/// Query key carrying the view name
pub const VIEW_NAME_PARAM: &str = "view_name";

/// Query key carrying the step name
pub const STEP_NAME_PARAM: &str = "step_name";

/// Prefix joined directly to a view override's name to form its query key
pub const VIEW_ENV_PREFIX: &str = "view_env";

/// Prefix joined directly to a step override's name to form its query key
pub const STEP_ENV_PREFIX: &str = "step_env";

/// Server operations and the fixed path each is served on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Fetch one step's captured output
    GetStepOutput,
    /// Fetch the view catalog
    GetViewSpecs,
}

impl Route {
    /// Every route, in declaration order
    pub const ALL: [Self; 2] = [Self::GetStepOutput, Self::GetViewSpecs];

    /// Path appended to the configured host
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::GetStepOutput => "/api/get-step-output",
            Self::GetViewSpecs => "/api/get-view-specs",
        }
    }

    /// Operation name used in logs and errors
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetStepOutput => "GetStepOutput",
            Self::GetViewSpecs => "GetViewSpecs",
        }
    }

    /// Look up the route served on `path`
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
