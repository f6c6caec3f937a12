//! Client configuration
//!
//! Config is read from `~/.shellpane/client.toml` unless a path is given,
//! then `SHELLPANE_*` environment variables are layered on top.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Overrides [`ClientConfig::host`]
pub const HOST_ENV: &str = "SHELLPANE_HOST";

/// Overrides [`BasicAuthConfig::username`]
pub const USERNAME_ENV: &str = "SHELLPANE_USERNAME";

/// Overrides [`BasicAuthConfig::password`]
pub const PASSWORD_ENV: &str = "SHELLPANE_PASSWORD";

/// Errors loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {}", path.display())]
    Read {
        /// File that was attempted
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid config TOML
    #[error("failed to parse config {}", path.display())]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}

/// Where and how the client reaches a shellpane server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme and authority prepended to route paths, e.g. `http://localhost:8000`
    #[serde(default = "default_host")]
    pub host: String,
    /// Credentials attached to every request
    #[serde(default)]
    pub basic_auth: BasicAuthConfig,
    /// Deadline for a single call, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            basic_auth: BasicAuthConfig::default(),
            timeout_secs: None,
        }
    }
}

/// HTTP basic authentication credentials
///
/// An empty username means no credentials are sent.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuthConfig {
    /// User name
    #[serde(default)]
    pub username: String,
    /// Password
    #[serde(default)]
    pub password: String,
}

impl BasicAuthConfig {
    /// Whether credentials should be attached to requests
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.username.is_empty()
    }
}

impl std::fmt::Debug for BasicAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl ClientConfig {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::client_config()
    }

    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load config from `path`, or from the default location
    ///
    /// A missing default file yields [`ClientConfig::default`]; a missing
    /// explicit file is an error. Environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::read(path)?,
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::read(&path)?
                } else {
                    log::debug!("no config at {}, using defaults", path.display());
                    Self::default()
                }
            },
        };
        config.apply_env_overrides();
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace fields with `SHELLPANE_HOST`, `SHELLPANE_USERNAME` and
    /// `SHELLPANE_PASSWORD` when they are set
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var(HOST_ENV) {
            self.host = host;
        }
        if let Ok(username) = std::env::var(USERNAME_ENV) {
            self.basic_auth.username = username;
        }
        if let Ok(password) = std::env::var(PASSWORD_ENV) {
            self.basic_auth.password = password;
        }
    }

    /// Per-call deadline, if configured
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
