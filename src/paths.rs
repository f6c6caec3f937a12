//! Centralized path definitions for shellpane
//!
//! ```text
//! ~/.shellpane/
//! └── client.toml               # Host and credentials for the client
//! ```

use std::path::PathBuf;

/// Global directory name
const GLOBAL_DIR: &str = ".shellpane";

/// Client configuration filename
const CLIENT_CONFIG_FILE: &str = "client.toml";

/// Get the global config directory.
///
/// Returns `~/.shellpane/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the client config file path.
///
/// Returns `~/.shellpane/client.toml`.
#[must_use]
pub fn client_config() -> PathBuf {
    global_config_dir().join(CLIENT_CONFIG_FILE)
}
