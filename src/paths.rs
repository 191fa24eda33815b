//! Centralized path definitions for dirtidy
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.dirtidy/
//! └── config.toml               # exclude patterns and per-command defaults
//! ```
//!
//! The location can be moved with the `DIRTIDY_CONFIG` environment variable
//! or the `--config` flag, in increasing order of precedence.

use std::path::{Path, PathBuf};

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "DIRTIDY_CONFIG";

/// Global config directory name
const GLOBAL_DIR: &str = ".dirtidy";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global dirtidy directory.
///
/// Returns `~/.dirtidy/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the default config file path.
///
/// Returns `~/.dirtidy/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Resolve which config file to use.
///
/// An explicit path wins, then `DIRTIDY_CONFIG`, then the global default.
#[must_use]
pub fn resolve_config(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match std::env::var_os(CONFIG_ENV) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => global_config(),
    }
}
