//! Configuration file handling
//!
//! Config is a small TOML document. Every section is optional and missing
//! keys fall back to defaults, so an empty file is a valid config.
//!
//! ```toml
//! [filters]
//! exclude = [".DS_Store", "*.tmp"]
//!
//! [organize]
//! extensions = ["md", "txt"]
//!
//! [split]
//! user = "alice"
//! output_dir = "journal"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TidyError};
use crate::fsops::Exclude;
use crate::paths;

/// dirtidy configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Files every command leaves alone
    #[serde(default)]
    pub filters: FilterConfig,
    /// Defaults for `organize`
    #[serde(default)]
    pub organize: OrganizeConfig,
    /// Defaults for `split-log`
    #[serde(default)]
    pub split: SplitConfig,
}

/// File filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Glob patterns matched against file names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

/// Extension organizer defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizeConfig {
    /// Extensions used when `--ext` is not given
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,
}

/// Log splitter defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Name written into each segment header when `--user` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Where segment files are written when `--out` is not given
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            user: None,
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Resolve the config file path (see [`paths::resolve_config`])
    #[must_use]
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        paths::resolve_config(explicit)
    }

    /// Load config from `path`, or defaults if it does not exist
    ///
    /// A file that exists but cannot be parsed is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|source| TidyError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Compile the exclude patterns
    pub fn exclude(&self) -> Result<Exclude> {
        Exclude::new(&self.filters.exclude)
    }
}
