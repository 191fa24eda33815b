//! Command implementations

mod config_cmd;
mod journal;
mod merge;
mod organize;
mod prompt;
mod split_log;

use std::path::Path;

use dirtidy::config::Config;

pub use config_cmd::config_cmd;
pub use journal::{collect, stamp};
pub use merge::merge;
pub use organize::organize;
pub use split_log::split_log;

/// Load the config selected by `--config`, `DIRTIDY_CONFIG` or the default
fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let path = Config::resolve_path(explicit);
    Ok(Config::load(&path)?)
}
