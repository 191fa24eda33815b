//! Split a chat log into daily markdown files

use std::path::{Path, PathBuf};

use anyhow::Context;
use dirtidy::ops;
use dirtidy::output::OutputMode;

/// Split `input`, taking `user` and `out` from the config when not given
pub fn split_log(
    input: &Path,
    user: Option<String>,
    out: Option<PathBuf>,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let user = user
        .or(config.split.user)
        .context("no user label given (use --user or set split.user in the config)")?;
    let out_dir = out.unwrap_or(config.split.output_dir);

    let report = ops::split_log(input, &user, &out_dir)?;
    report.render(mode);
    Ok(())
}
