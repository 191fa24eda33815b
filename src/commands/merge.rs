//! Merge one directory tree into another

use std::path::Path;

use dirtidy::ops;
use dirtidy::output::OutputMode;

/// Merge `input` into `output`
pub fn merge(
    input: &Path,
    output: &Path,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let report = ops::merge(input, output, &config.exclude()?)?;
    report.render(mode);
    Ok(())
}
