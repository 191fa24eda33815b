//! Journal commands: collect dated notes, stamp undated ones

use std::path::Path;

use dirtidy::TidyError;
use dirtidy::ops::{self, StampOptions};
use dirtidy::output::OutputMode;

use super::prompt;

/// File dated notes from `input` into `output/<YYYY>/`
pub fn collect(
    input: &Path,
    output: &Path,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    log::info!("Content merging is done by appending; it is meant for text files.");
    let report = ops::collect(input, output, &config.exclude()?)?;
    report.render(mode);
    Ok(())
}

/// Header and rename every note under `dir`, asking first unless `yes` is set
pub fn stamp(
    dir: &Path,
    keep_name: bool,
    yes: bool,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let exclude = config.exclude()?;

    if !dir.is_dir() {
        return Err(TidyError::NotADirectory(dir.to_path_buf()).into());
    }

    if !yes {
        eprintln!("This adds a '# name' header to every file under '{}',", dir.display());
        eprintln!("renames each file after its creation date and, when that name is");
        eprintln!("taken, merges it into the existing file and DELETES the original.");
        if !prompt::confirm("Proceed?")? {
            prompt::cancelled(mode);
            return Ok(());
        }
    }

    let report = ops::stamp(dir, StampOptions { keep_name }, &exclude)?;
    report.render(mode);
    Ok(())
}
