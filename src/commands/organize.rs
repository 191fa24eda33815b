//! Gather files into per-extension folders

use std::path::Path;

use dirtidy::TidyError;
use dirtidy::ops;
use dirtidy::output::OutputMode;

use super::prompt;

/// Organize `root` by extension, asking first unless `yes` is set
pub fn organize(
    root: &Path,
    extensions: &[String],
    yes: bool,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let exclude = config.exclude()?;

    // Flags win over the config file.
    let extensions = if extensions.is_empty() {
        ops::normalize_extensions(&config.organize.extensions)
    } else {
        ops::normalize_extensions(extensions)
    };
    if extensions.is_empty() {
        return Err(TidyError::NoExtensions.into());
    }
    if !root.is_dir() {
        return Err(TidyError::NotADirectory(root.to_path_buf()).into());
    }

    if !yes {
        eprintln!(
            "This moves every file with extensions '{}' under '{}' into per-extension folders",
            extensions.join(", "),
            root.display()
        );
        eprintln!("and deletes directories left empty.");
        if !prompt::confirm("Proceed?")? {
            prompt::cancelled(mode);
            return Ok(());
        }
    }

    let report = ops::organize(root, &extensions, &exclude)?;
    report.render(mode);
    Ok(())
}
