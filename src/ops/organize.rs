//! Gather files into one folder per extension
//!
//! Every file below the root whose extension is listed moves to
//! `root/<ext>/`. Name clashes get a numeric suffix. Directories left empty
//! are removed, except folders named after one of the extensions. The
//! top-level extension folders are never entered.

use std::fs;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, TidyError, require_dir};
use crate::fsops::{self, Exclude};
use crate::naming::{extension_of, unique_sibling};
use crate::output::{FileError, OrganizeReport, Transfer};

/// Trim, lowercase and de-duplicate extensions, dropping a leading dot
#[must_use]
pub fn normalize_extensions<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for ext in raw {
        let ext = ext.as_ref().trim().trim_start_matches('.').to_lowercase();
        if !ext.is_empty() && !out.contains(&ext) {
            out.push(ext);
        }
    }
    out
}

/// Organize `root` by the given extensions
pub fn organize<S: AsRef<str>>(
    root: &Path,
    extensions: &[S],
    exclude: &Exclude,
) -> Result<OrganizeReport> {
    require_dir(root)?;
    let extensions = normalize_extensions(extensions);
    if extensions.is_empty() {
        return Err(TidyError::NoExtensions);
    }

    log::info!("Starting organization in: {}", root.display());
    log::info!("Organizing for extensions: {}", extensions.join(", "));

    let mut report = OrganizeReport {
        root: root.to_path_buf(),
        extensions: extensions.clone(),
        ..OrganizeReport::default()
    };

    for ext in &extensions {
        let folder = root.join(ext);
        if !folder.exists() {
            fs::create_dir_all(&folder)?;
            log::info!("Created directory: {}", folder.display());
            report.created_dirs.push(folder);
        }
    }

    let is_ext_name = |e: &DirEntry| {
        e.file_name().to_str().is_some_and(|n| extensions.iter().any(|x| x == n))
    };
    let is_ext_folder = |e: &DirEntry| e.depth() == 1 && e.file_type().is_dir() && is_ext_name(e);

    // Top-down so `filter_entry` prunes the extension folders before they are
    // entered. Snapshot first; the tree changes underneath us as files move.
    let entries = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_ext_folder(e))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let (dirs, files): (Vec<_>, Vec<_>) =
        entries.into_iter().partition(|e| e.file_type().is_dir());

    for entry in files {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy();

        if exclude.matches(path) {
            log::debug!("Excluded: {}", path.display());
            continue;
        }

        let Some(ext) = extension_of(&name).filter(|e| extensions.contains(e)) else {
            continue;
        };

        let target = unique_sibling(&root.join(&ext).join(&*name));
        match fsops::move_file(path, &target) {
            Ok(()) => {
                log::info!("Moved: '{}' to '{}'", path.display(), target.display());
                report.moved.push(Transfer::new(path, target));
            },
            Err(err) => report.errors.push(FileError::new(path, err)),
        }
    }

    // Reversed pre-order visits every directory after its descendants.
    for entry in dirs.iter().rev() {
        if is_ext_name(entry) {
            continue;
        }
        let path = entry.path();
        match fs::read_dir(path).map(|mut it| it.next().is_none()) {
            Ok(true) => match fs::remove_dir(path) {
                Ok(()) => {
                    log::info!("Deleted empty directory: {}", path.display());
                    report.removed_dirs.push(path.to_path_buf());
                },
                Err(err) => report.errors.push(FileError::new(path, err)),
            },
            Ok(false) => {},
            Err(err) => report.errors.push(FileError::new(path, err)),
        }
    }

    Ok(report)
}
