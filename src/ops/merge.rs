//! Fold one directory tree into another
//!
//! Each file of the input tree is compared with the file at the same
//! relative path in the output tree. Same size means it is already there and
//! the input copy is deleted; different size or no counterpart means the
//! input copy is moved over. Empty input directories are pruned at the end.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, TidyError, require_dir};
use crate::fsops::{self, Exclude};
use crate::output::{FileError, MergeReport, SkippedFile, Transfer};

/// Merge `input` into `output`
pub fn merge(input: &Path, output: &Path, exclude: &Exclude) -> Result<MergeReport> {
    require_dir(input)?;
    check_distinct(input, output)?;

    log::info!("Processing input directory: {}", input.display());
    log::info!("Output directory: {}", output.display());

    let mut report = MergeReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        ..MergeReport::default()
    };

    // Snapshot first; the tree changes underneath us as files move.
    let entries = WalkDir::new(input)
        .sort_by_file_name()
        .into_iter()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    for entry in entries {
        let path = entry.path();
        let relative = path.strip_prefix(input).unwrap_or(path);
        let target = output.join(relative);

        if entry.file_type().is_dir() {
            if !target.exists() {
                match fs::create_dir_all(&target) {
                    Ok(()) => {
                        log::info!("Creating directory: {}", target.display());
                        report.created_dirs.push(target);
                    },
                    Err(err) => report.errors.push(FileError::new(&target, err)),
                }
            }
            continue;
        }

        if exclude.matches(path) {
            log::debug!("Excluded: {}", path.display());
            report.skipped.push(SkippedFile {
                path: path.to_path_buf(),
                reason: "excluded".to_string(),
            });
            continue;
        }

        match merge_file(path, &target) {
            Ok(Outcome::Deleted) => {
                log::info!("Deleting (no conflict): {}", path.display());
                report.deleted.push(path.to_path_buf());
            },
            Ok(Outcome::Replaced) => {
                log::info!("Conflict (moving): {} -> {}", path.display(), target.display());
                report.conflicts.push(Transfer::new(path, target));
            },
            Ok(Outcome::Moved) => {
                log::info!("Moving (new file): {} -> {}", path.display(), target.display());
                report.moved.push(Transfer::new(path, target));
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound && !path.exists() => {
                log::info!("Skipping (source file moved or deleted): {}", path.display());
                report.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    reason: "source file moved or deleted".to_string(),
                });
            },
            Err(err) => report.errors.push(FileError::new(path, err)),
        }
    }

    report.removed_dirs = fsops::prune_empty_dirs(input, |_| false)?;
    Ok(report)
}

enum Outcome {
    Deleted,
    Replaced,
    Moved,
}

fn merge_file(src: &Path, dst: &Path) -> io::Result<Outcome> {
    let src_len = fs::metadata(src)?.len();
    match fs::metadata(dst) {
        Ok(meta) if !meta.is_file() => Err(io::Error::other(format!(
            "output path {} exists and is not a file",
            dst.display()
        ))),
        Ok(meta) if meta.len() == src_len => {
            fs::remove_file(src)?;
            Ok(Outcome::Deleted)
        },
        Ok(_) => {
            fsops::move_file(src, dst)?;
            Ok(Outcome::Replaced)
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            fsops::move_file(src, dst)?;
            Ok(Outcome::Moved)
        },
        Err(err) => Err(err),
    }
}

/// Reject an output that is the input itself or lives inside it
fn check_distinct(input: &Path, output: &Path) -> Result<()> {
    let input_abs = fs::canonicalize(input)?;
    let output_abs = resolve_lenient(output)?;

    if input_abs == output_abs {
        return Err(TidyError::SameDirectory(input.to_path_buf()));
    }
    if output_abs.starts_with(&input_abs) {
        return Err(TidyError::NestedOutput {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
        });
    }
    Ok(())
}

/// Canonicalize the longest existing prefix of `path` and re-append the rest
fn resolve_lenient(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut existing = absolute.as_path();
    let mut rest = Vec::new();

    loop {
        if existing.exists() {
            let mut resolved = fs::canonicalize(existing)?;
            for part in rest.iter().rev() {
                resolved.push(part);
            }
            return Ok(resolved);
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                rest.push(name.to_os_string());
                existing = parent;
            },
            _ => return Ok(absolute),
        }
    }
}
