//! Journal housekeeping: filing dated notes and stamping undated ones
//!
//! Both operations merge same-day notes by appending text, so they are only
//! meant for plain-text files. Anything that is not valid UTF-8 is reported
//! and left where it is.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use walkdir::WalkDir;

use crate::error::{Result, require_dir};
use crate::fsops::{self, Exclude};
use crate::naming::{date_stem, find_underscored_date, split_ext, strip_date_suffix};
use crate::output::{CollectReport, FileError, SkippedFile, StampReport, Transfer};

/// File the notes directly inside `input` under `output/<YYYY>/`
///
/// A note named `standup 2024_03_05.md` becomes `output/2024/2024_03_05.md`.
/// When that file already exists the note is appended to it and deleted.
pub fn collect(input: &Path, output: &Path, exclude: &Exclude) -> Result<CollectReport> {
    require_dir(input)?;

    let mut report = CollectReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        ..CollectReport::default()
    };

    if !output.is_dir() {
        fs::create_dir_all(output)?;
        log::info!("Output directory '{}' created.", output.display());
        report.created_dirs.push(output.to_path_buf());
    }

    log::info!("Scanning files in '{}'...", input.display());

    let mut files: Vec<PathBuf> = fs::read_dir(input)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    files.sort();

    for path in files {
        if path.is_dir() {
            continue;
        }
        let name = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();

        if exclude.matches(&path) {
            report.skipped.push(SkippedFile {
                path,
                reason: "excluded".to_string(),
            });
            continue;
        }

        let Some(date) = find_underscored_date(&name) else {
            log::info!("Skipped: '{name}' (date not found or incorrect format).");
            report.skipped.push(SkippedFile {
                path,
                reason: "date not found or incorrect format".to_string(),
            });
            continue;
        };

        let (_, ext) = split_ext(&name);
        let year_dir = output.join(&date.year);
        let target = year_dir.join(format!("{}{ext}", date.stem()));

        if !year_dir.exists() {
            if let Err(err) = fs::create_dir_all(&year_dir) {
                report.errors.push(FileError::new(&path, err));
                continue;
            }
            log::info!("Created directory: '{}'", year_dir.display());
            report.created_dirs.push(year_dir);
        }

        if target.exists() {
            log::info!("Merging: '{name}' into existing '{}'", target.display());
            match append_and_remove(&path, &target) {
                Ok(()) => {
                    log::info!("Merged and removed original: '{name}'");
                    report.merged.push(Transfer::new(path, target));
                },
                Err(err) => report.errors.push(FileError::new(&path, err)),
            }
        } else {
            match fsops::move_file(&path, &target) {
                Ok(()) => {
                    log::info!("Moved: '{name}' to '{}'", target.display());
                    report.moved.push(Transfer::new(path, target));
                },
                Err(err) => report.errors.push(FileError::new(&path, err)),
            }
        }
    }

    Ok(report)
}

fn append_and_remove(src: &Path, dst: &Path) -> std::io::Result<()> {
    let content = fs::read_to_string(src)?;
    fsops::append_text(dst, &content, true)?;
    fs::remove_file(src)
}

/// Naming options for [`stamp`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StampOptions {
    /// Name files `<base>_YYYY_MM_DD.ext` instead of `YYYY_MM_DD.ext`
    pub keep_name: bool,
}

/// Header every stamped note starts with: `# <stem>`
#[must_use]
pub fn header_for(name: &str) -> String {
    let (stem, _) = split_ext(name);
    format!("# {stem}")
}

/// Add a `# name` header to every file under `dir` and rename it after its
/// creation date, merging into an existing file of that name
pub fn stamp(dir: &Path, options: StampOptions, exclude: &Exclude) -> Result<StampReport> {
    require_dir(dir)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && !exclude.matches(entry.path()) {
            files.push(entry.into_path());
        }
    }

    let mut report = StampReport {
        root: dir.to_path_buf(),
        total: files.len(),
        ..StampReport::default()
    };

    if files.is_empty() {
        log::info!("No eligible files found in '{}'.", dir.display());
        return Ok(report);
    }
    log::info!("Found {} eligible files to process.", files.len());

    for (idx, path) in files.iter().enumerate() {
        log::info!("Processing file {}/{}: {}", idx + 1, files.len(), path.display());
        if let Err(err) = stamp_file(path, options, &mut report) {
            report.errors.push(FileError::new(path, err));
        }
    }

    Ok(report)
}

fn stamp_file(path: &Path, options: StampOptions, report: &mut StampReport) -> std::io::Result<()> {
    let name = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
    let (stem, ext) = split_ext(&name);

    // Read the date before touching the file: the fallback is mtime.
    let created = date_stem(fsops::creation_date(path)?);

    let header = header_for(&name);
    let mut content = fs::read_to_string(path)?;
    if content.starts_with(&header) {
        log::debug!("Filename header already exists in: '{name}'");
    } else {
        content = format!("{header}\n{content}");
        fs::write(path, &content)?;
        log::info!("Added filename header to: '{name}'");
        report.headers_added.push(path.to_path_buf());
    }

    let target_name = if options.keep_name {
        let (base, _) = strip_date_suffix(stem);
        format!("{base}_{created}{ext}")
    } else {
        format!("{created}{ext}")
    };
    let target = path.with_file_name(&target_name);

    if name.to_lowercase() == target_name.to_lowercase() {
        log::info!("File '{name}' is already named correctly.");
        report.already_named.push(path.to_path_buf());
        return Ok(());
    }

    if target.exists() {
        log::info!("Target file '{target_name}' exists. Merging content from '{name}'.");
        let marker = format!(
            "\n\n# --- Merged content from: {name} (Source file's creation date: {created}, \
             Merge performed on: {}) ---\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        fsops::append_text(&target, &format!("{marker}{content}"), false)?;
        fs::remove_file(path)?;
        log::info!("Deleted original file: '{name}'.");
        report.merged.push(Transfer::new(path, target));
    } else {
        fs::rename(path, &target)?;
        log::info!("Renamed '{name}' to '{target_name}'.");
        report.renamed.push(Transfer::new(path, target));
    }

    Ok(())
}
