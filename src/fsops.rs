//! Filesystem primitives shared by the commands

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate};
use walkdir::WalkDir;

use crate::error::{Result, TidyError};

/// Move `src` to `dst`, replacing `dst` if it exists
///
/// Falls back to copy + delete when a plain rename is refused, which is
/// what happens across filesystems.
pub fn move_file(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(err),
        Err(err) => {
            log::debug!("rename {} -> {} failed ({err}), copying", src.display(), dst.display());
            fs::copy(src, dst).map_err(|_| err)?;
            fs::remove_file(src)
        },
    }
}

/// Append UTF-8 text to `dst`, creating it when missing
///
/// With `ensure_newline`, a `\n` is written first if `dst` has content that
/// does not already end with one.
pub fn append_text(dst: &Path, text: &str, ensure_newline: bool) -> io::Result<()> {
    let needs_newline = ensure_newline && !ends_with_newline(dst)?;
    let mut file = OpenOptions::new().create(true).append(true).open(dst)?;
    if needs_newline {
        file.write_all(b"\n")?;
    }
    file.write_all(text.as_bytes())
}

/// True when the file is empty, missing, or ends with `\n`
fn ends_with_newline(path: &Path) -> io::Result<bool> {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(true),
        Err(err) => return Err(err),
    };
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0_u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// Remove empty directories under `root`, deepest first, `root` included
///
/// Directories for which `keep` returns true are left alone. Emptiness is
/// checked when a directory is reached, so a chain of nested empty folders
/// goes away in one call.
pub fn prune_empty_dirs(root: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for entry in WalkDir::new(root).contents_first(true) {
        let entry = entry?;
        if !entry.file_type().is_dir() || keep(entry.path()) {
            continue;
        }
        if fs::read_dir(entry.path())?.next().is_none() {
            match fs::remove_dir(entry.path()) {
                Ok(()) => {
                    log::info!("Removed empty directory: {}", entry.path().display());
                    removed.push(entry.path().to_path_buf());
                },
                Err(err) => {
                    log::warn!("Could not remove directory {}: {err}", entry.path().display());
                },
            }
        }
    }

    Ok(removed)
}

/// Date a file came into being, in local time
///
/// Uses the birth time where the platform records one, otherwise the last
/// modification time.
pub fn creation_date(path: &Path) -> io::Result<NaiveDate> {
    let meta = fs::metadata(path)?;
    let time = meta.created().or_else(|_| meta.modified())?;
    Ok(DateTime::<Local>::from(time).date_naive())
}

/// File-name patterns to leave untouched
#[derive(Debug, Clone, Default)]
pub struct Exclude {
    patterns: Vec<glob::Pattern>,
}

impl Exclude {
    /// Compile glob patterns such as `.DS_Store` or `*.tmp`
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                glob::Pattern::new(p.as_ref()).map_err(|source| TidyError::Pattern {
                    pattern: p.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Whether the final component of `path` matches any pattern
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.patterns.iter().any(|p| p.matches(name))
    }
}
