//! Filename and date parsing
//!
//! Pure helpers with no side effects apart from [`unique_sibling`], which
//! probes the filesystem for existing names.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static UNDERSCORED_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4})_(\d{2})_(\d{2})").expect("underscored date regex is valid")
});

static DATE_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)_(\d{4}_\d{2}_\d{2})$").expect("date suffix regex is valid")
});

static LOG_STAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(\d{1,2})/(\d{1,2})/(\d{2}),\s*(\d{1,2}:\d{2}:\d{2})\s*(AM|PM)\]")
        .expect("log stamp regex is valid")
});

/// A `YYYY_MM_DD` date found in a file name, kept exactly as written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParts {
    /// Four-digit year
    pub year: String,
    /// Two-digit month
    pub month: String,
    /// Two-digit day
    pub day: String,
}

impl DateParts {
    /// `YYYY_MM_DD`
    #[must_use]
    pub fn stem(&self) -> String {
        format!("{}_{}_{}", self.year, self.month, self.day)
    }
}

/// Find the first `YYYY_MM_DD` anywhere in `name`
///
/// The digits are not checked against the calendar, so `2024_13_40` is
/// still accepted.
#[must_use]
pub fn find_underscored_date(name: &str) -> Option<DateParts> {
    let caps = UNDERSCORED_DATE_RE.captures(name)?;
    Some(DateParts {
        year: caps[1].to_string(),
        month: caps[2].to_string(),
        day: caps[3].to_string(),
    })
}

/// Format a date as `YYYY_MM_DD`
#[must_use]
pub fn date_stem(date: NaiveDate) -> String {
    date.format("%Y_%m_%d").to_string()
}

/// Split a file name into stem and extension (extension keeps its dot)
///
/// Leading dots never start an extension: `.bashrc` has none, while
/// `archive.tar.gz` splits into `archive.tar` and `.gz`.
#[must_use]
pub fn split_ext(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if name[..idx].chars().any(|c| c != '.') => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    }
}

/// Lowercase text after the last dot, if there is any
#[must_use]
pub fn extension_of(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Remove a trailing `_YYYY_MM_DD` from a stem when it is a real date
///
/// Returns the remaining base and the date that was removed.
#[must_use]
pub fn strip_date_suffix(stem: &str) -> (&str, Option<NaiveDate>) {
    let Some(caps) = DATE_SUFFIX_RE.captures(stem) else {
        return (stem, None);
    };
    let (Some(base), Some(date)) = (caps.get(1), caps.get(2)) else {
        return (stem, None);
    };
    match NaiveDate::parse_from_str(date.as_str(), "%Y_%m_%d") {
        Ok(parsed) => (base.as_str(), Some(parsed)),
        Err(_) => (stem, None),
    }
}

/// First non-existing path among `path`, `stem_1.ext`, `stem_2.ext`, ...
#[must_use]
pub fn unique_sibling(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let name = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
    let (stem, ext) = split_ext(&name);
    let parent = path.parent().unwrap_or_else(|| Path::new(""));

    let mut counter = 1_u32;
    loop {
        let candidate = parent.join(format!("{stem}_{counter}{ext}"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Outcome of matching a chat-log timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDate {
    /// Timestamp with a real calendar date
    Valid(NaiveDate),
    /// Timestamp-shaped text whose date does not exist (e.g. `13/40/24`)
    Invalid(String),
}

/// Look for a `[M/D/YY, H:MM:SS AM]` timestamp anywhere in `line`
///
/// Two-digit years are read as 2000-2099.
#[must_use]
pub fn parse_log_date(line: &str) -> Option<LogDate> {
    let caps = LOG_STAMP_RE.captures(line)?;
    let raw = caps[0].to_string();

    let month = caps[1].parse::<u32>().ok();
    let day = caps[2].parse::<u32>().ok();
    let year = caps[3].parse::<i32>().ok().map(|yy| 2000 + yy);

    let date = match (year, month, day) {
        (Some(y), Some(m), Some(d)) => NaiveDate::from_ymd_opt(y, m, d),
        _ => None,
    };

    Some(date.map_or(LogDate::Invalid(raw), LogDate::Valid))
}

/// Output file name for a log segment: `YYYY_MM_DD.md`
#[must_use]
pub fn log_file_name(date: NaiveDate) -> String {
    format!("{}.md", date_stem(date))
}
