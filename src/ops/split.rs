//! Split a chat-style log into one markdown file per day
//!
//! A line carrying a `[M/D/YY, H:MM:SS AM]` timestamp opens a segment. The
//! segment file `YYYY_MM_DD.md` receives the timestamp line, the user label,
//! its own file name, and every following line up to the next timestamp.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::error::{Result, TidyError};
use crate::naming::{LogDate, log_file_name, parse_log_date};
use crate::output::{FileError, SegmentFile, SplitReport};

struct Segment {
    name: String,
    buf: String,
    lines: usize,
}

/// Split `input` into dated segment files under `out_dir`
///
/// Segments sharing a date within one run end up in the same file, in
/// order. A segment file left over from an earlier run is overwritten.
pub fn split_log(input: &Path, user: &str, out_dir: &Path) -> Result<SplitReport> {
    let content = match fs::read_to_string(input) {
        Ok(c) => c,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(TidyError::NotFound(input.to_path_buf()));
        },
        Err(err) => return Err(err.into()),
    };
    fs::create_dir_all(out_dir)?;

    let mut report = SplitReport {
        input: input.to_path_buf(),
        output_dir: out_dir.to_path_buf(),
        ..SplitReport::default()
    };
    let mut written: HashMap<String, usize> = HashMap::new();
    let mut current: Option<Segment> = None;

    for line in content.split_inclusive('\n') {
        match parse_log_date(line) {
            Some(LogDate::Valid(date)) => {
                if let Some(seg) = current.take() {
                    flush(seg, out_dir, &mut written, &mut report);
                }
                let name = log_file_name(date);
                log::debug!("Segment {name} starts at: {}", line.trim_end());
                current = Some(Segment {
                    buf: format!("{line} {user}:  {name}: "),
                    name,
                    lines: 0,
                });
            },
            Some(LogDate::Invalid(raw)) => {
                if let Some(seg) = current.take() {
                    flush(seg, out_dir, &mut written, &mut report);
                }
                log::warn!("Could not parse date {raw} from line: {}", line.trim_end());
                report.invalid_dates.push(line.trim_end().to_string());
            },
            None => match current.as_mut() {
                Some(seg) => {
                    seg.buf.push_str(line);
                    seg.lines += 1;
                },
                None => report.discarded_lines += 1,
            },
        }
    }

    if let Some(seg) = current.take() {
        flush(seg, out_dir, &mut written, &mut report);
    }

    Ok(report)
}

fn flush(
    seg: Segment,
    out_dir: &Path,
    written: &mut HashMap<String, usize>,
    report: &mut SplitReport,
) {
    let path = out_dir.join(&seg.name);
    let existing = written.get(&seg.name).copied();

    let result = if existing.is_some() {
        append(&path, &seg.buf)
    } else {
        fs::write(&path, &seg.buf)
    };

    if let Err(err) = result {
        report.errors.push(FileError::new(&path, err));
        return;
    }

    if let Some(idx) = existing {
        let file = &mut report.files[idx];
        file.segments += 1;
        file.lines += seg.lines;
        log::info!("Appended segment to {}", path.display());
    } else {
        log::info!("Created {}", path.display());
        written.insert(seg.name.clone(), report.files.len());
        report.files.push(SegmentFile {
            name: seg.name,
            path,
            segments: 1,
            lines: seg.lines,
        });
    }
}

fn append(path: &Path, text: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).open(path)?;
    file.write_all(text.as_bytes())
}
