//! Output formatting for human and JSON modes
//!
//! Every operation returns a report from this module. Reports render either
//! as a short human-readable summary or as pretty-printed JSON. Per-file
//! actions are logged while the operation runs, so the human summary only
//! repeats counts and failures.

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A file that changed location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transfer {
    /// Where the file was
    pub from: PathBuf,
    /// Where its content ended up
    pub to: PathBuf,
}

impl Transfer {
    /// Create a transfer record
    #[must_use]
    pub fn new(from: impl Into<PathBuf>, to: impl Into<PathBuf>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// A file that could not be processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileError {
    /// The file involved
    pub path: PathBuf,
    /// What went wrong
    pub message: String,
}

impl FileError {
    /// Create an error record, logging it as a warning
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        let path = path.into();
        let message = message.to_string();
        log::warn!("{}: {message}", path.display());
        Self { path, message }
    }
}

/// A file left in place on purpose
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    /// The file involved
    pub path: PathBuf,
    /// Why it was left alone
    pub reason: String,
}

/// Result of merging one directory tree into another
#[derive(Debug, Clone, Default, Serialize)]
pub struct MergeReport {
    /// Source directory
    pub input: PathBuf,
    /// Destination directory
    pub output: PathBuf,
    /// Files moved to a free destination
    pub moved: Vec<Transfer>,
    /// Files that replaced a same-named destination of different size
    pub conflicts: Vec<Transfer>,
    /// Source files deleted because the destination already matched
    pub deleted: Vec<PathBuf>,
    /// Files left alone (excluded or vanished mid-run)
    pub skipped: Vec<SkippedFile>,
    /// Destination directories created
    pub created_dirs: Vec<PathBuf>,
    /// Empty source directories removed afterwards
    pub removed_dirs: Vec<PathBuf>,
    /// Files that failed
    pub errors: Vec<FileError>,
}

/// Result of gathering files into per-extension folders
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganizeReport {
    /// Folder that was organized
    pub root: PathBuf,
    /// Normalized extensions that were gathered
    pub extensions: Vec<String>,
    /// Extension folders created
    pub created_dirs: Vec<PathBuf>,
    /// Files moved into an extension folder
    pub moved: Vec<Transfer>,
    /// Directories removed after becoming empty
    pub removed_dirs: Vec<PathBuf>,
    /// Files that failed
    pub errors: Vec<FileError>,
}

/// Result of filing dated notes into year folders
#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectReport {
    /// Source directory
    pub input: PathBuf,
    /// Destination directory
    pub output: PathBuf,
    /// Notes moved to a new dated file
    pub moved: Vec<Transfer>,
    /// Notes appended to an existing dated file
    pub merged: Vec<Transfer>,
    /// Notes without a date in their name, or excluded
    pub skipped: Vec<SkippedFile>,
    /// Year folders (and the output folder) created
    pub created_dirs: Vec<PathBuf>,
    /// Notes that failed
    pub errors: Vec<FileError>,
}

/// Result of stamping notes with a header and their creation date
#[derive(Debug, Clone, Default, Serialize)]
pub struct StampReport {
    /// Directory that was processed
    pub root: PathBuf,
    /// Number of files found
    pub total: usize,
    /// Files that received a `# name` header
    pub headers_added: Vec<PathBuf>,
    /// Files renamed to their dated name
    pub renamed: Vec<Transfer>,
    /// Files appended to an existing dated file and deleted
    pub merged: Vec<Transfer>,
    /// Files that already carried their dated name
    pub already_named: Vec<PathBuf>,
    /// Files that failed
    pub errors: Vec<FileError>,
}

impl StampReport {
    /// Files that ended up renamed, merged or confirmed
    #[must_use]
    pub fn processed(&self) -> usize {
        self.renamed.len() + self.merged.len() + self.already_named.len()
    }
}

/// One markdown file written by the log splitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentFile {
    /// File name (`YYYY_MM_DD.md`)
    pub name: String,
    /// Full path written
    pub path: PathBuf,
    /// Dated segments written into this file
    pub segments: usize,
    /// Content lines written (date lines excluded)
    pub lines: usize,
}

/// Result of splitting a log by date
#[derive(Debug, Clone, Default, Serialize)]
pub struct SplitReport {
    /// Log that was read
    pub input: PathBuf,
    /// Folder the segments were written to
    pub output_dir: PathBuf,
    /// Files written, in order of first appearance
    pub files: Vec<SegmentFile>,
    /// Timestamp lines whose date does not exist
    pub invalid_dates: Vec<String>,
    /// Lines dropped because no valid segment was open
    pub discarded_lines: usize,
    /// Segment files that could not be written
    pub errors: Vec<FileError>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn render_errors(errors: &[FileError]) {
    if errors.is_empty() {
        return;
    }
    println!("\n{}", "Errors:".red().bold());
    for e in errors {
        println!("  {}: {}", e.path.display(), e.message);
    }
}

fn render_skipped(skipped: &[SkippedFile]) {
    if skipped.is_empty() {
        return;
    }
    println!("\n{}", "Skipped:".yellow());
    for s in skipped {
        println!("  {} ({})", s.path.display(), s.reason);
    }
}

impl MergeReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}", "--- Merge Summary ---".bold());
        println!("Input:  {}", self.input.display());
        println!("Output: {}", self.output.display());
        println!("Moved (new file): {}", self.moved.len());
        println!("Moved (conflict, replaced): {}", self.conflicts.len());
        println!("Deleted (duplicate): {}", self.deleted.len());
        println!("Directories created: {}", self.created_dirs.len());
        println!("Empty directories removed: {}", self.removed_dirs.len());
        render_skipped(&self.skipped);
        render_errors(&self.errors);
        println!("\nProcessing complete.");
    }
}

impl OrganizeReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}", "--- Organization Summary ---".bold());
        println!("Folder: {}", self.root.display());
        println!("Extensions: {}", self.extensions.join(", "));
        println!("Total files moved: {}", self.moved.len());
        println!("Total empty directories deleted: {}", self.removed_dirs.len());
        render_errors(&self.errors);
        println!("\nOrganization complete.");
    }
}

impl CollectReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}", "--- Summary ---".bold());
        println!("Successfully moved new files: {}", self.moved.len());
        println!("Successfully merged files: {}", self.merged.len());
        println!(
            "Skipped files (due to errors or no date): {}",
            self.skipped.len() + self.errors.len()
        );
        render_skipped(&self.skipped);
        render_errors(&self.errors);
        println!("\nFile organization complete.");
    }
}

impl StampReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.total == 0 {
            println!("No eligible files found in '{}'.", self.root.display());
            return;
        }
        println!("{}", "--- Stamp Summary ---".bold());
        println!("Total eligible files found: {}", self.total);
        println!("Headers added: {}", self.headers_added.len());
        println!("Renamed: {}", self.renamed.len());
        println!("Merged: {}", self.merged.len());
        println!("Already named correctly: {}", self.already_named.len());
        println!("Successfully processed: {}", self.processed());
        println!("Files skipped due to errors: {}", self.total.saturating_sub(self.processed()));
        render_errors(&self.errors);
    }
}

impl SplitReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.files.is_empty() {
            println!("No dated lines found in {}.", self.input.display());
        }
        for f in &self.files {
            println!(
                "{} {} ({} segment(s), {} line(s))",
                "Wrote".green(),
                f.path.display(),
                f.segments,
                f.lines
            );
        }
        if !self.invalid_dates.is_empty() {
            println!("\n{}", "Unparseable dates (segments skipped):".yellow());
            for d in &self.invalid_dates {
                println!("  {d}");
            }
        }
        if self.discarded_lines > 0 {
            println!("\nDiscarded {} line(s) outside any dated segment.", self.discarded_lines);
        }
        render_errors(&self.errors);
        println!("\nProcessing complete.");
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}
