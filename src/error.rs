//! Error types shared by every dirtidy operation

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an operation before or while it runs
///
/// Failures that only concern a single file are not raised as errors; they
/// are recorded in the operation's report instead.
#[derive(Debug, Error)]
pub enum TidyError {
    /// Path does not exist
    #[error("path does not exist: {0}")]
    NotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Source and destination resolve to the same directory
    #[error("input and output directories cannot be the same: {0}")]
    SameDirectory(PathBuf),

    /// Destination lives inside the source tree
    #[error("output directory {output} is inside input directory {input}")]
    NestedOutput {
        /// Source directory
        input: PathBuf,
        /// Destination directory
        output: PathBuf,
    },

    /// No usable extension was supplied
    #[error("no extensions given (use --ext or set organize.extensions in the config)")]
    NoExtensions,

    /// Glob pattern in the exclude list could not be compiled
    #[error("invalid exclude pattern {pattern:?}: {source}")]
    Pattern {
        /// Pattern as written
        pattern: String,
        /// Underlying parse error
        #[source]
        source: glob::PatternError,
    },

    /// Config file could not be parsed
    #[error("invalid config file {path}: {source}")]
    ConfigParse {
        /// Config file path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },

    /// Config could not be serialized
    #[error("could not serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// IO error during file operations
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Error walking directory tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Result alias for dirtidy operations
pub type Result<T> = std::result::Result<T, TidyError>;

/// Ensure `path` exists and is a directory
pub fn require_dir(path: &std::path::Path) -> Result<()> {
    if !path.exists() {
        return Err(TidyError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(TidyError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}
