//! Shared test fixtures and helpers

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch directory tree that is deleted on drop
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Root of the tree
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a relative entry
    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write a file, creating parent directories
    pub fn add_file(&self, rel: &str, content: &str) -> PathBuf {
        let full = self.join(rel);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content).unwrap();
        full
    }

    /// Write raw bytes, creating parent directories
    pub fn add_bytes(&self, rel: &str, content: &[u8]) -> PathBuf {
        let full = self.join(rel);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content).unwrap();
        full
    }

    /// Create a directory (and parents)
    pub fn add_dir(&self, rel: &str) -> PathBuf {
        let full = self.join(rel);
        fs::create_dir_all(&full).unwrap();
        full
    }

    /// Read a file as text
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.join(rel)).unwrap()
    }

    /// Whether a relative entry exists
    pub fn exists(&self, rel: &str) -> bool {
        self.join(rel).exists()
    }

    /// Sorted relative paths of all files in the tree
    pub fn files(&self) -> Vec<String> {
        let mut out: Vec<String> = walkdir::WalkDir::new(self.path())
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                e.path()
                    .strip_prefix(self.path())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        out.sort();
        out
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Today's date as `YYYY_MM_DD`, matching what stamping produces for new files
pub fn today_stem() -> String {
    chrono::Local::now().format("%Y_%m_%d").to_string()
}
