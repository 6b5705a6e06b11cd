//! Project-level filesystem operations.
//!
//! Generated artifacts are written and `pwa.toml` is read through this port,
//! so the commands can be exercised against an in-memory store.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for reading project configuration and writing generated files.
///
/// Relative paths are resolved against the store's root directory.
pub trait ProjectStore {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, dir: &Path) -> Result<(), AppError>;

    /// Write UTF-8 content to a file, truncating any existing content.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Check whether a file exists.
    fn file_exists(&self, path: &Path) -> bool;

    /// Resolve a path to an absolute path under the root.
    fn resolve_path(&self, path: &Path) -> PathBuf;
}
