use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectStore;

/// Filesystem-based output store rooted at a project directory.
#[derive(Debug, Clone)]
pub struct FilesystemProjectStore {
    root: PathBuf,
}

impl FilesystemProjectStore {
    /// Create a store for the given root directory.
    ///
    /// A relative root is resolved against the current directory so every
    /// resolved path is absolute.
    pub fn new(root: PathBuf) -> Self {
        let root = std::path::absolute(&root).unwrap_or(root);
        Self { root }
    }

    /// Create a store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }
}

impl ProjectStore for FilesystemProjectStore {
    fn create_dir_all(&self, dir: &Path) -> Result<(), AppError> {
        fs::create_dir_all(self.resolve_path(dir))?;
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(self.resolve_path(path), content)?;
        Ok(())
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.resolve_path(path))?)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.resolve_path(path).is_file()
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        // Absolute paths replace the root when joined.
        self.root.join(path)
    }
}
