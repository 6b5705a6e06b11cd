//! Test double for `ProjectStore`.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ProjectStore;

const MEMORY_ROOT: &str = "/memory";

/// In-memory implementation of `ProjectStore` for unit tests.
///
/// Writing into a directory that was never created fails like the real
/// filesystem does, so tests can observe whether writers ensure their
/// output directory.
#[derive(Clone, Debug, Default)]
pub struct MemoryProjectStore {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    dirs: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file without going through the port.
    pub fn insert(&self, path: impl Into<PathBuf>, content: &str) {
        self.files.lock().unwrap().insert(path.into(), content.to_string());
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    pub fn dir_exists(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.lock().unwrap().contains(path.as_ref())
    }
}

impl ProjectStore for MemoryProjectStore {
    fn create_dir_all(&self, dir: &Path) -> Result<(), AppError> {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in dir.ancestors().filter(|a| !a.as_os_str().is_empty()) {
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !self.dir_exists(parent) {
                return Err(AppError::from(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Mock directory not found: {}", parent.display()),
                )));
            }
        }
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.get(path).ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        Path::new(MEMORY_ROOT).join(path)
    }
}
