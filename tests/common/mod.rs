//! Shared testing utilities for pwagen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `pwagen` binary within the project directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("pwagen").expect("Failed to locate pwagen binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// Default output directory inside the project.
    pub fn output_dir(&self) -> PathBuf {
        self.work_dir.join("public")
    }

    /// Write `pwa.toml` into the project directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("pwa.toml"), content).expect("Failed to write pwa.toml");
    }

    /// Read a generated file from the default output directory.
    pub fn read_output(&self, file_name: &str) -> String {
        let path = self.output_dir().join(file_name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Parse the generated manifest.
    pub fn read_manifest(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_output("manifest.json"))
            .expect("manifest.json should be valid JSON")
    }

    /// Run `f` with the project directory as the process working directory.
    ///
    /// Callers must be `#[serial]`.
    pub fn with_work_dir<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(&self.work_dir).expect("Failed to enter work directory");
        let result = f();
        std::env::set_current_dir(original).expect("Failed to restore current directory");
        result
    }
}
