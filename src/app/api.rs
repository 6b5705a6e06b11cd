//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution. Functions suffixed `_at` take the project root
//! explicitly; the others use the current directory.

use std::path::{Path, PathBuf};

use crate::adapters::{EmbeddedTemplateRenderer, FilesystemProjectStore};
use crate::app::AppContext;
use crate::app::commands;
use crate::app::config::{ConfigOverrides, load_pwa_config};

pub use crate::app::commands::GeneratedFile;
pub use crate::app::commands::setup::SetupOutcome;
pub use crate::domain::{
    AppError, CachingStrategy, ManifestDescriptor, ManifestIcon, OfflinePageConfig, PwaConfig,
    ServiceWorkerConfig,
};

/// Create an `AppContext` for a given path.
fn create_context(
    root: PathBuf,
) -> Result<AppContext<FilesystemProjectStore, EmbeddedTemplateRenderer>, AppError> {
    let store = FilesystemProjectStore::new(root);
    let templates = EmbeddedTemplateRenderer::new()?;
    Ok(AppContext::new(store, templates))
}

// =============================================================================
// Configuration API
// =============================================================================

/// Load `pwa.toml` (or `config_path`) from the project root and apply overrides.
pub fn load_config_at(
    root: impl Into<PathBuf>,
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<PwaConfig, AppError> {
    let store = FilesystemProjectStore::new(root.into());
    let mut config = load_pwa_config(&store, config_path)?;
    overrides.apply(&mut config)?;
    Ok(config)
}

/// Write a default `pwa.toml` in the current directory.
pub fn init() -> Result<PathBuf, AppError> {
    init_at(std::env::current_dir()?)
}

/// Write a default `pwa.toml` at the specified project root.
pub fn init_at(root: impl Into<PathBuf>) -> Result<PathBuf, AppError> {
    let ctx = create_context(root.into())?;
    commands::init::execute(&ctx)
}

// =============================================================================
// Generator API
// =============================================================================

/// Write `manifest.json` into `output_dir` (relative to `root`).
pub fn generate_manifest_at(
    root: impl Into<PathBuf>,
    output_dir: &Path,
    descriptor: &ManifestDescriptor,
) -> Result<GeneratedFile, AppError> {
    let store = FilesystemProjectStore::new(root.into());
    commands::manifest::execute(&store, output_dir, descriptor)
}

/// Write the offline page as `output_dir/file_name` (relative to `root`).
pub fn create_offline_page_at(
    root: impl Into<PathBuf>,
    output_dir: &Path,
    file_name: &str,
    page: &OfflinePageConfig,
) -> Result<GeneratedFile, AppError> {
    let ctx = create_context(root.into())?;
    commands::offline_page::execute(&ctx, output_dir, file_name, page)
}

/// Write `service-worker.js` into `output_dir` (relative to `root`).
pub fn generate_service_worker_at(
    root: impl Into<PathBuf>,
    output_dir: &Path,
    config: &ServiceWorkerConfig,
) -> Result<GeneratedFile, AppError> {
    let ctx = create_context(root.into())?;
    commands::service_worker::execute(&ctx, output_dir, config)
}

// =============================================================================
// Setup API
// =============================================================================

/// Generate all artifacts in the current directory.
pub fn setup(config: &PwaConfig) -> Result<SetupOutcome, AppError> {
    setup_at(std::env::current_dir()?, config)
}

/// Generate manifest, offline page and service worker under `root`.
pub fn setup_at(root: impl Into<PathBuf>, config: &PwaConfig) -> Result<SetupOutcome, AppError> {
    let ctx = create_context(root.into())?;
    commands::setup::execute(&ctx, config)
}
