//! Manifest writer - renders `manifest.json`.

use std::path::Path;

use crate::app::commands::{GeneratedFile, write_artifact};
use crate::domain::paths::MANIFEST_FILE;
use crate::domain::{AppError, ManifestDescriptor};
use crate::ports::ProjectStore;

/// Write `manifest.json` into `output_dir`, creating the directory if needed.
pub fn execute(
    store: &impl ProjectStore,
    output_dir: &Path,
    descriptor: &ManifestDescriptor,
) -> Result<GeneratedFile, AppError> {
    let json = descriptor.to_json()?;
    write_artifact(store, output_dir, MANIFEST_FILE, &json)
}
