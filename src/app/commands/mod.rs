pub mod init;
pub mod manifest;
pub mod offline_page;
pub mod service_worker;
pub mod setup;

use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectStore;

/// A file written by one of the generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name inside the output directory.
    pub file_name: String,
    /// Absolute path of the written file.
    pub path: PathBuf,
}

/// Write `content` to `output_dir/file_name`, creating the parent directory.
///
/// `file_name` may contain subdirectories (`pages/offline.html`).
pub(crate) fn write_artifact(
    store: &impl ProjectStore,
    output_dir: &Path,
    file_name: &str,
    content: &str,
) -> Result<GeneratedFile, AppError> {
    let target = output_dir.join(file_name);
    store.create_dir_all(target.parent().unwrap_or(output_dir))?;
    store.write_file(&target, content)?;

    let path = store.resolve_path(&target);
    log::info!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(GeneratedFile { file_name: file_name.to_string(), path })
}
