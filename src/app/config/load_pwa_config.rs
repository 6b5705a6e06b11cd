//! `pwa.toml` loading from the project directory.

use std::path::{Path, PathBuf};

use crate::app::config::pwa_config_dto::PwaConfigDto;
use crate::domain::paths::CONFIG_FILE;
use crate::domain::{AppError, PwaConfig};
use crate::ports::ProjectStore;

/// Load the project configuration.
///
/// An explicit `path` must exist. Without one, `pwa.toml` in the project root
/// is used when present and the built-in defaults otherwise.
pub fn load_pwa_config(
    store: &impl ProjectStore,
    path: Option<&Path>,
) -> Result<PwaConfig, AppError> {
    let config_path = match path {
        Some(explicit) => {
            if !store.file_exists(explicit) {
                return Err(AppError::ConfigMissing(explicit.display().to_string()));
            }
            explicit.to_path_buf()
        }
        None => {
            let implicit = PathBuf::from(CONFIG_FILE);
            if !store.file_exists(&implicit) {
                log::debug!("No {} found, using defaults", CONFIG_FILE);
                return Ok(PwaConfig::default());
            }
            implicit
        }
    };

    log::info!("Loading config from {}", store.resolve_path(&config_path).display());
    let content = store.read_file(&config_path)?;
    parse_pwa_config(&content)
}

/// Parse `pwa.toml` content into a validated configuration.
pub fn parse_pwa_config(content: &str) -> Result<PwaConfig, AppError> {
    let dto: PwaConfigDto = toml::from_str(content)
        .map_err(|e| AppError::ParseError { what: CONFIG_FILE.into(), details: e.to_string() })?;
    PwaConfig::try_from(dto)
}
