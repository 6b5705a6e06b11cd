use std::path::PathBuf;

use crate::domain::{AppError, CachingStrategy, PwaConfig};

/// Command-line values that take precedence over `pwa.toml`.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub output_dir: Option<PathBuf>,
    pub offline_page_name: Option<String>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub message: Option<String>,
    pub raw_message: bool,
    pub cache_name: Option<String>,
    /// Raw strategy label; parsed when applied.
    pub caching_strategy: Option<String>,
    /// Replaces the configured asset list when non-empty.
    pub assets: Vec<String>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut PwaConfig) -> Result<(), AppError> {
        if let Some(value) = self.caching_strategy {
            config.service_worker.caching_strategy = value.parse::<CachingStrategy>()?;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(name) = self.offline_page_name {
            config.offline_page_name = name;
        }
        if let Some(name) = self.name {
            config.manifest.name = name;
        }
        if let Some(short_name) = self.short_name {
            config.manifest.short_name = short_name;
        }
        if let Some(message) = self.message {
            config.offline.message = message;
        }
        if self.raw_message {
            config.offline.escape_message = false;
        }
        if let Some(cache_name) = self.cache_name {
            config.service_worker.cache_name = cache_name;
        }
        if !self.assets.is_empty() {
            config.service_worker.assets = self.assets;
        }
        Ok(())
    }
}
