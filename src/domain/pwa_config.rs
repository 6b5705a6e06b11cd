//! Aggregate configuration for a full setup run.

use std::path::PathBuf;

use crate::domain::paths::{DEFAULT_OFFLINE_PAGE_FILE, DEFAULT_OUTPUT_DIR};
use crate::domain::{CachingStrategy, ManifestDescriptor, OfflinePageConfig, ServiceWorkerConfig};

/// Service worker settings that are configured directly.
///
/// The offline page path is not part of this struct; it comes from
/// [`PwaConfig::offline_page_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceWorkerSettings {
    pub cache_name: String,
    pub assets: Vec<String>,
    pub caching_strategy: CachingStrategy,
}

impl Default for ServiceWorkerSettings {
    fn default() -> Self {
        Self {
            cache_name: "pwa-cache-v1".to_string(),
            assets: ["/", "/index.html", "/styles.css", "/app.js", "/manifest.json"]
                .into_iter()
                .map(String::from)
                .collect(),
            caching_strategy: CachingStrategy::default(),
        }
    }
}

/// Configuration consumed by the setup pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PwaConfig {
    /// Directory receiving all generated files.
    pub output_dir: PathBuf,
    /// File name of the offline page, shared by the page writer and the
    /// service worker's fallback path.
    pub offline_page_name: String,
    pub manifest: ManifestDescriptor,
    pub offline: OfflinePageConfig,
    pub service_worker: ServiceWorkerSettings,
}

impl Default for PwaConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            offline_page_name: DEFAULT_OFFLINE_PAGE_FILE.to_string(),
            manifest: ManifestDescriptor::default(),
            offline: OfflinePageConfig::default(),
            service_worker: ServiceWorkerSettings::default(),
        }
    }
}

impl PwaConfig {
    pub fn service_worker_config(&self) -> ServiceWorkerConfig {
        ServiceWorkerConfig {
            cache_name: self.service_worker.cache_name.clone(),
            assets: self.service_worker.assets.clone(),
            offline_page: self.offline_page_name.clone(),
            caching_strategy: self.service_worker.caching_strategy,
        }
    }
}
