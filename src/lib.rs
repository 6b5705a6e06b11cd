//! pwagen: generate the static files that make a web app installable and
//! usable offline (`manifest.json`, an offline page and `service-worker.js`).

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    GeneratedFile, SetupOutcome, create_offline_page_at, generate_manifest_at,
    generate_service_worker_at, init, init_at, load_config_at, setup, setup_at,
};
pub use app::config::{ConfigOverrides, parse_pwa_config};
pub use domain::paths::{
    CONFIG_FILE, DEFAULT_OFFLINE_PAGE_FILE, DEFAULT_OUTPUT_DIR, MANIFEST_FILE, SERVICE_WORKER_FILE,
};
pub use domain::{
    AppError, CachingStrategy, ManifestDescriptor, ManifestIcon, OfflinePageConfig, PwaConfig,
    ServiceWorkerConfig, ServiceWorkerSettings,
};
