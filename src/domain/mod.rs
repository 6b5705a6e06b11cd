pub mod caching_strategy;
pub mod error;
pub mod manifest;
pub mod offline_page;
pub mod paths;
pub mod pwa_config;
pub mod service_worker;

pub use caching_strategy::CachingStrategy;
pub use error::AppError;
pub use manifest::{ManifestDescriptor, ManifestIcon};
pub use offline_page::OfflinePageConfig;
pub use pwa_config::{PwaConfig, ServiceWorkerSettings};
pub use service_worker::{HeaderLiterals, ServiceWorkerConfig};
