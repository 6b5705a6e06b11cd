//! Service worker generation inputs (`service-worker.js`).

use crate::domain::{AppError, CachingStrategy};

/// Everything the service worker script is rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceWorkerConfig {
    /// Cache name embedded as `CACHE_NAME`.
    pub cache_name: String,
    /// Precached paths, in order.
    pub assets: Vec<String>,
    /// Offline fallback path embedded as `OFFLINE_PAGE`.
    pub offline_page: String,
    pub caching_strategy: CachingStrategy,
}

impl ServiceWorkerConfig {
    /// Paths added to the cache by the `install` handler: `assets` followed by
    /// `offline_page`. Duplicates are kept.
    pub fn precache_list(&self) -> Vec<&str> {
        self.assets
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.offline_page.as_str()))
            .collect()
    }

    /// JavaScript literals for the script header.
    pub fn header_literals(&self) -> Result<HeaderLiterals, AppError> {
        Ok(HeaderLiterals {
            cache_name: js_literal(&self.cache_name)?,
            offline_page: js_literal(&self.offline_page)?,
            assets: js_literal(&self.assets)?,
        })
    }
}

/// Values for the `CACHE_NAME`, `OFFLINE_PAGE` and `ASSETS` bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLiterals {
    pub cache_name: String,
    pub offline_page: String,
    pub assets: String,
}

// Compact JSON is a valid JavaScript expression.
fn js_literal<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string(value).map_err(|e| AppError::Serialization {
        what: "service-worker.js".into(),
        details: e.to_string(),
    })
}
