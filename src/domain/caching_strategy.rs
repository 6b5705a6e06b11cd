use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Request-handling policy emitted into the service worker's `fetch` handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CachingStrategy {
    /// Serve from cache, fall back to network, then to the offline page.
    #[default]
    CacheFirst,
    /// Try network, cache successful responses, fall back to the offline page.
    NetworkFirst,
    /// Serve cached entry immediately while refreshing it from the network.
    StaleWhileRevalidate,
}

impl CachingStrategy {
    /// All supported strategies in display order.
    pub const ALL: [CachingStrategy; 3] = [
        CachingStrategy::CacheFirst,
        CachingStrategy::NetworkFirst,
        CachingStrategy::StaleWhileRevalidate,
    ];

    /// Configuration label for this strategy.
    pub fn label(self) -> &'static str {
        match self {
            CachingStrategy::CacheFirst => "cache-first",
            CachingStrategy::NetworkFirst => "network-first",
            CachingStrategy::StaleWhileRevalidate => "stale-while-revalidate",
        }
    }

    /// Embedded template holding this strategy's `fetch` handler.
    pub fn fetch_template(self) -> &'static str {
        match self {
            CachingStrategy::CacheFirst => "service-worker/fetch/cache-first.js",
            CachingStrategy::NetworkFirst => "service-worker/fetch/network-first.js",
            CachingStrategy::StaleWhileRevalidate => {
                "service-worker/fetch/stale-while-revalidate.js"
            }
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            CachingStrategy::CacheFirst => {
                "Serve cached responses first; fetch and cache on miss; offline page on failure"
            }
            CachingStrategy::NetworkFirst => {
                "Fetch from network first and cache the result; offline page on failure"
            }
            CachingStrategy::StaleWhileRevalidate => {
                "Serve cached response immediately and refresh it in the background"
            }
        }
    }
}

impl FromStr for CachingStrategy {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CachingStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.label() == value)
            .ok_or_else(|| AppError::InvalidCachingStrategy(value.to_string()))
    }
}

impl fmt::Display for CachingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
