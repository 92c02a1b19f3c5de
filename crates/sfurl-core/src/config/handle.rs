//! Process-wide config holder with atomic replacement.
//!
//! Uses `arc-swap` for lock-free reads. Readers take an `Arc` snapshot and
//! pass `&StorefrontConfig` down to the builders; a reload stores a whole new
//! object, so no reader ever sees a half-updated configuration.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use super::StorefrontConfig;
use crate::error::UrlError;

#[derive(Debug, Default)]
pub struct ConfigHandle {
    inner: ArcSwapOption<StorefrontConfig>,
}

impl ConfigHandle {
    /// An empty handle; [`load`](Self::load) fails until something is stored.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            inner: ArcSwapOption::from_pointee(config),
        }
    }

    /// Snapshot of the current configuration.
    pub fn load(&self) -> Result<Arc<StorefrontConfig>, UrlError> {
        self.inner.load_full().ok_or(UrlError::MissingConfig)
    }

    /// Replace the configuration as a whole; returns the previous one.
    pub fn store(&self, config: StorefrontConfig) -> Option<Arc<StorefrontConfig>> {
        tracing::debug!(default_site = %config.default_site, "swapping storefront config");
        self.inner.swap(Some(Arc::new(config)))
    }

    pub fn clear(&self) {
        self.inner.store(None);
    }
}
