//! Global config handle.
//!
//! Uses `arc-swap` for lock-free reads. The config is loaded once at
//! startup and read-only for the rest of the process lifetime.

use crate::config::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_and_read_back() {
        let mut config = SiteConfig::default();
        config.site.title = "Handle Test".into();

        init_config(config);
        assert_eq!(cfg().site.title, "Handle Test");
    }
}
