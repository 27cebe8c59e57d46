//! Shared application state for the creamery server.
//!
//! The catalog lives behind a `tokio::sync::RwLock`: reads proceed in
//! parallel, and create/update/delete on the same id serialize instead of
//! racing.

use std::sync::Arc;

use creamery_core::Catalog;
use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::obs::metrics::CatalogMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalog: RwLock<Catalog>,
    metrics: CatalogMetrics,
}

impl AppState {
    /// Build state from config, seeding the catalog when `catalog.seed` is set.
    pub fn new(cfg: &AppConfig) -> Self {
        let catalog = if cfg.catalog.seed {
            Catalog::seeded()
        } else {
            Catalog::new()
        };
        Self::with_catalog(catalog)
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        tracing::info!(flavors = catalog.len(), "catalog ready");
        Self {
            inner: Arc::new(AppStateInner {
                catalog: RwLock::new(catalog),
                metrics: CatalogMetrics::default(),
            }),
        }
    }

    pub fn catalog(&self) -> &RwLock<Catalog> {
        &self.inner.catalog
    }

    pub fn metrics(&self) -> &CatalogMetrics {
        &self.inner.metrics
    }
}
