//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::catalog::{Catalog, SellerOverview};
use crate::config::StorefrontConfig;
use crate::services::{AccessSource, ChatService};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, the mock backends and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    access: AccessSource,
    chat: ChatService,
    seller_overview: OnceCell<SellerOverview>,
}

impl AppState {
    /// Create a new application state backed by the bundled catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_catalog(config, Catalog::fixtures())
    }

    /// Create a state over a specific catalog.
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: Catalog) -> Self {
        let access = AccessSource::new(config.mock.access_load_delay);
        let chat = ChatService::new(&config.mock);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                access,
                chat,
                seller_overview: OnceCell::new(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Access state source.
    #[must_use]
    pub fn access(&self) -> &AccessSource {
        &self.inner.access
    }

    #[must_use]
    pub fn chat(&self) -> &ChatService {
        &self.inner.chat
    }

    /// Seller center overview, computed on first use.
    pub async fn seller_overview(&self) -> &SellerOverview {
        self.inner
            .seller_overview
            .get_or_init(|| async {
                tracing::info!("Loading seller center module");
                self.inner.catalog.seller_overview()
            })
            .await
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("base_url", &self.inner.config.base_url)
            .field("seller_overview_loaded", &self.inner.seller_overview.initialized())
            .finish_non_exhaustive()
    }
}
