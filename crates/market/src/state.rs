//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::MarketConfig;
use crate::store::{CatalogStore, CredentialStore, FavoritesTracker};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It holds the single
/// [`FavoritesTracker`] created at startup, so every handler sees the same
/// favorites without a global.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: MarketConfig,
    catalog: CatalogStore,
    favorites: FavoritesTracker,
    credentials: CredentialStore,
}

impl AppState {
    /// Create application state with empty stores.
    #[must_use]
    pub fn new(config: MarketConfig) -> Self {
        Self::with_stores(
            config,
            CatalogStore::new(),
            FavoritesTracker::new(),
            CredentialStore::new(),
        )
    }

    /// Create application state around existing stores.
    ///
    /// Used when the caller wants to keep its own handle on a store, for
    /// example to seed the catalog or inspect it from a test.
    #[must_use]
    pub fn with_stores(
        config: MarketConfig,
        catalog: CatalogStore,
        favorites: FavoritesTracker,
        credentials: CredentialStore,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                favorites,
                credentials,
            }),
        }
    }

    /// Get a reference to the market configuration.
    #[must_use]
    pub fn config(&self) -> &MarketConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    /// Get a reference to the favorites tracker.
    #[must_use]
    pub fn favorites(&self) -> &FavoritesTracker {
        &self.inner.favorites
    }

    /// Get a reference to the credential store.
    #[must_use]
    pub fn credentials(&self) -> &CredentialStore {
        &self.inner.credentials
    }
}
