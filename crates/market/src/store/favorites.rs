//! Favorite product tracking.

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use rigo_core::ProductId;

use super::StoreError;

/// Set of product ids a user marked as favorite.
///
/// One tracker is created at startup and shared through `AppState`. The
/// tracker does not consult the catalog: an id stays a favorite after its
/// product is deleted.
#[derive(Clone, Default)]
pub struct FavoritesTracker {
    inner: Arc<RwLock<BTreeSet<ProductId>>>,
}

impl FavoritesTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeSet<ProductId>>, StoreError> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeSet<ProductId>>, StoreError> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }

    /// Mark `id` as favorite. Returns `false` if it already was.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn add(&self, id: ProductId) -> Result<bool, StoreError> {
        let added = self.write()?.insert(id);
        debug!(product_id = %id, added, "Favorite add");
        Ok(added)
    }

    /// Unmark `id`. Returns `false` if it was not a favorite.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn remove(&self, id: ProductId) -> Result<bool, StoreError> {
        let removed = self.write()?.remove(&id);
        debug!(product_id = %id, removed, "Favorite remove");
        Ok(removed)
    }

    /// Whether `id` is a favorite.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn contains(&self, id: ProductId) -> Result<bool, StoreError> {
        Ok(self.read()?.contains(&id))
    }

    /// Flip membership of `id` and return the new state.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn toggle(&self, id: ProductId) -> Result<bool, StoreError> {
        let mut favorites = self.write()?;
        let now_favorite = if favorites.remove(&id) {
            false
        } else {
            favorites.insert(id)
        };
        drop(favorites);

        debug!(product_id = %id, now_favorite, "Favorite toggle");
        Ok(now_favorite)
    }

    /// Snapshot of all favorite ids.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn all(&self) -> Result<BTreeSet<ProductId>, StoreError> {
        Ok(self.read()?.clone())
    }

    /// Remove every favorite.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.write()?.clear();
        debug!("Favorites cleared");
        Ok(())
    }

    /// Number of favorites.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    /// Add every present id, skipping `None` entries. Returns how many were
    /// newly added.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn import_many<I>(&self, ids: I) -> Result<usize, StoreError>
    where
        I: IntoIterator<Item = Option<ProductId>>,
    {
        let mut favorites = self.write()?;
        let added = ids
            .into_iter()
            .flatten()
            .filter(|id| favorites.insert(*id))
            .count();
        drop(favorites);

        debug!(added, "Favorites imported");
        Ok(added)
    }
}
