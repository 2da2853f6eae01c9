//! Product catalog store.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rust_decimal::Decimal;
use tracing::{debug, info};

use rigo_core::{Product, ProductDraft, ProductId};

use super::{StoreError, search};

/// In-memory product catalog.
///
/// Ids are assigned from a counter starting at 1 and are never reused, even
/// after deletions. Because ids only grow, iterating the id-ordered map
/// yields products in insertion order.
///
/// Cheaply cloneable; clones share the same catalog.
#[derive(Clone, Default)]
pub struct CatalogStore {
    inner: Arc<RwLock<CatalogInner>>,
}

struct CatalogInner {
    products: BTreeMap<ProductId, Product>,
    next_id: u32,
}

impl Default for CatalogInner {
    fn default() -> Self {
        Self {
            products: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl CatalogStore {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, CatalogInner>, StoreError> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, CatalogInner>, StoreError> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }

    /// Add a product and return the stored record with its newly assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` if the draft fails validation and
    /// `StoreError::IdSpaceExhausted` if no fresh id is left.
    pub fn add(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        draft.validate()?;

        let mut inner = self.write()?;
        let id = ProductId::new(inner.next_id);
        inner.next_id = inner
            .next_id
            .checked_add(1)
            .ok_or(StoreError::IdSpaceExhausted)?;
        let product = draft.with_id(id);
        inner.products.insert(id, product.clone());
        drop(inner);

        info!(product_id = %id, "Product added");
        Ok(product)
    }

    /// Look up a product by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no product has this id.
    pub fn get(&self, id: ProductId) -> Result<Product, StoreError> {
        self.read()?
            .products
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Snapshot of every product in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.read()?.products.values().cloned().collect())
    }

    /// Replace every field of an existing product except its id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` if the fields fail validation and
    /// `StoreError::NotFound` if no product has `product.id`. Either way the
    /// catalog is left untouched.
    pub fn update(&self, product: Product) -> Result<(), StoreError> {
        product.to_draft().validate()?;

        let id = product.id;
        let mut inner = self.write()?;
        let slot = inner.products.get_mut(&id).ok_or_else(|| not_found(id))?;
        *slot = product;
        drop(inner);

        info!(product_id = %id, "Product updated");
        Ok(())
    }

    /// Remove a product permanently.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no product has this id.
    pub fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        self.write()?
            .products
            .remove(&id)
            .ok_or_else(|| not_found(id))?;

        info!(product_id = %id, "Product deleted");
        Ok(())
    }

    /// Whether a product with this id is currently stored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn exists(&self, id: ProductId) -> Result<bool, StoreError> {
        Ok(self.read()?.products.contains_key(&id))
    }

    /// Number of stored products.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.products.len())
    }

    /// Case-insensitive substring search on product names.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn find_by_name(&self, needle: &str) -> Result<Vec<Product>, StoreError> {
        let found = search::by_name(&self.list()?, needle);
        debug!(needle, results = found.len(), "Name search");
        Ok(found)
    }

    /// Case-insensitive exact match on category.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn find_by_category(&self, category: &str) -> Result<Vec<Product>, StoreError> {
        let found = search::by_category(&self.list()?, category);
        debug!(category, results = found.len(), "Category search");
        Ok(found)
    }

    /// Products with `quantity <= threshold`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn low_stock(&self, threshold: u32) -> Result<Vec<Product>, StoreError> {
        Ok(search::low_stock(&self.list()?, threshold))
    }

    /// Sum of `unit_price * quantity` across the catalog.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ValueOverflow` if the total does not fit in a
    /// decimal and `StoreError::LockPoisoned` if a writer panicked.
    pub fn total_inventory_value(&self) -> Result<Decimal, StoreError> {
        search::total_inventory_value(&self.list()?).ok_or(StoreError::ValueOverflow)
    }

    /// Sorted unique category names.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn distinct_categories(&self) -> Result<Vec<String>, StoreError> {
        Ok(search::distinct_categories(&self.list()?))
    }
}

fn not_found(id: ProductId) -> StoreError {
    StoreError::NotFound(format!("product {id}"))
}
