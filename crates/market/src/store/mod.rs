//! In-memory stores for the marketplace.
//!
//! # Stores
//!
//! - [`CatalogStore`] - Products keyed by store-assigned id
//! - [`FavoritesTracker`] - Set of product ids marked as favorite
//! - [`CredentialStore`] - Registered credentials keyed by username
//!
//! Each store is an `Arc<RwLock<..>>` handle: clones share state, and every
//! read-modify-write sequence runs under a single write guard. Stores are
//! independent; no operation locks more than one of them.
//!
//! Enumeration methods return owned copies so callers never hold a lock
//! while iterating.

pub mod catalog;
pub mod credentials;
pub mod favorites;
pub mod search;
pub mod seed;

use thiserror::Error;

use rigo_core::ProductError;

pub use catalog::CatalogStore;
pub use credentials::CredentialStore;
pub use favorites::FavoritesTracker;

/// Errors that can occur during store operations.
///
/// A failed operation never leaves a partial write behind.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Requested entity was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Uniqueness violation (e.g., duplicate username).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Missing or malformed required fields.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The id counter cannot advance without reusing an id.
    #[error("product id space exhausted")]
    IdSpaceExhausted,

    /// A catalog-wide sum does not fit in a decimal.
    #[error("inventory value overflow")]
    ValueOverflow,

    /// A writer panicked while holding the lock.
    #[error("store lock poisoned")]
    LockPoisoned,
}

impl From<ProductError> for StoreError {
    fn from(err: ProductError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
