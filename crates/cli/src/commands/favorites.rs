//! Favorites commands.
//!
//! The CLI holds no state between runs, so a favorites command imports the
//! ids it is given and then reports on them.
//!
//! # Usage
//!
//! ```bash
//! rigo favorites 1 8 8 42
//! rigo favorites 1 8 --toggle 8
//! ```

use std::io::Write;

use rigo_core::ProductId;
use rigo_core::format::product_summary;
use rigo_market::store::{CatalogStore, FavoritesTracker, StoreError};

use super::CommandError;

/// Import `ids`, flip each id in `toggles`, then print the favorites.
///
/// Favorites whose product is not in the catalog are listed as missing
/// rather than dropped.
pub fn report(
    catalog: &CatalogStore,
    favorites: &FavoritesTracker,
    ids: &[u32],
    toggles: &[u32],
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let added = favorites.import_many(ids.iter().copied().map(ProductId::new).map(Some))?;
    tracing::debug!(added, "Favorites imported");

    for &id in toggles {
        favorites.toggle(ProductId::new(id))?;
    }

    let all = favorites.all()?;
    writeln!(out, "{} favorite(s)", all.len())?;
    for id in all {
        match catalog.get(id) {
            Ok(product) => writeln!(out, "{}", product_summary(&product))?,
            Err(StoreError::NotFound(_)) => writeln!(out, "#{id} (no longer in catalog)")?,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
