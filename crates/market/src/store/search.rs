//! Read-only queries over a catalog snapshot.
//!
//! These functions never mutate and never see a lock; [`CatalogStore`]
//! takes a snapshot and hands it here.
//!
//! [`CatalogStore`]: super::CatalogStore

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use rigo_core::Product;

/// Products whose name contains `needle`, ignoring case.
///
/// An empty needle matches nothing rather than everything.
#[must_use]
pub fn by_name(products: &[Product], needle: &str) -> Vec<Product> {
    if needle.is_empty() {
        return Vec::new();
    }
    let needle = needle.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Products whose category equals `category`, ignoring case.
///
/// An empty category matches nothing.
#[must_use]
pub fn by_category(products: &[Product], category: &str) -> Vec<Product> {
    if category.is_empty() {
        return Vec::new();
    }
    products
        .iter()
        .filter(|p| matches_category(p, category))
        .cloned()
        .collect()
}

/// Case-insensitive exact category comparison.
#[must_use]
pub fn matches_category(product: &Product, category: &str) -> bool {
    product.category.to_lowercase() == category.to_lowercase()
}

/// Products with `quantity <= threshold`.
#[must_use]
pub fn low_stock(products: &[Product], threshold: u32) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.quantity <= threshold)
        .cloned()
        .collect()
}

/// Sum of `unit_price * quantity` over all products.
///
/// `None` if the total does not fit in a decimal.
#[must_use]
pub fn total_inventory_value(products: &[Product]) -> Option<Decimal> {
    products
        .iter()
        .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.inventory_value()?))
}

/// Sorted, de-duplicated category names.
#[must_use]
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|p| p.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
