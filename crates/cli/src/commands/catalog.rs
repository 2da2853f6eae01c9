//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! rigo list
//! rigo show 3
//! rigo search --name laptop
//! rigo search --category tecnología
//! rigo low-stock --threshold 5
//! rigo categories
//! rigo value
//! rigo add --code KEY011 --name "Teclado" --price 350 --quantity 4 --category Tecnología
//! ```

use std::io::Write;

use rigo_core::format::{product_details, product_summary};
use rigo_core::{
    CurrencyCode, Price, Product, ProductDraft, ProductId, parse_quantity, parse_unit_price,
};
use rigo_market::store::{CatalogStore, search};

use super::CommandError;

/// Product fields as typed on the command line.
#[derive(Debug, Clone, Default)]
pub struct NewProduct {
    pub code: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
    pub category: String,
    pub image: String,
}

/// Print every product, one summary line each.
pub fn list(catalog: &CatalogStore, out: &mut impl Write) -> Result<(), CommandError> {
    write_products(&catalog.list()?, out)
}

/// Print the detail block of one product.
pub fn show(catalog: &CatalogStore, id: u32, out: &mut impl Write) -> Result<(), CommandError> {
    let product = catalog.get(ProductId::new(id))?;
    writeln!(out, "{}", product_details(&product))?;
    Ok(())
}

/// Search by name substring, category, or both.
///
/// Without either filter nothing matches.
pub fn find(
    catalog: &CatalogStore,
    name: Option<&str>,
    category: Option<&str>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let products = match (name, category) {
        (Some(name), None) => catalog.find_by_name(name)?,
        (None, Some(category)) => catalog.find_by_category(category)?,
        (Some(name), Some(category)) if !category.is_empty() => catalog
            .find_by_name(name)?
            .into_iter()
            .filter(|p| search::matches_category(p, category))
            .collect(),
        _ => Vec::new(),
    };
    write_products(&products, out)
}

/// Print products with `quantity <= threshold`.
pub fn low_stock(
    catalog: &CatalogStore,
    threshold: u32,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    write_products(&catalog.low_stock(threshold)?, out)
}

/// Print the sorted category names.
pub fn categories(catalog: &CatalogStore, out: &mut impl Write) -> Result<(), CommandError> {
    for category in catalog.distinct_categories()? {
        writeln!(out, "{category}")?;
    }
    Ok(())
}

/// Print the total stock value.
pub fn value(catalog: &CatalogStore, out: &mut impl Write) -> Result<(), CommandError> {
    let total = Price::new(catalog.total_inventory_value()?, CurrencyCode::default());
    writeln!(
        out,
        "Total inventory value: {} ({} products)",
        total.display(),
        catalog.count()?
    )?;
    Ok(())
}

/// Parse and add a product, then print it.
pub fn add(
    catalog: &CatalogStore,
    input: NewProduct,
    out: &mut impl Write,
) -> Result<ProductId, CommandError> {
    let draft = ProductDraft {
        unit_price: parse_unit_price(&input.price)?,
        quantity: parse_quantity(&input.quantity)?,
        code: input.code,
        name: input.name,
        description: input.description,
        category: input.category,
        image: input.image,
    };

    let product = catalog.add(draft)?;
    tracing::info!(id = %product.id, "Product added");
    writeln!(out, "{}", product_details(&product))?;
    Ok(product.id)
}

fn write_products(products: &[Product], out: &mut impl Write) -> Result<(), CommandError> {
    if products.is_empty() {
        writeln!(out, "No products found.")?;
        return Ok(());
    }
    for product in products {
        writeln!(out, "{}", product_summary(product))?;
    }
    Ok(())
}
