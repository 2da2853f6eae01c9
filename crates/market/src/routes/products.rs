//! Product catalog route handlers.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use rigo_core::{CurrencyCode, Price, Product, ProductDraft, ProductId};

use crate::error::Result;
use crate::routes::{method_not_allowed, preflight};
use crate::state::AppState;
use crate::store::search;

/// Create the product routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(list_products)
                .post(create_product)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/products/low-stock",
            get(low_stock)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/products/categories",
            get(categories)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/products/inventory-value",
            get(inventory_value)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/products/{id}",
            get(get_product)
                .put(update_product)
                .delete(delete_product)
                .options(preflight)
                .fallback(method_not_allowed),
        )
}

// =============================================================================
// Query Types
// =============================================================================

/// Search parameters for the product listing.
///
/// With neither parameter the whole catalog is returned. An empty value
/// matches nothing.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub name: Option<String>,
    pub category: Option<String>,
}

/// Parameters for the low-stock report.
#[derive(Debug, Default, Deserialize)]
pub struct LowStockQuery {
    pub threshold: Option<u32>,
}

/// Catalog valuation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryValue {
    pub total_value: Decimal,
    pub formatted: String,
    pub product_count: usize,
}

// =============================================================================
// Handlers
// =============================================================================

/// List or search products.
///
/// GET /api/products?name=&category=
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    query: std::result::Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<Vec<Product>>> {
    let Query(query) = query?;
    let catalog = state.catalog();

    let products = match (query.name.as_deref(), query.category.as_deref()) {
        (None, None) => catalog.list()?,
        (Some(name), None) => catalog.find_by_name(name)?,
        (None, Some(category)) => catalog.find_by_category(category)?,
        (Some(_), Some("")) => Vec::new(),
        (Some(name), Some(category)) => catalog
            .find_by_name(name)?
            .into_iter()
            .filter(|p| search::matches_category(p, category))
            .collect(),
    };

    Ok(Json(products))
}

/// Add a product. Any `id` in the body is ignored.
///
/// POST /api/products
#[instrument(skip_all)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ProductDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>)> {
    let Json(draft) = payload?;
    let product = state.catalog().add(draft)?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/products/{id}
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    id: std::result::Result<Path<ProductId>, PathRejection>,
) -> Result<Json<Product>> {
    let Path(id) = id?;
    Ok(Json(state.catalog().get(id)?))
}

/// Replace every field of a product except its id.
///
/// PUT /api/products/{id}
#[instrument(skip(state, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    id: std::result::Result<Path<ProductId>, PathRejection>,
    payload: std::result::Result<Json<ProductDraft>, JsonRejection>,
) -> Result<Json<Product>> {
    let Path(id) = id?;
    let Json(draft) = payload?;

    let product = draft.with_id(id);
    state.catalog().update(product.clone())?;

    Ok(Json(product))
}

/// DELETE /api/products/{id}
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    id: std::result::Result<Path<ProductId>, PathRejection>,
) -> Result<StatusCode> {
    let Path(id) = id?;
    state.catalog().delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Products at or below a stock threshold.
///
/// GET /api/products/low-stock?threshold=N
///
/// Without `threshold` the configured default is used.
#[instrument(skip(state))]
pub async fn low_stock(
    State(state): State<AppState>,
    query: std::result::Result<Query<LowStockQuery>, QueryRejection>,
) -> Result<Json<Vec<Product>>> {
    let Query(query) = query?;
    let threshold = query
        .threshold
        .unwrap_or(state.config().low_stock_threshold);
    Ok(Json(state.catalog().low_stock(threshold)?))
}

/// GET /api/products/categories
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    Ok(Json(state.catalog().distinct_categories()?))
}

/// GET /api/products/inventory-value
pub async fn inventory_value(State(state): State<AppState>) -> Result<Json<InventoryValue>> {
    let catalog = state.catalog();
    let total_value = catalog.total_inventory_value()?;

    Ok(Json(InventoryValue {
        total_value,
        formatted: Price::new(total_value, CurrencyCode::default()).display(),
        product_count: catalog.count()?,
    }))
}
