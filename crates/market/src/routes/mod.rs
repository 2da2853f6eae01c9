//! HTTP route handlers for the market API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Health check
//!
//! # Auth
//! OPTIONS /api/register                 - CORS preflight (204)
//! POST    /api/register                 - Register a credential (201/409/400)
//! OPTIONS /api/login                    - CORS preflight (204)
//! POST    /api/login                    - Check a credential (200/401/400)
//!
//! # Products
//! GET    /api/products?name=&category=  - List or search
//! POST   /api/products                  - Add a product (201)
//! GET    /api/products/{id}             - Product detail
//! PUT    /api/products/{id}             - Replace a product's fields
//! DELETE /api/products/{id}             - Remove a product (204)
//! GET    /api/products/low-stock        - Products at or below a threshold
//! GET    /api/products/categories       - Sorted distinct categories
//! GET    /api/products/inventory-value  - Total stock value
//!
//! # Favorites
//! GET    /api/favorites                 - Snapshot of favorite ids
//! DELETE /api/favorites                 - Clear all favorites
//! POST   /api/favorites/import          - Add many ids, skipping nulls
//! GET    /api/favorites/{id}            - Membership of one id
//! PUT    /api/favorites/{id}            - Add
//! DELETE /api/favorites/{id}            - Remove
//! POST   /api/favorites/{id}/toggle     - Flip membership
//! ```
//!
//! Every route also answers `OPTIONS` with an empty 204 preflight.
//! Unsupported methods on a known path get a JSON 405; unknown paths a JSON
//! 404.

pub mod auth;
pub mod favorites;
pub mod products;

use axum::{
    Json, Router,
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/register",
            post(auth::register)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/login",
            post(auth::login)
                .options(preflight)
                .fallback(method_not_allowed),
        )
}

/// Create all routes (without state applied).
pub fn routes() -> Router<AppState> {
    let api = Router::new()
        .merge(auth_routes())
        .merge(products::routes())
        .merge(favorites::routes());

    Router::new()
        .route(
            "/health",
            get(health).options(preflight).fallback(method_not_allowed),
        )
        .nest("/api", api)
        .fallback(not_found)
}

/// Liveness status body.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

/// Liveness health check endpoint.
///
/// Returns `{"status":"ok"}` if the server is running.
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Empty response for CORS preflight requests.
///
/// The CORS middleware adds the allow headers.
pub async fn preflight() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, [(CONTENT_TYPE, "application/json")])
}

/// JSON 405 for methods a route does not support.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// JSON 404 for unknown paths.
pub async fn not_found() -> AppError {
    AppError::NotFound("route".to_string())
}
