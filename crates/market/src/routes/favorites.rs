//! Favorites route handlers.
//!
//! Favorites are not checked against the catalog: an id stays a favorite
//! after its product is deleted.

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use rigo_core::ProductId;

use crate::error::Result;
use crate::routes::{method_not_allowed, preflight};
use crate::state::AppState;

/// Create the favorites routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/favorites",
            get(list_favorites)
                .delete(clear_favorites)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/favorites/import",
            post(import_favorites)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/favorites/{id}",
            get(favorite_status)
                .put(add_favorite)
                .delete(remove_favorite)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/favorites/{id}/toggle",
            post(toggle_favorite)
                .options(preflight)
                .fallback(method_not_allowed),
        )
}

// =============================================================================
// Request/Response Types
// =============================================================================

/// Snapshot of the favorites set, in ascending id order.
#[derive(Debug, Serialize, Deserialize)]
pub struct FavoritesList {
    pub ids: Vec<ProductId>,
    pub count: usize,
}

/// Membership of one id.
#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteStatus {
    pub id: ProductId,
    pub favorite: bool,
}

/// Outcome of an add or remove.
#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteChange {
    pub id: ProductId,
    pub favorite: bool,
    /// Whether the call changed membership.
    pub changed: bool,
}

/// Bulk import body. `null` entries are skipped.
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub ids: Vec<Option<ProductId>>,
}

/// Bulk import result.
#[derive(Debug, Serialize, Deserialize)]
pub struct ImportResponse {
    /// Ids that were not already favorites.
    pub added: usize,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/favorites
pub async fn list_favorites(State(state): State<AppState>) -> Result<Json<FavoritesList>> {
    let ids: Vec<ProductId> = state.favorites().all()?.into_iter().collect();
    Ok(Json(FavoritesList {
        count: ids.len(),
        ids,
    }))
}

/// DELETE /api/favorites
#[instrument(skip(state))]
pub async fn clear_favorites(State(state): State<AppState>) -> Result<Json<FavoritesList>> {
    state.favorites().clear()?;
    Ok(Json(FavoritesList {
        ids: Vec::new(),
        count: 0,
    }))
}

/// POST /api/favorites/import
#[instrument(skip_all)]
pub async fn import_favorites(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ImportRequest>, JsonRejection>,
) -> Result<Json<ImportResponse>> {
    let Json(request) = payload?;
    let added = state.favorites().import_many(request.ids)?;
    Ok(Json(ImportResponse { added }))
}

/// GET /api/favorites/{id}
pub async fn favorite_status(
    State(state): State<AppState>,
    id: std::result::Result<Path<ProductId>, PathRejection>,
) -> Result<Json<FavoriteStatus>> {
    let Path(id) = id?;
    Ok(Json(FavoriteStatus {
        id,
        favorite: state.favorites().contains(id)?,
    }))
}

/// PUT /api/favorites/{id}
#[instrument(skip(state))]
pub async fn add_favorite(
    State(state): State<AppState>,
    id: std::result::Result<Path<ProductId>, PathRejection>,
) -> Result<Json<FavoriteChange>> {
    let Path(id) = id?;
    let changed = state.favorites().add(id)?;
    Ok(Json(FavoriteChange {
        id,
        favorite: true,
        changed,
    }))
}

/// DELETE /api/favorites/{id}
#[instrument(skip(state))]
pub async fn remove_favorite(
    State(state): State<AppState>,
    id: std::result::Result<Path<ProductId>, PathRejection>,
) -> Result<Json<FavoriteChange>> {
    let Path(id) = id?;
    let changed = state.favorites().remove(id)?;
    Ok(Json(FavoriteChange {
        id,
        favorite: false,
        changed,
    }))
}

/// Flip membership and return the new state.
///
/// POST /api/favorites/{id}/toggle
#[instrument(skip(state))]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    id: std::result::Result<Path<ProductId>, PathRejection>,
) -> Result<Json<FavoriteStatus>> {
    let Path(id) = id?;
    let favorite = state.favorites().toggle(id)?;
    Ok(Json(FavoriteStatus { id, favorite }))
}
