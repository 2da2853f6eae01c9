//! Registration and login route handlers.
//!
//! Both endpoints answer `OPTIONS` preflights with an empty 204 and reject
//! any method other than `POST` with a JSON 405.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use rigo_core::CredentialType;

use crate::error::{MessageBody, Result};
use crate::services::auth::{AuthService, Registration};
use crate::state::AppState;

/// Message returned after a successful registration.
pub const REGISTERED_MESSAGE: &str = "Usuario registrado con éxito";
/// Message returned after a successful login.
pub const LOGIN_MESSAGE: &str = "Login exitoso";

// =============================================================================
// Request/Response Types
// =============================================================================

/// Login form submission.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Public profile returned by a successful login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub credential_type: CredentialType,
    pub registered_at: DateTime<Utc>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Register a new credential.
///
/// POST /api/register
///
/// # Errors
///
/// 400 for a malformed body, username or empty password; 409 when the
/// username is already registered.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Registration>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageBody>)> {
    let Json(registration) = payload?;

    AuthService::new(state.credentials()).register(registration)?;

    Ok((StatusCode::CREATED, Json(MessageBody::new(REGISTERED_MESSAGE))))
}

/// Check a username and secret.
///
/// POST /api/login
///
/// # Errors
///
/// 400 for a malformed body or username; 401 when the user is unknown or the
/// secret does not match.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(request) = payload?;

    let credential =
        AuthService::new(state.credentials()).login(&request.username, &request.password)?;

    Ok(Json(LoginResponse {
        message: LOGIN_MESSAGE.to_string(),
        username: credential.username.into_inner(),
        first_name: credential.first_name,
        last_name: credential.last_name,
        credential_type: credential.credential_type,
        registered_at: credential.registered_at,
    }))
}
