//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`; every error body is `{"message": "..."}`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::AuthError;
use crate::store::StoreError;

/// Message shown for duplicate registrations.
pub const USER_EXISTS_MESSAGE: &str = "El usuario ya existe";
/// Message shown for a failed login.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Credenciales inválidas";
/// Message shown for unsupported HTTP methods.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Método no permitido";
/// Message shown for any server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

/// JSON body carrying a single human-readable message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Application-level error type for the market API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An extractor rejected the request with a status other than 400.
    #[error("Rejected request ({0}): {1}")]
    Rejected(StatusCode, String),

    /// HTTP method not supported on this route.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    const fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::Internal(_)
                | Self::Store(
                    StoreError::LockPoisoned
                        | StoreError::IdSpaceExhausted
                        | StoreError::ValueOverflow
                )
                | Self::Auth(AuthError::Store(_))
        )
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Store(err) => match err {
                StoreError::NotFound(_) => StatusCode::NOT_FOUND,
                StoreError::Conflict(_) => StatusCode::CONFLICT,
                StoreError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                StoreError::IdSpaceExhausted
                | StoreError::ValueOverflow
                | StoreError::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::UserAlreadyExists => StatusCode::CONFLICT,
                AuthError::InvalidUsername(_) | AuthError::EmptySecret => StatusCode::BAD_REQUEST,
                AuthError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Rejected(status, _) => *status,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> String {
        // Don't expose internal error details to clients
        if self.is_server_error() {
            return INTERNAL_ERROR_MESSAGE.to_string();
        }
        match self {
            Self::Store(StoreError::NotFound(what)) | Self::NotFound(what) => {
                format!("Not found: {what}")
            }
            Self::Store(StoreError::InvalidInput(msg) | StoreError::Conflict(msg))
            | Self::BadRequest(msg)
            | Self::Rejected(_, msg) => msg.clone(),
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
                AuthError::UserAlreadyExists => USER_EXISTS_MESSAGE.to_string(),
                other => other.to_string(),
            },
            Self::MethodNotAllowed => METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, "Client error");
        }

        (self.status(), Json(MessageBody::new(self.client_message()))).into_response()
    }
}

impl AppError {
    /// Map an extractor rejection, keeping its status.
    ///
    /// Undecodable or invalid data is always a 400; transport problems such
    /// as a missing content type (415) or an oversized body (413) keep the
    /// status axum chose.
    fn from_rejection(status: StatusCode, body_text: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                Self::BadRequest(body_text)
            }
            status => Self::Rejected(status, body_text),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::from_rejection(rejection.status(), rejection.body_text())
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
