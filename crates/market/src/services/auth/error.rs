//! Authentication error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid username format.
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] rigo_core::UsernameError),

    /// Secret missing or empty.
    #[error("password cannot be empty")]
    EmptySecret,

    /// Invalid credentials (wrong secret or user not found).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// User already exists.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
