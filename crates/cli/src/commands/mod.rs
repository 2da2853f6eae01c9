//! CLI command implementations.
//!
//! Commands write to any `std::io::Write` so tests can capture output.

pub mod catalog;
pub mod favorites;

use rigo_core::ProductError;
use rigo_market::store::StoreError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Store operation failed.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// User-supplied product field was invalid.
    #[error("{0}")]
    Product(#[from] ProductError),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
