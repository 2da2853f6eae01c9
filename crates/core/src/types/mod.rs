//! Core types for RigoCompra.
//!
//! This module provides type-safe wrappers for the marketplace domain.

pub mod credential;
pub mod id;
pub mod price;
pub mod product;
pub mod username;

pub use credential::{Credential, CredentialType};
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use product::{Product, ProductDraft, ProductError, parse_quantity, parse_unit_price};
pub use username::{Username, UsernameError};
