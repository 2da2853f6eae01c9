//! RigoCompra Core - Shared types library.
//!
//! This crate provides the domain types used across all RigoCompra components:
//! - `market` - Catalog, favorites and credential stores behind a JSON API
//! - `cli` - Command-line catalog reports
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no locks,
//! no HTTP. Stores that own these values live in `rigo-market`.
//!
//! # Modules
//!
//! - [`types`] - Ids, products, credentials, usernames and prices
//! - [`format`] - Plain-text renderings for presentation layers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod format;
pub mod types;

pub use types::*;
