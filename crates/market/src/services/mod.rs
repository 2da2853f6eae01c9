//! Business logic services for the market API.
//!
//! # Services
//!
//! - `auth` - Credential registration and login over the credential store

pub mod auth;
