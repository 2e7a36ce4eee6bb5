//! Domain layer for the Client Directory backend.
//!
//! This crate contains:
//! - Domain models (Client, PhoneNumber)
//! - Request, update and search value types
//! - Domain error types

pub mod error;
pub mod models;

pub use error::DirectoryError;
