//! Persistence layer for the Client Directory backend.
//!
//! This crate contains:
//! - Database connection management
//! - Schema definitions
//! - Entity definitions (database row mappings)
//! - Repository implementations

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
pub mod schema;
