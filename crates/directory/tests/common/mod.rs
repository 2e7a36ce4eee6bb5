//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixtures for running integration
//! tests against an in-memory SQLite database.

// Allow dead code in this module - these are helper utilities that may not be
// used by all integration tests but are intentionally available for future use.
#![allow(dead_code)]

use client_directory::ClientDirectory;
use domain::models::{NewClient, NewPhone};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Create a test database pool over a fresh in-memory database.
///
/// The pool is pinned to a single connection: every connection to
/// `sqlite::memory:` opens its own database, so a larger pool would scatter
/// the tables across connections.
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Failed to parse in-memory connection string")
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to connect to test database")
}

/// Create a directory service over an initialized in-memory schema.
pub async fn create_test_directory() -> ClientDirectory {
    let pool = create_test_pool().await;
    let directory = ClientDirectory::new(pool);
    directory
        .init_schema()
        .await
        .expect("Failed to initialize schema");
    directory
}

/// Insert a client, treating an empty email as absent.
pub async fn add_client(directory: &ClientDirectory, first: &str, last: &str, email: &str) -> i64 {
    directory
        .add_client(NewClient::new(first, last).with_email(email))
        .await
        .expect("Failed to add client")
}

/// Attach a phone number to a client.
pub async fn add_phone(directory: &ClientDirectory, client_id: i64, number: &str) -> i64 {
    directory
        .add_phone(NewPhone::new(client_id, number))
        .await
        .expect("Failed to add phone number")
}

/// Seed the two sample clients with their phone numbers.
///
/// Petya Petrov (petrusha@inbox.com) owns 123 and 321, Vasya Vasilyev
/// (vasyandr@inbox.com) owns 6543 and 456. Returns (petya_id, vasya_id).
pub async fn seed_sample_clients(directory: &ClientDirectory) -> (i64, i64) {
    let petya = add_client(directory, "Petya", "Petrov", "petrusha@inbox.com").await;
    let vasya = add_client(directory, "Vasya", "Vasilyev", "vasyandr@inbox.com").await;
    add_phone(directory, petya, "123").await;
    add_phone(directory, petya, "321").await;
    add_phone(directory, vasya, "6543").await;
    add_phone(directory, vasya, "456").await;
    (petya, vasya)
}
