//! Database schema definitions.

use sqlx::SqlitePool;

/// SQL statement for creating the client table.
///
/// Column length limits are CHECK constraints because SQLite ignores
/// VARCHAR lengths. A NULL email means "no email on file"; UNIQUE admits
/// any number of NULLs, so email-less clients never collide.
pub const CLIENT_TABLE_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS client (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL CHECK (length(first_name) <= 50),
    last_name  TEXT NOT NULL CHECK (length(last_name) <= 50),
    email      TEXT UNIQUE CHECK (email IS NULL OR length(email) <= 100)
);
"#;

/// SQL statement for creating the phone_number table.
///
/// The foreign key is only enforced when the connection has
/// `PRAGMA foreign_keys = ON`, which `db::create_pool` sets.
pub const PHONE_NUMBER_TABLE_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS phone_number (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    client_id INTEGER NOT NULL REFERENCES client(id),
    number    TEXT NOT NULL CHECK (length(number) <= 20)
);
"#;

/// Initialize the database schema.
///
/// Issues the two CREATE TABLE statements. Existing tables and their data
/// are left untouched, so this is safe to run on every startup.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CLIENT_TABLE_DDL).execute(pool).await?;
    sqlx::query(PHONE_NUMBER_TABLE_DDL).execute(pool).await?;

    tracing::info!("Database schema initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    #[tokio::test]
    async fn test_schema_initialization() {
        let pool = create_memory_pool().await;
        init_schema(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'client'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(count, 1);

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'phone_number'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_schema_initialization_is_idempotent() {
        let pool = create_memory_pool().await;
        init_schema(&pool).await.unwrap();

        sqlx::query("INSERT INTO client (first_name, last_name, email) VALUES ('Petya', 'Petrov', NULL)")
            .execute(&pool)
            .await
            .unwrap();

        // Re-running must neither fail nor drop existing rows
        init_schema(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM client")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
