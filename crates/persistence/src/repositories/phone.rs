//! Phone number repository for database operations.

use domain::models::PhoneNumber;
use sqlx::SqlitePool;

use crate::entities::PhoneNumberEntity;
use crate::metrics::QueryTimer;

/// Repository for phone number database operations.
#[derive(Clone)]
pub struct PhoneRepository {
    pool: SqlitePool,
}

impl PhoneRepository {
    /// Creates a new PhoneRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a phone number for a client, returning the generated id.
    ///
    /// Fails with a foreign key violation when the client does not exist.
    pub async fn insert(&self, client_id: i64, number: &str) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("phone_insert");
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO phone_number (client_id, number)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(client_id)
        .bind(number)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete every row matching the (client_id, number) pair.
    ///
    /// Returns the ids of the deleted rows. `fetch_all` drives the statement
    /// to completion so duplicate rows are all removed before the ids are
    /// returned.
    pub async fn delete_by_number(
        &self,
        client_id: i64,
        number: &str,
    ) -> Result<Vec<i64>, sqlx::Error> {
        let timer = QueryTimer::new("phone_delete_by_number");
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            DELETE FROM phone_number
            WHERE client_id = $1 AND number = $2
            RETURNING id
            "#,
        )
        .bind(client_id)
        .bind(number)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete all phone numbers belonging to a client.
    ///
    /// Returns the number of rows removed. Zero is not an error, a client
    /// without phones is a valid state.
    pub async fn delete_by_client(&self, client_id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("phone_delete_by_client");
        let result = sqlx::query(
            r#"
            DELETE FROM phone_number
            WHERE client_id = $1
            "#,
        )
        .bind(client_id)
        .execute(&self.pool)
        .await;
        timer.record();
        Ok(result?.rows_affected())
    }

    /// List the phone numbers of a client ordered by id.
    pub async fn list_by_client(&self, client_id: i64) -> Result<Vec<PhoneNumber>, sqlx::Error> {
        let timer = QueryTimer::new("phone_list_by_client");
        let entities = sqlx::query_as::<_, PhoneNumberEntity>(
            r#"
            SELECT id, client_id, number
            FROM phone_number
            WHERE client_id = $1
            ORDER BY id
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok(entities?.into_iter().map(Into::into).collect())
    }

    /// List all phone numbers ordered by id.
    pub async fn list_all(&self) -> Result<Vec<PhoneNumber>, sqlx::Error> {
        let timer = QueryTimer::new("phone_list_all");
        let entities = sqlx::query_as::<_, PhoneNumberEntity>(
            r#"
            SELECT id, client_id, number
            FROM phone_number
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok(entities?.into_iter().map(Into::into).collect())
    }
}
