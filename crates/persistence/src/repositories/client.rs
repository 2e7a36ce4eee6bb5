//! Client repository for database operations.

use domain::models::Client;
use sqlx::SqlitePool;

use crate::entities::ClientEntity;
use crate::metrics::QueryTimer;

/// Repository for client database operations.
#[derive(Clone)]
pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    /// Creates a new ClientRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a new client, returning the generated id.
    ///
    /// Passing `None` for the email stores NULL.
    pub async fn insert(
        &self,
        first_name: &str,
        last_name: &str,
        email: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("client_insert");
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO client (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a client by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Client>, sqlx::Error> {
        let timer = QueryTimer::new("client_find_by_id");
        let entity = sqlx::query_as::<_, ClientEntity>(
            r#"
            SELECT id, first_name, last_name, email
            FROM client
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        Ok(entity?.map(Into::into))
    }

    /// Rewrite all three data columns of a client row.
    ///
    /// Returns the id when the row exists, `None` otherwise.
    pub async fn update(
        &self,
        id: i64,
        first_name: &str,
        last_name: &str,
        email: Option<&str>,
    ) -> Result<Option<i64>, sqlx::Error> {
        let timer = QueryTimer::new("client_update");
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE client
            SET first_name = $2, last_name = $3, email = $4
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a client row.
    ///
    /// Returns the id when a row was deleted, `None` otherwise. Rows in
    /// phone_number referencing the client must be removed first or the
    /// statement fails with a foreign key violation.
    pub async fn delete(&self, id: i64) -> Result<Option<i64>, sqlx::Error> {
        let timer = QueryTimer::new("client_delete");
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            DELETE FROM client
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List all clients ordered by id.
    pub async fn list_all(&self) -> Result<Vec<Client>, sqlx::Error> {
        let timer = QueryTimer::new("client_list_all");
        let entities = sqlx::query_as::<_, ClientEntity>(
            r#"
            SELECT id, first_name, last_name, email
            FROM client
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok(entities?.into_iter().map(Into::into).collect())
    }
}
