//! The `ClientDirectory` facade over the client and phone_number tables.

use std::collections::BTreeSet;

use domain::models::{
    Client, ClientUpdate, NewClient, NewPhone, PhoneNumber, SearchCriteria, Table,
};
use domain::DirectoryError;
use persistence::repositories::{ClientRepository, PhoneRepository};
use persistence::schema;
use regex::{Regex, RegexBuilder};
use sqlx::SqlitePool;
use tracing::info;
use validator::Validate;

/// Data-access facade exposing the directory operations.
///
/// Constructed over an externally managed connection pool; clones share the
/// pool.
#[derive(Clone)]
pub struct ClientDirectory {
    clients: ClientRepository,
    phones: PhoneRepository,
}

impl ClientDirectory {
    /// Creates a directory service over the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            clients: ClientRepository::new(pool.clone()),
            phones: PhoneRepository::new(pool),
        }
    }

    /// Provision the client and phone_number tables.
    ///
    /// Idempotent, both statements use CREATE TABLE IF NOT EXISTS.
    pub async fn init_schema(&self) -> Result<(), DirectoryError> {
        schema::init_schema(self.clients.pool()).await?;
        Ok(())
    }

    /// Register a new client, returning the generated id.
    ///
    /// An empty email is stored as NULL so clients without an email never
    /// collide under the unique constraint.
    pub async fn add_client(&self, client: NewClient) -> Result<i64, DirectoryError> {
        client.validate()?;
        let id = self
            .clients
            .insert(
                &client.first_name,
                &client.last_name,
                client.email_normalized(),
            )
            .await?;
        info!(client_id = id, "Client added");
        Ok(id)
    }

    /// Attach a phone number to an existing client, returning the generated
    /// id.
    pub async fn add_phone(&self, phone: NewPhone) -> Result<i64, DirectoryError> {
        phone.validate()?;
        let id = self.phones.insert(phone.client_id, &phone.number).await?;
        info!(client_id = phone.client_id, phone_id = id, "Phone number added");
        Ok(id)
    }

    /// Fetch a client by id.
    pub async fn get_client(&self, id: i64) -> Result<Client, DirectoryError> {
        self.clients
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::ClientNotFound(id))
    }

    /// List the phone numbers attached to a client, ordered by id.
    ///
    /// An unknown client yields an empty list, not an error.
    pub async fn list_phones(&self, client_id: i64) -> Result<Vec<PhoneNumber>, DirectoryError> {
        Ok(self.phones.list_by_client(client_id).await?)
    }

    /// Apply a partial update to a client, returning its id.
    ///
    /// Reads the current row first; fields left `None` keep their stored
    /// values and all three columns are written back in one statement. An
    /// empty email clears the stored one.
    pub async fn update_client(
        &self,
        id: i64,
        update: ClientUpdate,
    ) -> Result<i64, DirectoryError> {
        update.validate()?;
        let current = self
            .clients
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::ClientNotFound(id))?;

        let first_name = update.first_name.unwrap_or(current.first_name);
        let last_name = update.last_name.unwrap_or(current.last_name);
        let email = match update.email {
            Some(email) if email.is_empty() => None,
            Some(email) => Some(email),
            None => current.email,
        };

        let updated = self
            .clients
            .update(id, &first_name, &last_name, email.as_deref())
            .await?
            .ok_or(DirectoryError::ClientNotFound(id))?;
        info!(client_id = id, "Client updated");
        Ok(updated)
    }

    /// Remove a phone number from a client, returning the removed row id.
    ///
    /// Duplicate rows carrying the same number are all removed; the first
    /// removed id is returned.
    pub async fn delete_phone(&self, client_id: i64, number: &str) -> Result<i64, DirectoryError> {
        let deleted = self.phones.delete_by_number(client_id, number).await?;
        let id = deleted
            .first()
            .copied()
            .ok_or_else(|| DirectoryError::PhoneNotFound {
                client_id,
                number: number.to_string(),
            })?;
        info!(client_id, phone_id = id, "Phone number deleted");
        Ok(id)
    }

    /// Remove a client together with every phone number it owns, returning
    /// the client id.
    ///
    /// Two statements in mandatory order, phones first. There is no wrapping
    /// transaction: if the client delete fails the phone deletion stands.
    pub async fn delete_client(&self, id: i64) -> Result<i64, DirectoryError> {
        let phones_removed = self.phones.delete_by_client(id).await?;
        let deleted = self
            .clients
            .delete(id)
            .await?
            .ok_or(DirectoryError::ClientNotFound(id))?;
        info!(client_id = id, phones_removed, "Client deleted");
        Ok(deleted)
    }

    /// Find the ids of clients matching every supplied criterion, ascending.
    ///
    /// Each pattern compiles as a case-insensitive regex and matches against
    /// the field it names; the `number` criterion qualifies a client when at
    /// least one of its phone numbers matches, so phoneless clients never
    /// qualify. A NULL email matches no pattern. The result is the
    /// intersection of the per-field match sets.
    pub async fn find_clients(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<i64>, DirectoryError> {
        if criteria.is_empty() {
            return Err(DirectoryError::EmptyCriteria);
        }

        let need_clients = criteria.first_name.is_some()
            || criteria.last_name.is_some()
            || criteria.email.is_some();
        let clients = if need_clients {
            self.clients.list_all().await?
        } else {
            Vec::new()
        };

        let mut matches: Option<BTreeSet<i64>> = None;

        if let Some(pattern) = &criteria.first_name {
            let regex = compile_pattern(pattern)?;
            let ids = clients
                .iter()
                .filter(|c| regex.is_match(&c.first_name))
                .map(|c| c.id)
                .collect();
            matches = Some(intersect(matches, ids));
        }

        if let Some(pattern) = &criteria.last_name {
            let regex = compile_pattern(pattern)?;
            let ids = clients
                .iter()
                .filter(|c| regex.is_match(&c.last_name))
                .map(|c| c.id)
                .collect();
            matches = Some(intersect(matches, ids));
        }

        if let Some(pattern) = &criteria.email {
            let regex = compile_pattern(pattern)?;
            let ids = clients
                .iter()
                .filter(|c| {
                    c.email
                        .as_deref()
                        .is_some_and(|email| regex.is_match(email))
                })
                .map(|c| c.id)
                .collect();
            matches = Some(intersect(matches, ids));
        }

        if let Some(pattern) = &criteria.number {
            let regex = compile_pattern(pattern)?;
            let ids = self
                .phones
                .list_all()
                .await?
                .iter()
                .filter(|p| regex.is_match(&p.number))
                .map(|p| p.client_id)
                .collect();
            matches = Some(intersect(matches, ids));
        }

        Ok(matches.unwrap_or_default().into_iter().collect())
    }

    /// Render every row of a table as a tuple string, ordered by id.
    ///
    /// Diagnostic output, not a durable format.
    pub async fn dump_table(&self, table: Table) -> Result<Vec<String>, DirectoryError> {
        let rows = match table {
            Table::Client => self
                .clients
                .list_all()
                .await?
                .iter()
                .map(format_client_row)
                .collect(),
            Table::PhoneNumber => self
                .phones
                .list_all()
                .await?
                .iter()
                .map(format_phone_row)
                .collect(),
        };
        Ok(rows)
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex, DirectoryError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| DirectoryError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

fn intersect(current: Option<BTreeSet<i64>>, ids: BTreeSet<i64>) -> BTreeSet<i64> {
    match current {
        Some(current) => current.intersection(&ids).copied().collect(),
        None => ids,
    }
}

fn format_client_row(client: &Client) -> String {
    match &client.email {
        Some(email) => format!(
            "({}, '{}', '{}', '{}')",
            client.id, client.first_name, client.last_name, email
        ),
        None => format!(
            "({}, '{}', '{}', NULL)",
            client.id, client.first_name, client.last_name
        ),
    }
}

fn format_phone_row(phone: &PhoneNumber) -> String {
    format!("({}, {}, '{}')", phone.id, phone.client_id, phone.number)
}
