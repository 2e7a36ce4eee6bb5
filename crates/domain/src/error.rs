//! Domain error types for directory operations.

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Errors produced by directory operations.
///
/// Constraint violations come from the store; the not-found variants are
/// derived from empty results and are distinct from them.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Client not found: {0}")]
    ClientNotFound(i64),

    #[error("Phone number '{number}' not found for client {client_id}")]
    PhoneNotFound { client_id: i64, number: String },

    #[error("A client with this email already exists")]
    DuplicateEmail,

    #[error("Referenced client does not exist")]
    UnknownClient,

    #[error("Constraint violated: {0}")]
    Constraint(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid search pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("Search criteria must constrain at least one field")]
    EmptyCriteria,

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for DirectoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation => DirectoryError::DuplicateEmail,
                ErrorKind::ForeignKeyViolation => DirectoryError::UnknownClient,
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    DirectoryError::Constraint(db_err.to_string())
                }
                _ => DirectoryError::Database(sqlx::Error::Database(db_err)),
            },
            _ => DirectoryError::Database(err),
        }
    }
}

impl From<validator::ValidationErrors> for DirectoryError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| match &e.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: invalid value", field),
                })
            })
            .collect();

        DirectoryError::Validation(messages.join("; "))
    }
}
