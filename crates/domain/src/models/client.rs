//! Client domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A client record as stored in the directory.
///
/// `email` is `None` when the client has no email on file; only present
/// emails are subject to the uniqueness rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Client {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

/// Request payload for creating a client.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct NewClient {
    #[validate(length(
        min = 1,
        max = 50,
        message = "First name must be between 1 and 50 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = 50,
        message = "Last name must be between 1 and 50 characters"
    ))]
    pub last_name: String,

    #[validate(length(max = 100, message = "Email must be at most 100 characters"))]
    pub email: Option<String>,
}

impl NewClient {
    /// Creates a request without an email.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// The email to store, with an empty string treated as absent.
    pub fn email_normalized(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}

/// Partial update of a client record.
///
/// Fields left `None` keep their stored values. An empty `email` clears
/// the stored one.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct ClientUpdate {
    #[validate(length(
        min = 1,
        max = 50,
        message = "First name must be between 1 and 50 characters"
    ))]
    pub first_name: Option<String>,

    #[validate(length(
        min = 1,
        max = 50,
        message = "Last name must be between 1 and 50 characters"
    ))]
    pub last_name: Option<String>,

    #[validate(length(max = 100, message = "Email must be at most 100 characters"))]
    pub email: Option<String>,
}
