//! Phone number domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A phone number attached to a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PhoneNumber {
    pub id: i64,
    pub client_id: i64,
    pub number: String,
}

/// Request payload for attaching a phone number to a client.
///
/// The same number may be attached to a client more than once; the store
/// does not deduplicate.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct NewPhone {
    pub client_id: i64,

    #[validate(length(
        min = 1,
        max = 20,
        message = "Number must be between 1 and 20 characters"
    ))]
    pub number: String,
}

impl NewPhone {
    pub fn new(client_id: i64, number: impl Into<String>) -> Self {
        Self {
            client_id,
            number: number.into(),
        }
    }
}
