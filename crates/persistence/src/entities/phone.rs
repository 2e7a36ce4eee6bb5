//! Phone number entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the phone_number table.
#[derive(Debug, Clone, FromRow)]
pub struct PhoneNumberEntity {
    pub id: i64,
    pub client_id: i64,
    pub number: String,
}

impl From<PhoneNumberEntity> for domain::models::PhoneNumber {
    fn from(entity: PhoneNumberEntity) -> Self {
        Self {
            id: entity.id,
            client_id: entity.client_id,
            number: entity.number,
        }
    }
}
