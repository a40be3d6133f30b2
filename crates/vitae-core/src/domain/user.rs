use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use vitae_shared::dto::UserPayload;

use super::{RequiredFields, Resource};
use crate::error::DomainError;

/// User entity - a person with a public profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub short_description: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable user columns.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFields {
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub short_description: String,
    pub address: String,
}

impl Resource for User {
    const LABEL: &'static str = "User";

    type Payload = UserPayload;
    type Fields = UserFields;

    fn validate(payload: UserPayload) -> Result<UserFields, DomainError> {
        let mut required = RequiredFields::new();
        let full_name = required.text("fullName", payload.full_name);
        let birth_date = required.value("birthDate", payload.birth_date);
        let short_description = required.text("shortDescription", payload.short_description);
        let address = required.text("address", payload.address);

        match (full_name, birth_date, short_description, address) {
            (Some(full_name), Some(birth_date), Some(short_description), Some(address)) => {
                Ok(UserFields {
                    full_name,
                    birth_date,
                    short_description,
                    address,
                })
            }
            _ => Err(required.into_error()),
        }
    }

    fn id(&self) -> i32 {
        self.id
    }
}
