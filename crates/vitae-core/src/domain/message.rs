use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitae_shared::dto::MessagePayload;

use super::{RequiredFields, Resource};
use crate::error::DomainError;

/// Message entity - a direct message from one user to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i32,
    pub to_user: i32,
    pub from_user: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageFields {
    pub to_user: i32,
    pub from_user: i32,
    pub content: String,
}

impl Resource for Message {
    const LABEL: &'static str = "Message";

    type Payload = MessagePayload;
    type Fields = MessageFields;

    fn validate(payload: MessagePayload) -> Result<MessageFields, DomainError> {
        let mut required = RequiredFields::new();
        let to_user = required.value("toUser", payload.to_user);
        let from_user = required.value("fromUser", payload.from_user);
        let content = required.text("content", payload.content);

        match (to_user, from_user, content) {
            (Some(to_user), Some(from_user), Some(content)) => Ok(MessageFields {
                to_user,
                from_user,
                content,
            }),
            _ => Err(required.into_error()),
        }
    }

    fn id(&self) -> i32 {
        self.id
    }
}
