use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitae_shared::dto::SkillPayload;

use super::{RequiredFields, Resource};
use crate::error::DomainError;

/// Skill entity - a free-text skill listed on a user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i32,
    pub user_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillFields {
    pub user_id: i32,
    pub content: String,
}

impl Resource for Skill {
    const LABEL: &'static str = "Skill";

    type Payload = SkillPayload;
    type Fields = SkillFields;

    fn validate(payload: SkillPayload) -> Result<SkillFields, DomainError> {
        let mut required = RequiredFields::new();
        let user_id = required.value("userId", payload.user_id);
        let content = required.text("content", payload.content);

        match (user_id, content) {
            (Some(user_id), Some(content)) => Ok(SkillFields { user_id, content }),
            _ => Err(required.into_error()),
        }
    }

    fn id(&self) -> i32 {
        self.id
    }
}
