use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitae_shared::dto::PostPayload;

use super::{RequiredFields, Resource};
use crate::error::DomainError;

/// Post entity - an article published by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostFields {
    pub user_id: i32,
    pub title: String,
    pub content: String,
}

impl Resource for Post {
    const LABEL: &'static str = "Post";

    type Payload = PostPayload;
    type Fields = PostFields;

    fn validate(payload: PostPayload) -> Result<PostFields, DomainError> {
        let mut required = RequiredFields::new();
        let user_id = required.value("userId", payload.user_id);
        let title = required.text("title", payload.title);
        let content = required.text("content", payload.content);

        match (user_id, title, content) {
            (Some(user_id), Some(title), Some(content)) => Ok(PostFields {
                user_id,
                title,
                content,
            }),
            _ => Err(required.into_error()),
        }
    }

    fn id(&self) -> i32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_only_post_is_missing_user_and_content() {
        let payload = PostPayload {
            title: Some("T".to_string()),
            ..Default::default()
        };

        match Post::validate(payload) {
            Err(DomainError::EmptyFields(fields)) => assert_eq!(fields, vec!["userId", "content"]),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
