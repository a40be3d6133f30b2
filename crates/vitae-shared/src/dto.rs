//! Data Transfer Objects - request bodies accepted by the API.
//!
//! Every field is optional on the wire so that a missing value can be reported
//! by name instead of failing deserialization. An empty string is read as an
//! absent value; `0` and `false` are values.

use chrono::NaiveDate;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Reads `null`, a missing key and `""` as `None`.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(value) => T::deserialize(value).map(Some).map_err(D::Error::custom),
    }
}

/// Body of `POST /api/users` and `PATCH /api/users/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub address: Option<String>,
}

/// Body of `POST /api/posts` and `PATCH /api/posts/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub user_id: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub content: Option<String>,
}

/// Body of `POST /api/messages` and `PATCH /api/messages/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePayload {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub to_user: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub from_user: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub content: Option<String>,
}

/// Body of `POST /api/skills` and `PATCH /api/skills/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPayload {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub user_id: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub content: Option<String>,
}

/// Body of `POST /api/academic_trainings` and `PATCH /api/academic_trainings/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicTrainingPayload {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub user_id: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub institution: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub start_year: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub end_year: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub certificate_url: Option<String>,
}
