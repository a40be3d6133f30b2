use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use vitae_shared::dto::AcademicTrainingPayload;

use super::{RequiredFields, Resource};
use crate::error::DomainError;

/// Academic training entity - a course or degree on a user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicTraining {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub institution: String,
    pub completed: bool,
    pub start_year: NaiveDate,
    /// Nullable in storage; always set by this API.
    pub end_year: Option<NaiveDate>,
    pub certificate_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AcademicTrainingFields {
    pub user_id: i32,
    pub title: String,
    pub institution: String,
    pub completed: bool,
    pub start_year: NaiveDate,
    pub end_year: NaiveDate,
    pub certificate_url: Option<String>,
}

impl Resource for AcademicTraining {
    const LABEL: &'static str = "Academic training";

    type Payload = AcademicTrainingPayload;
    type Fields = AcademicTrainingFields;

    fn validate(payload: AcademicTrainingPayload) -> Result<AcademicTrainingFields, DomainError> {
        let mut required = RequiredFields::new();
        let user_id = required.value("userId", payload.user_id);
        let title = required.text("title", payload.title);
        let institution = required.text("institution", payload.institution);
        let completed = required.value("completed", payload.completed);
        let start_year = required.value("startYear", payload.start_year);
        let end_year = required.value("endYear", payload.end_year);

        match (user_id, title, institution, completed, start_year, end_year) {
            (
                Some(user_id),
                Some(title),
                Some(institution),
                Some(completed),
                Some(start_year),
                Some(end_year),
            ) => Ok(AcademicTrainingFields {
                user_id,
                title,
                institution,
                completed,
                start_year,
                end_year,
                certificate_url: payload.certificate_url,
            }),
            _ => Err(required.into_error()),
        }
    }

    fn id(&self) -> i32 {
        self.id
    }
}
