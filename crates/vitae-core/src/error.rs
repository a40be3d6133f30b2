//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} with id {id} not found.")]
    NotFound { entity_type: &'static str, id: i32 },

    #[error("The following fields are required and cannot be empty: {}", .0.join(", "))]
    EmptyFields(Vec<&'static str>),

    #[error("{0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_message_lists_every_field() {
        let err = DomainError::EmptyFields(vec!["userId", "content"]);
        assert_eq!(
            err.to_string(),
            "The following fields are required and cannot be empty: userId, content"
        );
    }

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = DomainError::NotFound {
            entity_type: "Academic training",
            id: 12,
        };
        assert_eq!(err.to_string(), "Academic training with id 12 not found.");
    }
}
