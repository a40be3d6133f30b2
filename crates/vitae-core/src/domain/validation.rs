//! Required-field checks shared by every resource.

use crate::error::DomainError;

/// Collects the wire names of missing fields in the order they are checked.
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a non-empty string.
    pub fn text(&mut self, name: &'static str, value: Option<String>) -> Option<String> {
        let value = value.filter(|s| !s.is_empty());
        self.value(name, value)
    }

    /// Require any value. `0` and `false` count as present.
    pub fn value<T>(&mut self, name: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing.push(name);
        }
        value
    }

    pub fn into_error(self) -> DomainError {
        DomainError::EmptyFields(self.missing)
    }
}
