//! CRUD business rules shared by every resource.

use std::sync::Arc;

use crate::domain::Resource;
use crate::error::{DomainError, RepoError};
use crate::ports::Repository;

/// List, get, create, update and delete for one resource type.
///
/// Required fields are checked before any write. Update and delete check
/// existence first, so `NotFound` wins over `EmptyFields`.
pub struct ResourceService<R: Resource> {
    repo: Arc<dyn Repository<R>>,
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(repo: Arc<dyn Repository<R>>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<R>, DomainError> {
        self.repo
            .find_all()
            .await
            .map_err(|e| internal(format!("Could not fetch {} list from database", noun::<R>()), e))
    }

    pub async fn get(&self, id: i32) -> Result<R, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| internal(format!("Could not fetch {} with id {id}", noun::<R>()), e))?
            .ok_or_else(|| not_found::<R>(id))
    }

    pub async fn create(&self, payload: R::Payload) -> Result<R, DomainError> {
        let fields = R::validate(payload)?;

        self.repo
            .insert(fields)
            .await
            .map_err(|e| internal(format!("Could not create new {}", noun::<R>()), e))
    }

    pub async fn update(&self, id: i32, payload: R::Payload) -> Result<R, DomainError> {
        self.get(id).await?;
        let fields = R::validate(payload)?;

        // The row may have been deleted since the check above.
        self.repo
            .update(id, fields)
            .await
            .map_err(|e| internal(format!("Could not update {} with id {id}", noun::<R>()), e))?
            .ok_or_else(|| not_found::<R>(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        self.get(id).await?;

        match self.repo.delete(id).await {
            Ok(()) => Ok(()),
            Err(RepoError::NotFound) => Err(not_found::<R>(id)),
            Err(e) => Err(internal(
                format!("Could not delete {} with id {id}", noun::<R>()),
                e,
            )),
        }
    }
}

fn noun<R: Resource>() -> String {
    R::LABEL.to_lowercase()
}

fn not_found<R: Resource>(id: i32) -> DomainError {
    DomainError::NotFound {
        entity_type: R::LABEL,
        id,
    }
}

fn internal(context: String, err: RepoError) -> DomainError {
    DomainError::Internal(format!("{context}: {err}"))
}
