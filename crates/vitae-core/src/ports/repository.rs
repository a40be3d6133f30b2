use async_trait::async_trait;

use crate::domain::Resource;
use crate::error::RepoError;

/// Storage for one resource type.
///
/// Implementations assign the id and both timestamps on insert, and refresh
/// `updated_at` on update.
#[async_trait]
pub trait Repository<R: Resource>: Send + Sync {
    /// Every row, in storage order.
    async fn find_all(&self) -> Result<Vec<R>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: i32) -> Result<Option<R>, RepoError>;

    /// Persist a new row and return it as stored.
    async fn insert(&self, fields: R::Fields) -> Result<R, RepoError>;

    /// Overwrite the writable columns of row `id` and return the row read back
    /// after the write. `None` if no such row exists at write time.
    async fn update(&self, id: i32, fields: R::Fields) -> Result<Option<R>, RepoError>;

    /// Delete an entity by its ID. `RepoError::NotFound` if nothing was deleted.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}
