use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTime;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, QueryFilter, QueryOrder, SqlErr, TransactionTrait,
};

use vitae_core::Resource;
use vitae_core::error::RepoError;
use vitae_core::ports::Repository;

/// A SeaORM entity backing one [`Resource`].
pub trait ResourceEntity: EntityTrait {
    type Resource: Resource + From<Self::Model>;

    fn id_column() -> Self::Column;

    /// Row for `INSERT`: every writable column plus both timestamps.
    fn insert_model(
        fields: <Self::Resource as Resource>::Fields,
        now: DateTime,
    ) -> Self::ActiveModel;

    /// Changes for `UPDATE`: every writable column plus `updated_at`.
    fn update_model(
        fields: <Self::Resource as Resource>::Fields,
        now: DateTime,
    ) -> Self::ActiveModel;
}

/// Generic PostgreSQL repository implementation.
pub struct PostgresRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E> Repository<E::Resource> for PostgresRepository<E>
where
    E: ResourceEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    async fn find_all(&self) -> Result<Vec<E::Resource>, RepoError> {
        let rows = E::find()
            .order_by_asc(E::id_column())
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<E::Resource>, RepoError> {
        let result = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(result.map(Into::into))
    }

    async fn insert(
        &self,
        fields: <E::Resource as Resource>::Fields,
    ) -> Result<E::Resource, RepoError> {
        let model = E::insert_model(fields, Utc::now().naive_utc())
            .insert(&self.db)
            .await
            .map_err(db_error)?;

        tracing::debug!(table = E::default().table_name(), "Row inserted");
        Ok(model.into())
    }

    async fn update(
        &self,
        id: i32,
        fields: <E::Resource as Resource>::Fields,
    ) -> Result<Option<E::Resource>, RepoError> {
        // Conditional write and re-read in one transaction: a row deleted after
        // the caller's existence check shows up as zero affected rows.
        let txn = self.db.begin().await.map_err(db_error)?;

        let result = E::update_many()
            .set(E::update_model(fields, Utc::now().naive_utc()))
            .filter(E::id_column().eq(id))
            .exec(&txn)
            .await
            .map_err(db_error)?;

        let row = if result.rows_affected == 0 {
            None
        } else {
            E::find_by_id(id).one(&txn).await.map_err(db_error)?
        };

        txn.commit().await.map_err(db_error)?;

        tracing::debug!(
            table = E::default().table_name(),
            id,
            rows_affected = result.rows_affected,
            "Row updated"
        );
        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(table = E::default().table_name(), id, "Row deleted");
        Ok(())
    }
}

/// Classify a SeaORM error.
pub(crate) fn db_error(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg))
        | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => return RepoError::Constraint(msg),
        _ => {}
    }

    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        _ => RepoError::Query(err.to_string()),
    }
}
