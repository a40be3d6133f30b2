//! Storage adapters: PostgreSQL via SeaORM and an in-memory fallback.

mod connections;
pub mod memory;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::DatabaseConfig;
pub use memory::{InMemoryRepository, InMemoryStore};

#[cfg(feature = "postgres")]
pub use connections::connect;
#[cfg(feature = "postgres")]
pub use sea_orm::DbConn;
#[cfg(feature = "postgres")]
pub use postgres_base::{PostgresRepository, ResourceEntity};
#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresAcademicTrainingRepository, PostgresMessageRepository, PostgresPostRepository,
    PostgresSkillRepository, PostgresUserRepository,
};
