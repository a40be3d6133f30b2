//! # Vitae Infrastructure
//!
//! Concrete implementations of the ports defined in `vitae-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//!
//! The in-memory store is always available.

pub mod database;

pub use database::{DatabaseConfig, InMemoryRepository, InMemoryStore};

#[cfg(feature = "postgres")]
pub use database::PostgresRepository;
