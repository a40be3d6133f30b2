//! Application state - shared across all handlers.

use std::sync::Arc;

use vitae_core::ResourceService;
use vitae_core::domain::{AcademicTraining, Message, Post, Skill, User};
use vitae_infra::{DatabaseConfig, InMemoryStore};

#[cfg(feature = "postgres")]
use vitae_infra::database::{
    self, DbConn, PostgresAcademicTrainingRepository, PostgresMessageRepository,
    PostgresPostRepository, PostgresSkillRepository, PostgresUserRepository,
};

/// Shared application state: one service per resource over a single storage
/// handle.
#[derive(Clone)]
pub struct AppState {
    pub users: ResourceService<User>,
    pub posts: ResourceService<Post>,
    pub messages: ResourceService<Message>,
    pub skills: ResourceService<Skill>,
    pub academic_trainings: ResourceService<AcademicTraining>,
    /// `"postgres"` or `"memory"`.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state, falling back to the in-memory store when
    /// no database is configured or reachable.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let connected = match db_config {
            Some(config) => Self::connect(config).await,
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                None
            }
        };

        let state = connected.unwrap_or_else(Self::in_memory);
        tracing::info!(storage = state.storage, "Application state initialized");
        state
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        let store = InMemoryStore::new();

        Self {
            users: ResourceService::new(Arc::new(store.repository::<User>())),
            posts: ResourceService::new(Arc::new(store.repository::<Post>())),
            messages: ResourceService::new(Arc::new(store.repository::<Message>())),
            skills: ResourceService::new(Arc::new(store.repository::<Skill>())),
            academic_trainings: ResourceService::new(Arc::new(
                store.repository::<AcademicTraining>(),
            )),
            storage: "memory",
        }
    }

    #[cfg(feature = "postgres")]
    fn postgres(conn: DbConn) -> Self {
        Self {
            users: ResourceService::new(Arc::new(PostgresUserRepository::new(conn.clone()))),
            posts: ResourceService::new(Arc::new(PostgresPostRepository::new(conn.clone()))),
            messages: ResourceService::new(Arc::new(PostgresMessageRepository::new(conn.clone()))),
            skills: ResourceService::new(Arc::new(PostgresSkillRepository::new(conn.clone()))),
            academic_trainings: ResourceService::new(Arc::new(
                PostgresAcademicTrainingRepository::new(conn),
            )),
            storage: "postgres",
        }
    }

    #[cfg(feature = "postgres")]
    async fn connect(config: &DatabaseConfig) -> Option<Self> {
        match database::connect(config).await {
            Ok(conn) => Some(Self::postgres(conn)),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                None
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect(_config: &DatabaseConfig) -> Option<Self> {
        tracing::info!("Running without postgres feature - using in-memory repository");
        None
    }
}
