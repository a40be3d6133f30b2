//! PostgreSQL repositories, one per table.

use super::entity::academic_training::Entity as AcademicTrainingEntity;
use super::entity::message::Entity as MessageEntity;
use super::entity::post::Entity as PostEntity;
use super::entity::skill::Entity as SkillEntity;
use super::entity::user::Entity as UserEntity;
use super::postgres_base::PostgresRepository;

/// PostgreSQL user repository. Deleting a user cascades in the database.
pub type PostgresUserRepository = PostgresRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresRepository<PostEntity>;

/// PostgreSQL message repository.
pub type PostgresMessageRepository = PostgresRepository<MessageEntity>;

/// PostgreSQL skill repository.
pub type PostgresSkillRepository = PostgresRepository<SkillEntity>;

/// PostgreSQL academic training repository.
pub type PostgresAcademicTrainingRepository = PostgresRepository<AcademicTrainingEntity>;
