//! Domain entities - the core business objects.

mod academic_training;
mod message;
mod post;
mod skill;
mod user;
mod validation;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::DomainError;

pub use academic_training::{AcademicTraining, AcademicTrainingFields};
pub use message::{Message, MessageFields};
pub use post::{Post, PostFields};
pub use skill::{Skill, SkillFields};
pub use user::{User, UserFields};
pub use validation::RequiredFields;

/// An entity exposed through the generic CRUD surface.
///
/// `Payload` is what arrives on the wire, with every field optional.
/// `Fields` is the validated set of writable columns; storage assigns the id
/// and both timestamps.
pub trait Resource: Serialize + Clone + Send + Sync + 'static {
    /// Name used in messages, e.g. `"User with id 3 not found."`.
    const LABEL: &'static str;

    type Payload: DeserializeOwned + Send + 'static;
    type Fields: Clone + Send + Sync + 'static;

    /// Check required fields, reporting every missing one at once.
    fn validate(payload: Self::Payload) -> Result<Self::Fields, DomainError>;

    fn id(&self) -> i32;
}
