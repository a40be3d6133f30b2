//! SeaORM entities, one per table.

pub mod academic_training;
pub mod message;
pub mod post;
pub mod skill;
pub mod user;
