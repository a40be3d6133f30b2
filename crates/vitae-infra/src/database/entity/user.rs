//! User entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use vitae_core::domain::{User, UserFields};

use crate::database::ResourceEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub birth_date: Date,
    pub short_description: String,
    pub address: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
    #[sea_orm(has_many = "super::skill::Entity")]
    Skill,
    #[sea_orm(has_many = "super::academic_training::Entity")]
    AcademicTraining,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::skill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skill.def()
    }
}

impl Related<super::academic_training::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcademicTraining.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ResourceEntity for Entity {
    type Resource = User;

    fn id_column() -> Column {
        Column::Id
    }

    fn insert_model(fields: UserFields, now: DateTime) -> ActiveModel {
        ActiveModel {
            created_at: Set(now),
            ..Self::update_model(fields, now)
        }
    }

    fn update_model(fields: UserFields, now: DateTime) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            full_name: Set(fields.full_name),
            birth_date: Set(fields.birth_date),
            short_description: Set(fields.short_description),
            address: Set(fields.address),
            created_at: NotSet,
            updated_at: Set(now),
        }
    }
}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            birth_date: model.birth_date,
            short_description: model.short_description,
            address: model.address,
            created_at: model.created_at.and_utc(),
            updated_at: model.updated_at.and_utc(),
        }
    }
}
