//! Skill entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use vitae_core::domain::{Skill, SkillFields};

use crate::database::ResourceEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ResourceEntity for Entity {
    type Resource = Skill;

    fn id_column() -> Column {
        Column::Id
    }

    fn insert_model(fields: SkillFields, now: DateTime) -> ActiveModel {
        ActiveModel {
            created_at: Set(now),
            ..Self::update_model(fields, now)
        }
    }

    fn update_model(fields: SkillFields, now: DateTime) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            user_id: Set(fields.user_id),
            content: Set(fields.content),
            created_at: NotSet,
            updated_at: Set(now),
        }
    }
}

impl From<Model> for Skill {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            content: model.content,
            created_at: model.created_at.and_utc(),
            updated_at: model.updated_at.and_utc(),
        }
    }
}
