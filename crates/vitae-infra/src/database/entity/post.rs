//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use vitae_core::domain::{Post, PostFields};

use crate::database::ResourceEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
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
    type Resource = Post;

    fn id_column() -> Column {
        Column::Id
    }

    fn insert_model(fields: PostFields, now: DateTime) -> ActiveModel {
        ActiveModel {
            created_at: Set(now),
            ..Self::update_model(fields, now)
        }
    }

    fn update_model(fields: PostFields, now: DateTime) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            user_id: Set(fields.user_id),
            title: Set(fields.title),
            content: Set(fields.content),
            created_at: NotSet,
            updated_at: Set(now),
        }
    }
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            content: model.content,
            created_at: model.created_at.and_utc(),
            updated_at: model.updated_at.and_utc(),
        }
    }
}
