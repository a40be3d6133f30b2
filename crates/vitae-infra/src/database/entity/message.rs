//! Message entity for SeaORM.
//!
//! Both `to_user` and `from_user` reference `users`, so there is no single
//! `Related<user::Entity>` impl; join through the named relations instead.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use vitae_core::domain::{Message, MessageFields};

use crate::database::ResourceEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub to_user: i32,
    pub from_user: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ToUser",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ToUser,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::FromUser",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FromUser,
}

impl ActiveModelBehavior for ActiveModel {}

impl ResourceEntity for Entity {
    type Resource = Message;

    fn id_column() -> Column {
        Column::Id
    }

    fn insert_model(fields: MessageFields, now: DateTime) -> ActiveModel {
        ActiveModel {
            created_at: Set(now),
            ..Self::update_model(fields, now)
        }
    }

    fn update_model(fields: MessageFields, now: DateTime) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            content: Set(fields.content),
            created_at: NotSet,
            updated_at: Set(now),
            to_user: Set(fields.to_user),
            from_user: Set(fields.from_user),
        }
    }
}

impl From<Model> for Message {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            to_user: model.to_user,
            from_user: model.from_user,
            content: model.content,
            created_at: model.created_at.and_utc(),
            updated_at: model.updated_at.and_utc(),
        }
    }
}
