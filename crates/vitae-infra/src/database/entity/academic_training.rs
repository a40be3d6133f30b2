//! Academic training entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use vitae_core::domain::{AcademicTraining, AcademicTrainingFields};

use crate::database::ResourceEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "academic_trainings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub institution: String,
    pub completed: bool,
    pub start_year: Date,
    pub end_year: Option<Date>,
    pub certificate_url: Option<String>,
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
    type Resource = AcademicTraining;

    fn id_column() -> Column {
        Column::Id
    }

    fn insert_model(fields: AcademicTrainingFields, now: DateTime) -> ActiveModel {
        ActiveModel {
            created_at: Set(now),
            ..Self::update_model(fields, now)
        }
    }

    fn update_model(fields: AcademicTrainingFields, now: DateTime) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            user_id: Set(fields.user_id),
            title: Set(fields.title),
            institution: Set(fields.institution),
            completed: Set(fields.completed),
            start_year: Set(fields.start_year),
            end_year: Set(Some(fields.end_year)),
            certificate_url: Set(fields.certificate_url),
            created_at: NotSet,
            updated_at: Set(now),
        }
    }
}

impl From<Model> for AcademicTraining {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            institution: model.institution,
            completed: model.completed,
            start_year: model.start_year,
            end_year: model.end_year,
            certificate_url: model.certificate_url,
            created_at: model.created_at.and_utc(),
            updated_at: model.updated_at.and_utc(),
        }
    }
}
