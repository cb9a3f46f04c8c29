//! Student database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use domain::{CreateStudent, Student};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub student_number: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Student {
    fn from(model: Model) -> Self {
        Student {
            id: model.id,
            email: model.email,
            student_number: model.student_number,
            first_name: model.first_name,
            last_name: model.last_name,
            image: model.image,
            created_at: model.created_at,
        }
    }
}

/// Convert signup payload to a row ready for insert (id assigned by the store)
impl From<CreateStudent> for ActiveModel {
    fn from(dto: CreateStudent) -> Self {
        ActiveModel {
            id: NotSet,
            email: Set(dto.email),
            student_number: Set(dto.student_number),
            first_name: Set(dto.first_name),
            last_name: Set(dto.last_name),
            image: Set(dto.image),
            created_at: Set(chrono::Utc::now()),
        }
    }
}
