//! School database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use domain::{CreateSchool, School};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "schools")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub school_name: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub web_address: Option<String>,
    pub sector: Option<String>,
    pub year_levels: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for School {
    fn from(model: Model) -> Self {
        School {
            id: model.id,
            email: model.email,
            school_name: model.school_name,
            contact_name: model.contact_name,
            contact_email: model.contact_email,
            web_address: model.web_address,
            sector: model.sector,
            year_levels: model.year_levels,
            image: model.image,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert signup payload to a row ready for insert (id assigned by the store)
impl From<CreateSchool> for ActiveModel {
    fn from(dto: CreateSchool) -> Self {
        let now = chrono::Utc::now();
        ActiveModel {
            id: NotSet,
            email: Set(dto.email),
            school_name: Set(dto.school_name),
            contact_name: Set(dto.contact_name),
            contact_email: Set(dto.contact_email),
            web_address: Set(dto.web_address),
            sector: Set(dto.sector),
            year_levels: Set(dto.year_levels),
            image: Set(dto.image),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}
