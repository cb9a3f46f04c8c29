//! School repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait,
};

use super::entities::school::{self, ActiveModel, Entity as SchoolEntity};
use super::map_insert_error;
use crate::errors::{AppError, AppResult};
use domain::{CreateSchool, School, UpdateSchool};

#[cfg(test)]
use mockall::automock;

/// School repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SchoolRepository: Send + Sync {
    /// Find school by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<School>>;

    /// Find school by login email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<School>>;

    /// Insert a new school, the store assigns the ID
    async fn create(&self, school: CreateSchool) -> AppResult<School>;

    /// Overwrite every profile field of one school.
    ///
    /// Runs in its own transaction and returns the affected-row count;
    /// the change is only committed when exactly one row matched.
    async fn update_by_id(&self, id: i64, changes: UpdateSchool) -> AppResult<u64>;
}

/// Concrete implementation of SchoolRepository
pub struct SchoolStore {
    db: Arc<DatabaseConnection>,
}

impl SchoolStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SchoolRepository for SchoolStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<School>> {
        let result = SchoolEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(School::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<School>> {
        let result = SchoolEntity::find()
            .filter(school::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(School::from))
    }

    async fn create(&self, school: CreateSchool) -> AppResult<School> {
        let model = ActiveModel::from(school)
            .insert(self.db.as_ref())
            .await
            .map_err(map_insert_error)?;

        Ok(School::from(model))
    }

    async fn update_by_id(&self, id: i64, changes: UpdateSchool) -> AppResult<u64> {
        let txn = self.db.as_ref().begin().await?;

        let result = SchoolEntity::update_many()
            .col_expr(school::Column::SchoolName, Expr::value(changes.school_name))
            .col_expr(school::Column::ContactName, Expr::value(changes.contact_name))
            .col_expr(school::Column::ContactEmail, Expr::value(changes.contact_email))
            .col_expr(school::Column::WebAddress, Expr::value(changes.web_address))
            .col_expr(school::Column::Sector, Expr::value(changes.sector))
            .col_expr(school::Column::YearLevels, Expr::value(changes.year_levels))
            .col_expr(school::Column::Image, Expr::value(changes.image))
            .col_expr(school::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(school::Column::Id.eq(id))
            .exec(&txn)
            .await;

        let rows_affected = match result {
            Ok(result) => result.rows_affected,
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                return Err(AppError::from(e));
            }
        };

        if rows_affected == 1 {
            txn.commit().await?;
        } else {
            tracing::debug!(id, rows_affected, "school update matched no single row, rolling back");
            txn.rollback().await?;
        }

        Ok(rows_affected)
    }
}
