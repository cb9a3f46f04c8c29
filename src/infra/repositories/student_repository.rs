//! Student repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::student::{self, ActiveModel, Entity as StudentEntity};
use super::map_insert_error;
use crate::errors::{AppError, AppResult};
use domain::{CreateStudent, Student};

#[cfg(test)]
use mockall::automock;

/// Student repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Find student by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Student>>;

    /// Find student by university email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>>;

    /// Insert a new student, the store assigns the ID
    async fn create(&self, student: CreateStudent) -> AppResult<Student>;
}

/// Concrete implementation of StudentRepository
pub struct StudentStore {
    db: Arc<DatabaseConnection>,
}

impl StudentStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentRepository for StudentStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Student>> {
        let result = StudentEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Student::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        let result = StudentEntity::find()
            .filter(student::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Student::from))
    }

    async fn create(&self, student: CreateStudent) -> AppResult<Student> {
        let model = ActiveModel::from(student)
            .insert(self.db.as_ref())
            .await
            .map_err(map_insert_error)?;

        Ok(Student::from(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn student_model(id: i64) -> student::Model {
        student::Model {
            id,
            email: "a@student.unimelb.edu.au".to_string(),
            student_number: "123".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
            image: None,
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn find_by_email_maps_stored_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![student_model(2)]])
            .into_connection();

        let student = StudentStore::new(Arc::new(db))
            .find_by_email("a@student.unimelb.edu.au")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(student.id, 2);
        assert_eq!(student.student_number, "123");
    }

    #[tokio::test]
    async fn find_by_id_returns_none_when_absent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<student::Model>::new()])
            .into_connection();

        assert!(StudentStore::new(Arc::new(db)).find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_surfaces_store_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let err = StudentStore::new(Arc::new(db))
            .create(CreateStudent {
                email: "a@student.unimelb.edu.au".to_string(),
                student_number: "123".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
    }
}
