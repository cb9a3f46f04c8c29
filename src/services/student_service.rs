//! Student service - Handles student account use cases.

use async_trait::async_trait;
use std::sync::Arc;

use domain::{has_student_email_domain, student_not_found, CreateStudent, StudentResponse};

use crate::errors::{AppResult, OptionExt};
use crate::infra::StudentRepository;

/// Student service trait for dependency injection.
#[async_trait]
pub trait StudentService: Send + Sync {
    /// Get a student profile by ID
    async fn find_by_id(&self, id: i64) -> AppResult<StudentResponse>;

    /// Check whether a student already signed up with this email
    async fn email_exists(&self, email: &str) -> AppResult<bool>;

    /// Check the email belongs to the university student domain
    fn validate_email_domain(&self, email: &str) -> bool;

    /// Persist a new student account.
    ///
    /// Domain and uniqueness checks are done by the caller beforehand.
    async fn create_account(&self, student: CreateStudent) -> AppResult<()>;
}

/// Concrete implementation of StudentService using repository.
pub struct StudentManager {
    repo: Arc<dyn StudentRepository>,
}

impl StudentManager {
    /// Create new student service instance with repository
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl StudentService for StudentManager {
    async fn find_by_id(&self, id: i64) -> AppResult<StudentResponse> {
        self.repo
            .find_by_id(id)
            .await?
            .map(StudentResponse::from)
            .ok_or_not_found(student_not_found(id))
    }

    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        Ok(self.repo.find_by_email(email).await?.is_some())
    }

    fn validate_email_domain(&self, email: &str) -> bool {
        has_student_email_domain(email)
    }

    async fn create_account(&self, student: CreateStudent) -> AppResult<()> {
        let created = self.repo.create(student).await?;
        tracing::debug!(id = created.id, "student account created");
        Ok(())
    }
}
