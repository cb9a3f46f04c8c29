//! School service - Handles school account use cases.

use async_trait::async_trait;
use std::sync::Arc;

use domain::{school_not_found, CreateSchool, SchoolResponse, UpdateSchool};

use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::SchoolRepository;

/// School service trait for dependency injection.
#[async_trait]
pub trait SchoolService: Send + Sync {
    /// Get a school profile by ID
    async fn find_by_id(&self, id: i64) -> AppResult<SchoolResponse>;

    /// Check whether a school already signed up with this email
    async fn email_exists(&self, email: &str) -> AppResult<bool>;

    /// Persist a new school account.
    ///
    /// Callers check `email_exists` first; a concurrent duplicate is still
    /// rejected by the store as a conflict.
    async fn create_account(&self, school: CreateSchool) -> AppResult<()>;

    /// Overwrite every profile field of an existing school
    async fn update_account(&self, id: i64, changes: UpdateSchool) -> AppResult<()>;
}

/// Concrete implementation of SchoolService using repository.
pub struct SchoolManager {
    repo: Arc<dyn SchoolRepository>,
}

impl SchoolManager {
    /// Create new school service instance with repository
    pub fn new(repo: Arc<dyn SchoolRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl SchoolService for SchoolManager {
    async fn find_by_id(&self, id: i64) -> AppResult<SchoolResponse> {
        self.repo
            .find_by_id(id)
            .await?
            .map(SchoolResponse::from)
            .ok_or_not_found(school_not_found(id))
    }

    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        Ok(self.repo.find_by_email(email).await?.is_some())
    }

    async fn create_account(&self, school: CreateSchool) -> AppResult<()> {
        let created = self.repo.create(school).await?;
        tracing::debug!(id = created.id, "school account created");
        Ok(())
    }

    async fn update_account(&self, id: i64, changes: UpdateSchool) -> AppResult<()> {
        let rows_affected = self.repo.update_by_id(id, changes).await?;

        if rows_affected != 1 {
            return Err(AppError::not_found(school_not_found(id)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::eq;

    use crate::infra::MockSchoolRepository;
    use domain::School;

    fn create_test_school(id: i64) -> School {
        School {
            id,
            email: "office@brunswick.edu.au".to_string(),
            school_name: Some("Brunswick Secondary".to_string()),
            contact_name: Some("Alex Park".to_string()),
            contact_email: Some("alex@brunswick.edu.au".to_string()),
            web_address: Some("https://brunswick.edu.au".to_string()),
            sector: Some("Government".to_string()),
            year_levels: Some("7-12".to_string()),
            image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_success() {
        let mut repo = MockSchoolRepository::new();
        repo.expect_find_by_id()
            .with(eq(5))
            .returning(|id| Ok(Some(create_test_school(id))));

        let service = SchoolManager::new(Arc::new(repo));
        let result = service.find_by_id(5).await.unwrap();

        let expected = create_test_school(5);
        assert_eq!(result.id, 5);
        assert_eq!(result.email, expected.email);
        assert_eq!(result.school_name, expected.school_name);
        assert_eq!(result.year_levels, expected.year_levels);
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let mut repo = MockSchoolRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = SchoolManager::new(Arc::new(repo));
        let result = service.find_by_id(404).await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::NotFound(msg) if msg == "School not found for ID: 404"
        ));
    }

    #[tokio::test]
    async fn test_email_exists() {
        let mut repo = MockSchoolRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "office@brunswick.edu.au")
            .returning(|_| Ok(Some(create_test_school(1))));
        repo.expect_find_by_email()
            .withf(|email| email == "other@brunswick.edu.au")
            .returning(|_| Ok(None));

        let service = SchoolManager::new(Arc::new(repo));

        assert!(service.email_exists("office@brunswick.edu.au").await.unwrap());
        assert!(!service.email_exists("other@brunswick.edu.au").await.unwrap());
    }

    #[tokio::test]
    async fn test_create_account_persists_payload() {
        let mut repo = MockSchoolRepository::new();
        repo.expect_create()
            .withf(|school| school.email == "office@brunswick.edu.au")
            .times(1)
            .returning(|_| Ok(create_test_school(1)));

        let service = SchoolManager::new(Arc::new(repo));
        let payload = CreateSchool {
            email: "office@brunswick.edu.au".to_string(),
            ..Default::default()
        };

        assert!(service.create_account(payload).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_account_propagates_conflict() {
        let mut repo = MockSchoolRepository::new();
        repo.expect_create()
            .returning(|_| Err(AppError::conflict("Email has taken")));

        let service = SchoolManager::new(Arc::new(repo));
        let result = service.create_account(CreateSchool::default()).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_account_success() {
        let changes = UpdateSchool {
            school_name: Some("Brunswick College".to_string()),
            ..Default::default()
        };

        let mut repo = MockSchoolRepository::new();
        repo.expect_update_by_id()
            .with(eq(3), eq(changes.clone()))
            .times(1)
            .returning(|_, _| Ok(1));

        let service = SchoolManager::new(Arc::new(repo));

        assert!(service.update_account(3, changes).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_account_missing_school() {
        let mut repo = MockSchoolRepository::new();
        repo.expect_update_by_id().returning(|_, _| Ok(0));

        let service = SchoolManager::new(Arc::new(repo));
        let result = service.update_account(999, UpdateSchool::default()).await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::NotFound(msg) if msg == "School not found for ID: 999"
        ));
    }
}
