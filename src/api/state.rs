//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::{Database, SchoolStore, StudentStore};
use crate::services::{SchoolManager, SchoolService, StudentManager, StudentService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// School account service
    pub school_service: Arc<dyn SchoolService>,
    /// Student account service
    pub student_service: Arc<dyn StudentService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the SeaORM-backed repositories and services over one connection pool.
    pub fn from_database(database: Arc<Database>) -> Self {
        let school_repo = Arc::new(SchoolStore::new(database.get_connection()));
        let student_repo = Arc::new(StudentStore::new(database.get_connection()));

        Self {
            school_service: Arc::new(SchoolManager::new(school_repo)),
            student_service: Arc::new(StudentManager::new(student_repo)),
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        school_service: Arc<dyn SchoolService>,
        student_service: Arc<dyn StudentService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            school_service,
            student_service,
            database,
        }
    }
}
