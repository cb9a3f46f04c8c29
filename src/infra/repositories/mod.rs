//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod school_repository;
mod student_repository;

use sea_orm::{DbErr, SqlErr};

use crate::errors::AppError;
use domain::EMAIL_TAKEN_MESSAGE;

pub use school_repository::{SchoolRepository, SchoolStore};
pub use student_repository::{StudentRepository, StudentStore};

#[cfg(test)]
pub use school_repository::MockSchoolRepository;
#[cfg(test)]
pub use student_repository::MockStudentRepository;

/// Classify a failed account insert.
///
/// The unique index on `email` settles signups that raced past the
/// existence check, so its violation is reported as the same conflict.
pub(crate) fn map_insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::info!("email uniqueness enforced by store: {}", detail);
            AppError::conflict(EMAIL_TAKEN_MESSAGE)
        }
        _ => AppError::from(err),
    }
}
