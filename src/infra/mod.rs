//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories over the schools and students tables

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{SchoolRepository, SchoolStore, StudentRepository, StudentStore};

#[cfg(test)]
pub use repositories::{MockSchoolRepository, MockStudentRepository};
