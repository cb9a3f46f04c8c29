//! Domain layer - Core business entities and wire payloads.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the school and student entities, the request/response payloads exchanged
//! over HTTP, and the conversions between them.

pub mod constants;
pub mod school;
pub mod student;

pub use constants::*;
pub use school::{CreateSchool, School, SchoolResponse, UpdateSchool};
pub use student::{has_student_email_domain, CreateStudent, Student, StudentResponse};
