//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on repository traits so handlers
//! and tests can swap the storage behind them.

mod school_service;
mod student_service;

pub use school_service::{SchoolManager, SchoolService};
pub use student_service::{StudentManager, StudentService};
