//! HTTP request handlers.

pub mod health_handler;
pub mod school_handler;
pub mod student_handler;

pub use health_handler::health_routes;
pub use school_handler::school_routes;
pub use student_handler::student_routes;
