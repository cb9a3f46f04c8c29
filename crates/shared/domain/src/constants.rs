//! Domain-level constants.
//!
//! These constants define business rules and the fixed response texts
//! clients rely on.

// =============================================================================
// Student accounts
// =============================================================================

/// Email domain every student account must belong to
pub const STUDENT_EMAIL_DOMAIN: &str = "@student.unimelb.edu.au";

// =============================================================================
// Response messages
// =============================================================================

/// Body returned by successful signup and login calls
pub const SUCCESS_MESSAGE: &str = "success";

/// Conflict body when the signup email is already registered
pub const EMAIL_TAKEN_MESSAGE: &str = "Email has taken";

/// Conflict body when a student signs up outside the university domain
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid Email";

/// Body returned after a school profile update
pub const SCHOOL_UPDATED_MESSAGE: &str = "School updated successfully.";

/// NotFound message for a school identifier
pub fn school_not_found(id: i64) -> String {
    format!("School not found for ID: {}", id)
}

/// NotFound message for a student identifier
pub fn student_not_found(id: i64) -> String {
    format!("Student not found for ID: {}", id)
}
