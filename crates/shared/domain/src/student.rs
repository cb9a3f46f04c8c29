//! Student domain entity and related payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::STUDENT_EMAIL_DOMAIN;

/// Check whether an email belongs to the university student domain.
///
/// This is a plain substring test: case, the local part and repeated `@`
/// are not inspected.
pub fn has_student_email_domain(email: &str) -> bool {
    email.contains(STUDENT_EMAIL_DOMAIN)
}

/// Student domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub email: String,
    pub student_number: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Student signup payload
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudent {
    /// University email address
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// University student number
    #[validate(length(min = 1, message = "Student number is required"))]
    pub student_number: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image: Option<String>,
}

/// Student read payload (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: i64,
    pub email: String,
    pub student_number: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image: Option<String>,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            email: student.email,
            student_number: student.student_number,
            first_name: student.first_name,
            last_name: student.last_name,
            image: student.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_student_domain() {
        assert!(has_student_email_domain("a@student.unimelb.edu.au"));
    }

    #[test]
    fn rejects_other_domains() {
        assert!(!has_student_email_domain("a@gmail.com"));
        assert!(!has_student_email_domain("a@unimelb.edu.au"));
        assert!(!has_student_email_domain(""));
    }

    #[test]
    fn domain_check_is_substring_only() {
        // No format validation beyond the substring
        assert!(has_student_email_domain("@student.unimelb.edu.au"));
        assert!(has_student_email_domain("x@y@student.unimelb.edu.au"));
        assert!(!has_student_email_domain("A@STUDENT.UNIMELB.EDU.AU"));
    }

    #[test]
    fn response_carries_every_stored_field() {
        let student = Student {
            id: 3,
            email: "a@student.unimelb.edu.au".to_string(),
            student_number: "123".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            image: None,
            created_at: Utc::now(),
        };
        let response = StudentResponse::from(student.clone());

        assert_eq!(response.id, student.id);
        assert_eq!(response.email, student.email);
        assert_eq!(response.student_number, student.student_number);
        assert_eq!(response.first_name, student.first_name);
        assert_eq!(response.last_name, student.last_name);
        assert_eq!(response.image, student.image);
    }

    #[test]
    fn create_payload_reads_camel_case() {
        let payload: CreateStudent =
            serde_json::from_str(r#"{"email":"a@student.unimelb.edu.au","studentNumber":"123"}"#)
                .unwrap();

        assert_eq!(payload.student_number, "123");
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn create_payload_requires_student_number() {
        let payload = CreateStudent {
            email: "a@student.unimelb.edu.au".to_string(),
            ..Default::default()
        };
        assert!(payload.validate().is_err());
    }
}
