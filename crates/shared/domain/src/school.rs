//! School domain entity and related payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// School domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    pub id: i64,
    pub email: String,
    pub school_name: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub web_address: Option<String>,
    pub sector: Option<String>,
    pub year_levels: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// School signup payload
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSchool {
    /// Login email, unique across schools
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    pub school_name: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub web_address: Option<String>,
    pub sector: Option<String>,
    pub year_levels: Option<String>,
    pub image: Option<String>,
}

/// School profile update payload.
///
/// Every field replaces the stored value, so an absent field clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSchool {
    pub school_name: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub web_address: Option<String>,
    pub sector: Option<String>,
    pub year_levels: Option<String>,
    pub image: Option<String>,
}

/// School read payload (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolResponse {
    pub id: i64,
    pub email: String,
    pub school_name: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub web_address: Option<String>,
    pub sector: Option<String>,
    pub year_levels: Option<String>,
    pub image: Option<String>,
}

impl From<School> for SchoolResponse {
    fn from(school: School) -> Self {
        Self {
            id: school.id,
            email: school.email,
            school_name: school.school_name,
            contact_name: school.contact_name,
            contact_email: school.contact_email,
            web_address: school.web_address,
            sector: school.sector,
            year_levels: school.year_levels,
            image: school.image,
        }
    }
}
