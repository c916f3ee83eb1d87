use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use std::borrow::Cow;

use validator::{Validate, ValidateUrl, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub bio: String,
    pub location: String,
    pub github_url: Option<String>,
    pub skills: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct ProfileRequest {
    #[serde(default)]
    #[validate(length(max = 2000, message = "Ensure this field has no more than 2000 characters."))]
    pub bio: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub location: String,

    #[serde(default)]
    #[validate(custom(function = "validate_github_url"))]
    pub github_url: Option<String>,

    #[serde(default)]
    pub skills: Vec<Uuid>,
}

/// Blank is accepted and stored as no URL.
fn validate_github_url(url: &str) -> Result<(), ValidationError> {
    if url.trim().is_empty() || url.validate_url() {
        return Ok(());
    }
    let mut error = ValidationError::new("url");
    error.message = Some(Cow::Borrowed("Enter a valid URL."));
    Err(error)
}

/// Row shape written by the repository; skills are stored in a join table.
#[derive(Debug)]
pub struct ProfileWrite {
    pub bio: String,
    pub location: String,
    pub github_url: Option<String>,
    pub skills: Vec<Uuid>,
}

impl From<ProfileRequest> for ProfileWrite {
    fn from(request: ProfileRequest) -> Self {
        let mut skills = request.skills;
        skills.sort();
        skills.dedup();

        ProfileWrite {
            bio: request.bio,
            location: request.location.trim().to_string(),
            github_url: request.github_url.filter(|url| !url.trim().is_empty()),
            skills,
        }
    }
}
