use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "author")]
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ProjectRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Ensure this field has between 1 and 200 characters."))]
    pub title: String,

    #[serde(default)]
    pub description: String,
}

#[derive(Debug)]
pub struct ProjectWrite {
    pub title: String,
    pub description: String,
}

impl From<ProjectRequest> for ProjectWrite {
    fn from(request: ProjectRequest) -> Self {
        ProjectWrite {
            title: request.title.trim().to_string(),
            description: request.description,
        }
    }
}
