use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub members: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TeamRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Ensure this field has between 1 and 100 characters."))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub members: Vec<Uuid>,
}

#[derive(Debug)]
pub struct TeamWrite {
    pub name: String,
    pub description: String,
    pub members: Vec<Uuid>,
}

impl From<TeamRequest> for TeamWrite {
    fn from(request: TeamRequest) -> Self {
        let mut members = request.members;
        members.sort();
        members.dedup();

        TeamWrite {
            name: request.name.trim().to_string(),
            description: request.description,
            members,
        }
    }
}
