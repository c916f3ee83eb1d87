use uuid::Uuid;

use crate::errors::AppError;

pub const ACCESS_DENIED: &str = "You are not authorized to access the content";
pub const DELETE_DENIED: &str = "You are not authorized to delete this content";

/// True when the requesting user is the resource's owner.
pub fn check_auth_user_credentials(requester_id: &Uuid, owner_id: &Uuid) -> bool {
    requester_id == owner_id
}

pub fn require_owner(requester_id: &Uuid, owner_id: &Uuid, denial: &str) -> Result<(), AppError> {
    if check_auth_user_credentials(requester_id, owner_id) {
        Ok(())
    } else {
        tracing::warn!(%requester_id, %owner_id, "Ownership check failed");
        Err(AppError::Forbidden(denial.to_string()))
    }
}
