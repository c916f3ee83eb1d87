use uuid::Uuid;

use crate::errors::AppError;

/// Parses a path id; anything that is not a UUID cannot name a row, so it is a 404.
pub fn valid_uuid(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::NotFound("Not found.".to_string()))
}
