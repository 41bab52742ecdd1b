use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;

/// Query selecting whose history to list.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct TeamQuery {
    /// Team whose submissions to list.
    pub team_id: Uuid,
}

/// Validate a trimmed name or title (1-256 Unicode characters).
pub fn validate_name(value: &str, field: &str) -> Result<(), AppError> {
    let value = value.trim();
    if value.is_empty() || value.chars().count() > 256 {
        return Err(AppError::Validation(format!(
            "{field} must be 1-256 characters"
        )));
    }
    Ok(())
}
