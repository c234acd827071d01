use crate::error::AppError;

/// Reject empty or whitespace-only input before any cache or backend work.
pub fn require_non_empty(value: &str, field_name: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!(
            "{field_name} must not be empty"
        )));
    }
    Ok(())
}
