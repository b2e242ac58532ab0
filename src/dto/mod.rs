pub mod attempt_dto;
pub mod generation_dto;

use validator::ValidationError;

/// Rejects values that are empty once surrounding whitespace is removed.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
