//! Request field validation shared by the services.
//!
//! Column length limits are declared in the schema, but SQLite does not enforce `VARCHAR`
//! lengths, so services check them before writing.

use crate::server::error::data::DataError;

/// Maximum length of planet and character descriptions
pub const DESCRIPTION_MAX_CHARS: usize = 500;
/// Maximum length of a username
pub const USERNAME_MAX_CHARS: usize = 50;
/// Maximum length of an email address
pub const EMAIL_MAX_CHARS: usize = 120;

/// Fails when `value` is empty or only whitespace.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), DataError> {
    if value.trim().is_empty() {
        return Err(DataError::InvalidField {
            field,
            reason: "must not be empty".to_string(),
        });
    }

    Ok(())
}

/// Fails when `value` is longer than `max` characters.
pub fn require_max_chars(field: &'static str, value: &str, max: usize) -> Result<(), DataError> {
    if value.chars().count() > max {
        return Err(DataError::InvalidField {
            field,
            reason: format!("must be at most {} characters", max),
        });
    }

    Ok(())
}

/// Fails unless `value` has a non-empty local part and domain around a single `@`.
pub fn require_email(field: &'static str, value: &str) -> Result<(), DataError> {
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(DataError::InvalidField {
            field,
            reason: "must be an email address".to_string(),
        }),
    }
}
