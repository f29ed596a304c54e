//! Field rules shared by the domain entities.

use crate::error::DomainError;

/// Maximum length of titles and location names.
pub const TITLE_MAX_LEN: usize = 256;

/// Maximum length of a category slug.
pub const SLUG_MAX_LEN: usize = 128;

/// Maximum length of an author's username.
pub const USERNAME_MAX_LEN: usize = 150;

/// Maximum length of an email address.
pub const EMAIL_MAX_LEN: usize = 254;

/// How many characters of a long text field a debug string keeps.
pub const DEBUG_PREVIEW_LEN: usize = 25;

/// Implemented by every entity that must be checked before it is persisted.
pub trait Validate {
    fn validate(&self) -> Result<(), DomainError>;
}

/// Reject blank values.
pub fn require_non_blank(value: &str, field: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Reject values longer than `max` characters.
///
/// Lengths are counted in characters, not bytes, so Cyrillic titles get the
/// same budget as Latin ones.
pub fn require_max_len(value: &str, max: usize, field: &str) -> Result<(), DomainError> {
    let len = value.chars().count();
    if len > max {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max} characters, got {len}"
        )));
    }
    Ok(())
}

/// Shorthand for a required, length-limited text field.
pub fn require_text(value: &str, max: usize, field: &str) -> Result<(), DomainError> {
    require_non_blank(value, field)?;
    require_max_len(value, max, field)
}

/// First [`DEBUG_PREVIEW_LEN`] characters of `value`.
pub fn preview(value: &str) -> &str {
    match value.char_indices().nth(DEBUG_PREVIEW_LEN) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}
