//! Input validation for smenv configuration.
//!
//! Validates environment variable names and secret reference fields.

use crate::error::{Result, ValidationError};

/// Validate an environment variable name.
///
/// Anything the process environment can carry is accepted, including dotted
/// names such as `spring.datasource.password`. A name:
/// - Cannot be empty
/// - Cannot contain `=`, which separates name from value
/// - Cannot contain NUL
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    for (i, ch) in name.chars().enumerate() {
        if ch == '=' || ch == '\0' {
            return Err(ValidationError::InvalidName {
                name: name.to_string(),
                reason: format!(
                    "invalid character {:?} at position {}. '=' and NUL are not allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate a required reference field (secret ID or JSON key).
///
/// # Arguments
///
/// * `name` - The environment variable the field belongs to (for error messages)
/// * `field` - Field label, e.g. `"secret_id"`
/// * `value` - The value to validate
///
/// # Errors
///
/// Returns `ValidationError::EmptyField` if the value is empty or whitespace.
pub fn validate_field(name: &str, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            name: name.to_string(),
            field,
        }
        .into());
    }

    Ok(())
}
