//! Field checks shared by the entity modules. Lengths are counted in
//! characters and match the column widths in the migrations.

use crate::errors::ModelError;

pub const NAME_MAX: usize = 50;
pub const EMAIL_MAX: usize = 50;
pub const PASSWORD_MAX: usize = 50;
pub const TITLE_MAX: usize = 50;
pub const AUTHOR_MAX: usize = 100;

/// `value` must fit in `max` characters.
pub fn bounded(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.chars().count() > max {
        return Err(ModelError::Validation(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}

/// `value` must be non-blank and fit in `max` characters.
pub fn required(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    bounded(field, value, max)
}
