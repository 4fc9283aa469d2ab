//! Validation rules shared by the input records, and the conversion from
//! `validator` reports into [`ValidationError`].

use std::borrow::Cow;

use validator::{Validate, ValidateEmail, ValidationErrors};

use crate::error::{FieldError, ValidationError};

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Requires a non-blank, well-formed address. Each failure carries its own
/// message, so a blank address is reported once as missing.
pub fn email_address(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("required").with_message(Cow::Borrowed("Email is required")));
    }
    if !value.validate_email() {
        return Err(validator::ValidationError::new("email").with_message(Cow::Borrowed("Email should be valid")));
    }
    Ok(())
}

/// Run the derived rules for `input` and convert any failure.
pub fn ensure_valid<T: Validate>(input: &T) -> Result<(), ValidationError> {
    input.validate().map_err(ValidationError::from)
}

impl From<ValidationErrors> for ValidationError {
    fn from(report: ValidationErrors) -> Self {
        let mut errors: Vec<FieldError> = report
            .field_errors()
            .into_iter()
            .flat_map(|(field, failures)| {
                let field = field.to_string();
                failures.iter().map(move |failure| FieldError {
                    field: field.clone(),
                    message: failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| failure.code.to_string()),
                })
            })
            .collect();

        // HashMap iteration order is unspecified
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        ValidationError { errors }
    }
}
