//! Field validation helpers shared by cat and target payloads.
//!
//! Range and length checks are declared on the DTOs with `validator`
//! derives; [`out_of_range`] turns the first failure into the domain
//! [`CoreError::OutOfRange`]. Blank-text checks live here because a
//! whitespace-only name passes a length check.

use validator::{ValidationError, ValidationErrors};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Reject a text field that is present but contains only whitespace.
pub fn validate_not_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::OutOfRange {
            field: field.to_string(),
            reason: "must not be blank".to_string(),
        });
    }
    Ok(())
}

/// Convert `validator` output into an [`CoreError::OutOfRange`].
///
/// Fields are visited in name order so the reported field is stable when
/// several are out of bounds.
pub fn out_of_range(errors: &ValidationErrors) -> CoreError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    match fields.first() {
        Some((field, errs)) => CoreError::OutOfRange {
            field: field.to_string(),
            reason: errs
                .first()
                .map(describe)
                .unwrap_or_else(|| "is out of range".to_string()),
        },
        None => CoreError::Internal("empty validation error set".to_string()),
    }
}

fn describe(err: &ValidationError) -> String {
    let param = |name: &str| err.params.get(name).map(|v| v.to_string());
    let bounds = match (param("min"), param("max")) {
        (Some(min), Some(max)) => format!("between {min} and {max}"),
        (Some(min), None) => format!("at least {min}"),
        (None, Some(max)) => format!("at most {max}"),
        (None, None) => "within bounds".to_string(),
    };

    match &*err.code {
        "length" => format!("length must be {bounds}"),
        _ => format!("must be {bounds}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
