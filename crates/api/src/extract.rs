//! JSON body extractor whose rejections use the API error envelope.
//!
//! A body that cannot be deserialized is a 400 naming the offending field,
//! the same shape as every other rejected write. Integers outside the
//! target type's range are reported as `OUT_OF_RANGE`.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use spycat_core::error::CoreError;

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] in handler arguments.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Lead-ins axum puts before the serde message of a body rejection.
const REJECTION_PREFIXES: [&str; 2] = [
    "Failed to deserialize the JSON body into the target type: ",
    "Failed to parse the request body as JSON: ",
];

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let text = rejection.body_text();
        let detail = REJECTION_PREFIXES
            .iter()
            .find_map(|prefix| text.strip_prefix(prefix))
            .unwrap_or(text.as_str());
        let (field, message) = locate(detail);

        match field {
            Some(field) if message.starts_with("invalid value: integer") => {
                AppError::Core(CoreError::OutOfRange {
                    field,
                    reason: "is out of range".to_string(),
                })
            }
            field => AppError::BadRequest { message, field },
        }
    }
}

/// Split a serde error into the field path it names and the bare message.
///
/// Handles `path: message`, `missing field `name``, and both combined
/// (`targets[0]: missing field `name``). Position suffixes are removed.
fn locate(detail: &str) -> (Option<String>, String) {
    let detail = strip_position(detail);

    let (path, message) = match detail.split_once(": ") {
        Some((path, message)) if is_path(path) => (Some(path), message),
        _ => (None, detail),
    };

    let missing = message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split_once('`'))
        .map(|(name, _)| name);

    let field = match (path, missing) {
        (Some(path), Some(name)) => Some(format!("{path}.{name}")),
        (None, Some(name)) => Some(name.to_string()),
        (Some(path), None) => Some(path.to_string()),
        (None, None) => None,
    };
    (field, message.to_string())
}

fn is_path(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate != "."
        && candidate
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'))
}

fn strip_position(message: &str) -> &str {
    match message.rfind(" at line ") {
        Some(idx) if message[idx..].contains(" column ") => &message[..idx],
        _ => message,
    }
}
