use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use spycat_core::error::CoreError;

/// Partial unique index backing the one-incomplete-mission-per-cat rule.
const ACTIVE_CAT_CONSTRAINT: &str = "uq_missions_active_cat";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `spycat_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request body that could not be read as the expected payload.
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        field: Option<String>,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Status, machine-readable code, message, and offending field.
type ErrorParts = (StatusCode, &'static str, String, Option<String>);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, field) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest { message, field } => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                message.clone(),
                field.clone(),
            ),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(field) = field {
            body["field"] = json!(field);
        }

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> ErrorParts {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
        None,
    )
}

/// Map a domain error to its HTTP representation.
///
/// Every business-rule rejection is a 400; only a missing addressed
/// resource is a 404.
fn classify_core_error(err: &CoreError) -> ErrorParts {
    let field = err.field().map(str::to_string);
    let code = match err {
        CoreError::NotFound { entity, id } => {
            return (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
                None,
            );
        }
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            return internal();
        }
        CoreError::OutOfRange { .. } => "OUT_OF_RANGE",
        CoreError::InvalidBreed(_) => "INVALID_BREED",
        CoreError::ValidationUnavailable(_) => "VALIDATION_UNAVAILABLE",
        CoreError::InvalidTargetCount(_) => "INVALID_TARGET_COUNT",
        CoreError::CatUnavailable(_) => "CAT_UNAVAILABLE",
        CoreError::AlreadyAssigned { .. } => "ALREADY_ASSIGNED",
        CoreError::MissionInProgress(_) => "MISSION_IN_PROGRESS",
        CoreError::TargetFinalized(_) => "TARGET_FINALIZED",
        CoreError::Validation { .. } => "VALIDATION_ERROR",
    };
    (StatusCode::BAD_REQUEST, code, err.to_string(), field)
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - A violation of `uq_missions_active_cat` maps to 400 `CAT_UNAVAILABLE`.
/// - Other unique violations (constraint name starting with `uq_`) map to 409.
/// - Check violations (constraint name starting with `ck_`) map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> ErrorParts {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
            None,
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                // PostgreSQL unique constraint violation
                Some("23505") if constraint == ACTIVE_CAT_CONSTRAINT => {
                    return (
                        StatusCode::BAD_REQUEST,
                        "CAT_UNAVAILABLE",
                        "Cat is already on an incomplete mission".to_string(),
                        Some("cat".to_string()),
                    );
                }
                Some("23505") if constraint.starts_with("uq_") => {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                        None,
                    );
                }
                // PostgreSQL check constraint violation
                Some("23514") if constraint.starts_with("ck_") => {
                    return (
                        StatusCode::BAD_REQUEST,
                        "OUT_OF_RANGE",
                        format!("Value violates check constraint: {constraint}"),
                        None,
                    );
                }
                _ => {}
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
