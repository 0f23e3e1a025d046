//! Unified error handling
//!
//! Application-level error type and its HTTP rendering:
//! - [`AppError`] — one variant per failure class, each mapped to a status code
//! - [`AppResult`] — handler result alias
//!
//! Response bodies come in two shapes. Schema validation failures render as a
//! mapping from field name to a list of human-readable messages; every other
//! error renders as `{"error": <message>}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::error;
use validator::ValidationErrors;

use crate::db::repository::RepoError;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Request errors (4xx) ==========
    #[error("Validation failed")]
    /// Schema constraint violations, field by field (400)
    Validation(Map<String, Value>),

    #[error("Invalid request: {0}")]
    /// Undecodable payload: malformed JSON, missing/unknown field, wrong type (400)
    Invalid(String),

    #[error("Resource not found: {0}")]
    /// Referenced id does not exist (404)
    NotFound(String),

    #[error("Conflict: {0}")]
    /// Request violates a relationship, e.g. deleting a member with sessions (409)
    Conflict(String),

    // ========== System errors (5xx) ==========
    #[error("Database error: {0}")]
    /// Store rejected the operation (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// Anything else that should never happen (500)
    Internal(String),
}

/// Application-level Result type, used in HTTP handlers
pub type AppResult<T> = Result<T, AppError>;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Validation (400): field -> [messages]
            AppError::Validation(fields) => {
                (StatusCode::BAD_REQUEST, Json(Value::Object(fields))).into_response()
            }

            // Invalid request (400)
            AppError::Invalid(msg) => error_response(StatusCode::BAD_REQUEST, msg),

            // Not found (404)
            AppError::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),

            // Conflict (409)
            AppError::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),

            // Database errors (500): log first, then surface the reason
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }

            // Internal errors (500)
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

/// Flatten [`ValidationErrors`] into `{field: [messages]}`, taking the
/// per-constraint message where one is defined and the constraint code
/// otherwise
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Map::new();
        for (field, field_errors) in errors.field_errors() {
            let messages: Vec<Value> = field_errors
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => Value::String(msg.to_string()),
                    None => Value::String(e.code.to_string()),
                })
                .collect();
            fields.insert(field.to_string(), Value::Array(messages));
        }
        AppError::Validation(fields)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Conflict(msg) => AppError::Conflict(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

// ========== Helper Constructors ==========

impl AppError {
    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(format!("{} not found", resource.into()))
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create an invalid request error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }

    /// Create a validation error for a single field, rendered the same way
    /// as a derive-checked constraint
    pub fn field_error(field: &str, message: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(
            field.to_string(),
            Value::Array(vec![Value::String(message.into())]),
        );
        Self::Validation(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_renders_404_with_error_body() {
        let (status, body) = render(AppError::not_found("Member 7")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Member 7 not found");
    }

    #[tokio::test]
    async fn field_error_renders_field_message_map() {
        let (status, body) =
            render(AppError::field_error("member_id", "member 42 does not exist")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["member_id"][0], "member 42 does not exist");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn derive_constraint_failures_render_per_field() {
        use validator::Validate;

        #[derive(Validate)]
        struct Probe {
            #[validate(length(min = 1, message = "must not be empty"))]
            name: String,
        }

        let probe = Probe {
            name: String::new(),
        };
        let err = AppError::from(probe.validate().unwrap_err());
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["name"][0], "must not be empty");
    }

    #[tokio::test]
    async fn database_error_surfaces_the_reason_with_500() {
        let (status, body) = render(AppError::database("UNIQUE constraint failed")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "UNIQUE constraint failed");
    }

    #[tokio::test]
    async fn conflict_renders_409() {
        let (status, body) = render(AppError::conflict("member still has sessions")).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "member still has sessions");
    }

    #[test]
    fn repo_errors_map_onto_matching_variants() {
        assert!(matches!(
            AppError::from(RepoError::NotFound("Member 7 not found".into())),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::from(RepoError::Conflict("in use".into())),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            AppError::from(RepoError::Database("boom".into())),
            AppError::Database(_)
        ));
    }
}
