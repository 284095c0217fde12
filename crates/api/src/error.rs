use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use catalog_core::error::CoreError;
use catalog_core::notification::Notification;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and implements [`IntoResponse`] to produce
/// consistent JSON error responses: 404 for missing entities, 422 for
/// validation outcomes (entity notifications and malformed identifiers),
/// 500 with a sanitized message for storage faults.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `catalog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Core(core) = self;
        match core {
            CoreError::NotFound { entity, id } => error_response(
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            CoreError::EntityValidation(notification) => {
                let body = json!({
                    "error": "Unprocessable Entity",
                    "code": "VALIDATION_ERROR",
                    "message": flatten_messages(&notification),
                });
                (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response()
            }
            CoreError::InvalidId => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                "Validation failed (uuid is expected)".to_string(),
            ),
            CoreError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal core error");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        }
    }
}

fn error_response(status: StatusCode, code: &'static str, message: String) -> Response {
    let body = json!({
        "error": message,
        "code": code,
    });
    (status, axum::Json(body)).into_response()
}

/// Flatten a notification into a de-duplicated list of human-readable
/// messages, preserving the order errors were recorded in.
fn flatten_messages(notification: &Notification) -> Vec<String> {
    let mut seen = Vec::new();
    for value in notification.to_json() {
        match value {
            serde_json::Value::String(message) => {
                if !seen.contains(&message) {
                    seen.push(message);
                }
            }
            serde_json::Value::Object(groups) => {
                for (_, messages) in groups {
                    if let serde_json::Value::Array(messages) = messages {
                        for message in messages {
                            if let serde_json::Value::String(message) = message {
                                if !seen.contains(&message) {
                                    seen.push(message);
                                }
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }
    seen
}
