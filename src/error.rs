use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

/// Longest storage error message echoed back to clients
const MAX_DETAIL_CHARS: usize = 200;

/// Application error type that can be returned from handlers
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Database errors
    #[error("Database error: {0}")]
    Storage(String),

    #[error("Database not available. Check DATABASE_URL and DATABASE_NAME environment variables")]
    StoreUnavailable,
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<serde_json::Value>,
}

/// One offending field of a rejected payload
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Flatten validator output into a stable, field-sorted list
    pub fn field_errors(errors: &validator::ValidationErrors) -> Vec<FieldError> {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| FieldError {
                    field: field.clone(),
                    code: e.code.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field)),
                })
            })
            .collect();

        fields.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
        fields
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, detail) = match &self {
            // 422 Unprocessable Entity
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation error",
                Some(json!(Self::field_errors(errors))),
            ),
            AppError::InvalidInput(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation error",
                Some(json!(msg)),
            ),

            // 500 Internal Server Error
            AppError::Storage(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error",
                    Some(json!(truncate(msg, MAX_DETAIL_CHARS))),
                )
            }
            AppError::StoreUnavailable => {
                tracing::error!("Request needed a database but none is connected");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error",
                    Some(json!(self.to_string())),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message.to_string(),
            detail,
        });

        (status, body).into_response()
    }
}

// Convenient conversions from common error types

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<bson::ser::Error> for AppError {
    fn from(err: bson::ser::Error) -> Self {
        AppError::Storage(format!("Failed to encode document: {}", err))
    }
}

/// Cut a message to at most `max` characters
pub fn truncate(msg: &str, max: usize) -> String {
    msg.chars().take(max).collect()
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 2))]
        name: String,
        #[validate(email)]
        email: String,
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("héllo wörld", 5), "héllo");
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn test_field_errors_sorted_by_field() {
        let probe = Probe {
            name: "x".to_string(),
            email: "nope".to_string(),
        };
        let errors = probe.validate().unwrap_err();

        let fields = AppError::field_errors(&errors);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field, "email");
        assert_eq!(fields[0].code, "email");
        assert_eq!(fields[1].field, "name");
        assert_eq!(fields[1].code, "length");
    }

    #[test]
    fn test_status_codes() {
        let resp = AppError::InvalidInput("bad".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let resp = AppError::Storage("boom".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = AppError::StoreUnavailable.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
