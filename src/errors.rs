use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Input that fails a local check. Nothing is persisted or sent when one of
/// these is raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter both API Key and Sender ID")]
    MissingCredentials,

    #[error("Please enter a valid Ghana phone number")]
    InvalidPhone,

    #[error("Please fill in the {0} field")]
    MissingField(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("invalid request: {}", .0.body_text())]
    Request(#[from] JsonRejection),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Request(rejection) => rejection.status(),
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = serde_json::json!({ "type": "error", "message": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
