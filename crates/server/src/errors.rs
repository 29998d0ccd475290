use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use service::auth::errors::AuthError;
use service::errors::ServiceError;

/// HTTP-facing error shape. Every failure renders the standardized
/// envelope `{"success": false, "message": ...}`; storage detail never
/// reaches the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("You have no permission to do that")]
    Forbidden,
    #[error("Invalid Password")]
    InvalidPassword,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized | ApiError::Forbidden | ApiError::InvalidPassword => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            // Driver detail stays in the logs.
            ApiError::Storage(detail) => {
                error!(error = %detail, "storage failure");
                "something went wrong".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(serde_json::json!({ "success": false, "message": message }))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Validation(msg) => ApiError::Validation(msg),
            AuthError::Conflict(msg) => ApiError::Conflict(msg),
            AuthError::NotFound(msg) => ApiError::NotFound(msg),
            AuthError::InvalidPassword => ApiError::InvalidPassword,
            AuthError::Unauthorized => ApiError::Unauthorized,
            AuthError::Forbidden => ApiError::Forbidden,
            AuthError::Hash(msg) | AuthError::Token(msg) | AuthError::Repository(msg) => ApiError::Storage(msg),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => ApiError::Validation(msg),
            ServiceError::Forbidden => ApiError::Forbidden,
            ServiceError::NotFound(entity) => ApiError::NotFound(format!("{entity} not found")),
            ServiceError::Storage(msg) => ApiError::Storage(msg),
        }
    }
}
