use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use uniportal_core::domain::common::entities::app_errors::CoreError;
use utoipa::ToSchema;
use validator::ValidationErrors;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InternalServerError(String),
}

/// Error envelope shared by every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub status: String,
    pub message: String,
}

impl ApiErrorResponse {
    fn new(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::InternalServerError(detail) => {
                error!("internal server error: {detail}");
                // Detail stays in the logs; release builds answer with a generic message.
                let message = if cfg!(debug_assertions) {
                    detail
                } else {
                    "Internal server error".to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ApiErrorResponse::new(message))).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Not found".to_string()),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_values()
            .flat_map(|field_errors| field_errors.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request parameters".to_string());

        ApiError::BadRequest(message)
    }
}
