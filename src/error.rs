use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Message sent for every 500; the detail only goes to the log.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong!";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("Internal server error")]
    InternalServerError,
}

impl AppError {
    pub fn course_not_found() -> Self {
        AppError::NotFound("Course not found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Database(_) | AppError::InternalServerError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: status.to_string(),
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            AppError::NotFound(msg) => msg,
            AppError::Unauthorized => "Unauthorized".to_string(),
            AppError::BadRequest(msg) => msg,
            AppError::PayloadTooLarge => "Request body is too large".to_string(),
            AppError::Database(e) => {
                error!("database error: {}", e);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            AppError::InternalServerError => GENERIC_FAILURE_MESSAGE.to_string(),
        };

        (status, Json(ErrorResponse::new(status, error_message))).into_response()
    }
}
