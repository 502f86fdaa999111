// src/error.rs

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::store::StoreError;

/// Outcomes of quiz store and scoring operations that are not a success.
///
/// Absent quizzes and results on read paths are `Option::None`, not errors.
#[derive(Debug)]
pub enum ServiceError {
    /// Malformed creation input. The message names the failing field.
    Validation(String),

    QuizNotFound,

    QuestionNotFound,

    /// Storage failure. Opaque to clients.
    Storage(StoreError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Validation(msg) => write!(f, "validation failed: {}", msg),
            ServiceError::QuizNotFound => write!(f, "quiz not found"),
            ServiceError::QuestionNotFound => write!(f, "question not found"),
            ServiceError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::Storage(err)
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error
    InternalServerError(String),

    // 400 Bad Request
    BadRequest(String),

    // 404 Not Found
    NotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Maps domain outcomes onto HTTP errors.
/// Allows using `?` on store and engine calls inside handlers.
impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => AppError::BadRequest(msg),
            ServiceError::QuizNotFound => AppError::NotFound("Quiz not found.".to_string()),
            ServiceError::QuestionNotFound => {
                AppError::NotFound("Question not found.".to_string())
            }
            ServiceError::Storage(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

/// Converts a rejected JSON body (bad syntax, missing field, wrong type)
/// into `AppError::BadRequest`.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
