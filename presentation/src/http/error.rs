//! HTTP error responses

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quizhive_application::{QuestionBankError, QuizError};
use quizhive_domain::DomainError;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Error body returned by both services.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A failed request, ready to be turned into a response.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Unavailable(String),
    /// Logged in full; the client only sees a generic message.
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Internal(detail) => {
                error!("Request failed: {}", detail);
                "Internal server error".to_string()
            }
            ApiError::BadRequest(m) | ApiError::NotFound(m) | ApiError::Unavailable(m) => m,
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Malformed bodies are reported in the same `{"error": ...}` shape as
/// validation failures.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::ValidationFailed(_) => ApiError::BadRequest(e.to_string()),
            _ if e.is_not_found() => ApiError::NotFound(e.to_string()),
            _ => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<QuestionBankError> for ApiError {
    fn from(e: QuestionBankError) -> Self {
        match e {
            QuestionBankError::Domain(inner) => inner.into(),
            QuestionBankError::EmptyBank => ApiError::NotFound(e.to_string()),
            QuestionBankError::Persistence(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<QuizError> for ApiError {
    fn from(e: QuizError) -> Self {
        match e {
            QuizError::Domain(inner) => inner.into(),
            QuizError::QuestionServiceDegraded => ApiError::Unavailable(e.to_string()),
            QuizError::Persistence(_) => ApiError::Internal(e.to_string()),
            QuizError::Cancelled => ApiError::Unavailable("Service is shutting down".to_string()),
        }
    }
}
