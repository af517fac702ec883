use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("Subject not found: {0}")]
    SubjectNotFound(String),

    #[error("Stage not found: {subject}/{stage}")]
    StageNotFound { subject: String, stage: String },

    #[error("Invalid term: {0} (expected 1-4)")]
    InvalidTerm(i64),

    #[error("Invalid pick: {0}")]
    InvalidPick(String),
}

/// Errors returned from HTTP handlers. The message is sent to the client
/// verbatim as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_)   => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_)   => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<ScopeError> for ApiError {
    fn from(err: ScopeError) -> Self {
        match err {
            ScopeError::SubjectNotFound(_) => ApiError::NotFound("Subject not found".to_string()),
            ScopeError::StageNotFound { .. } => ApiError::NotFound("Stage not found".to_string()),
            ScopeError::InvalidTerm(_) | ScopeError::InvalidPick(_) => ApiError::BadRequest(err.to_string()),
        }
    }
}
