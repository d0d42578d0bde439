//! HTTP error mapping
//!
//! Every failure leaves the API as a bare `text/plain` body carrying the
//! raw error text. Client mistakes are `400`; anything the store reports,
//! not-found included, is `500`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(msg) | Self::Internal(msg) => msg,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(_) => Self::BadRequest(e.to_string()),
            DomainError::NotFound { .. } | DomainError::Storage(_) => Self::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::BadRequest(msg) => warn!(status = status.as_u16(), "Rejected request: {}", msg),
            Self::Internal(msg) => error!(status = status.as_u16(), "Request failed: {}", msg),
        }
        let body = match self {
            Self::BadRequest(msg) | Self::Internal(msg) => msg,
        };
        (status, body).into_response()
    }
}
