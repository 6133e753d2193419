use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::{ErrorKind, NavError};

/// Error rendered as a plain-text HTTP response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

/// HTTP status for each kind of navigator failure.
///
/// A failed stat is the client's bad target, so it maps to 400 alongside
/// not-found and not-a-directory.
pub fn status_for(err: &NavError) -> StatusCode {
    if matches!(err, NavError::StatError { .. }) {
        return StatusCode::BAD_REQUEST;
    }

    match err.kind() {
        ErrorKind::Validation | ErrorKind::NotFound | ErrorKind::TypeMismatch => {
            StatusCode::BAD_REQUEST
        }
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::SessionNotFound => StatusCode::UNAUTHORIZED,
        ErrorKind::Filesystem => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<NavError> for ApiError {
    fn from(err: NavError) -> Self {
        ApiError {
            status: status_for(&err),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}
