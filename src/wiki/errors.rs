//! # Wiki Errors
//!
//! Every failure a request can end in, and the HTTP status each maps to.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::config::ConfigError;
use crate::render::RenderError;
use crate::store::StoreError;

/// Result type for wiki operations
pub type WikiResult<T> = Result<T, WikiError>;

/// Wiki errors
#[derive(Debug, Error)]
pub enum WikiError {
    /// The request path is not `/<op>/<title>` with a valid title
    #[error("invalid page title: {0}")]
    InvalidTitle(String),

    #[error("invalid operation prefix: {0:?}")]
    InvalidOperation(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl WikiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            WikiError::InvalidTitle(_) => 404,
            WikiError::InvalidOperation(_) => 500,
            WikiError::Config(_) => 500,
            WikiError::Store(_) => 500,
            WikiError::Render(_) => 500,
        }
    }
}

impl IntoResponse for WikiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = match self {
            WikiError::InvalidTitle(_) => "404 page not found".to_string(),
            other => other.to_string(),
        };
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_status_codes() {
        assert_eq!(WikiError::InvalidTitle("/x".into()).status_code(), 404);
        let store = StoreError::io("Page", io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(WikiError::from(store).status_code(), 500);
        assert_eq!(
            WikiError::from(RenderError::UnknownTemplate("nope".into())).status_code(),
            500
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = WikiError::InvalidTitle("/view/..".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let store = StoreError::io("Page", io::Error::new(io::ErrorKind::Other, "disk full"));
        let response = WikiError::from(store).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
