//! Error types for the quicknote server.
//!
//! Every failure is scoped to the request that produced it. Handlers return
//! `Result<_, Error>` and the `IntoResponse` impl turns the error into a
//! generic failure page after logging it.

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::templates::error_page;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // === Store Errors ===
    /// The document store could not be opened, read, or written.
    #[error("note store unavailable: {0}")]
    StoreUnavailable(#[from] sled::Error),

    /// A stored document could not be decoded.
    #[error("corrupt note document: {0}")]
    CorruptDocument(#[from] serde_json::Error),

    // === Upload Errors ===
    /// The upload directory could not be created.
    #[error("upload directory {path} unavailable: {source}")]
    UploadDirUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Copying an upload to disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Request Errors ===
    /// The submitted form could not be decoded.
    #[error("invalid form: {0}")]
    InvalidForm(String),

    /// The request body exceeded the configured limit.
    #[error("request body too large")]
    PayloadTooLarge,

    // === Configuration Errors ===
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    #[error("invalid configuration: {message}")]
    ConfigValidation { message: String },
}

impl From<figment::Error> for Error {
    fn from(e: figment::Error) -> Self {
        Error::ConfigLoad(Box::new(e))
    }
}

impl From<axum::extract::multipart::MultipartError> for Error {
    fn from(e: axum::extract::multipart::MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Error::PayloadTooLarge
        } else {
            Error::InvalidForm(e.body_text())
        }
    }
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::InvalidForm(_) => StatusCode::BAD_REQUEST,
            Error::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "rejected request");
        }

        let message = match status {
            StatusCode::BAD_REQUEST => "The submitted form could not be read.",
            StatusCode::PAYLOAD_TOO_LARGE => "The attachment is too large.",
            _ => "Something went wrong while handling your request.",
        };

        (status, Html(error_page(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_form_is_client_error() {
        let err = Error::InvalidForm("missing textContent".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upload_dir_error_is_server_error() {
        let err = Error::UploadDirUnavailable {
            path: PathBuf::from("/nope"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("/nope"));
    }

    #[tokio::test]
    async fn test_error_response_hides_details() {
        let err = Error::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk full at /secret/path",
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Something went wrong"));
        assert!(!html.contains("disk full"));
        assert!(!html.contains("/secret/path"));
    }
}
