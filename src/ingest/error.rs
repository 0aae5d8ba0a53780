use crate::store::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("No files uploaded")]
    NoFilesProvided,

    #[error("Too many files: {0} (max {1} per request)")]
    TooManyFiles(usize, usize),

    #[error("Invalid file type: {0}")]
    InvalidFileType(String),

    #[error("Image is too large: {size} bytes (max {limit} before processing)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Could not optimize image: {0}")]
    OptimizationFailed(String),

    #[error("Album not found or user does not have permission")]
    AlbumWriteRejected,

    #[error("Malformed upload request: {0}")]
    BadRequest(String),

    #[error("store error")]
    Store(#[from] StoreError),

    #[error("internal error")]
    Internal(#[from] eyre::Report),
}

fn log_error(error: &IngestError) {
    match error {
        IngestError::NoFilesProvided
        | IngestError::TooManyFiles(..)
        | IngestError::InvalidFileType(_)
        | IngestError::FileTooLarge { .. } => warn!("Upload rejected: {}", error),
        IngestError::OptimizationFailed(reason) => {
            warn!("Image optimization failed: {}", reason);
        }
        IngestError::AlbumWriteRejected => {
            warn!("Album write rejected: not found or owner mismatch");
        }
        IngestError::BadRequest(reason) => warn!("Bad upload request: {}", reason),
        IngestError::Store(e) => error!("Store error during ingestion: {}", e),
        IngestError::Internal(e) => error!("Internal error during ingestion: {:?}", e),
    }
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, error_message) = match &self {
            IngestError::NoFilesProvided
            | IngestError::TooManyFiles(..)
            | IngestError::InvalidFileType(_)
            | IngestError::FileTooLarge { .. }
            | IngestError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            IngestError::AlbumWriteRejected => (StatusCode::NOT_FOUND, self.to_string()),
            IngestError::OptimizationFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            // Store and driver detail stays in the logs, not the response.
            IngestError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "A database error occurred.".to_string(),
            ),
            IngestError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected internal error occurred.".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
