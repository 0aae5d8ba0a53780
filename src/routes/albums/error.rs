use crate::store::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum AlbumError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed to update album")]
    WriteFailed,

    #[error("store error")]
    Store(#[from] StoreError),

    #[error("internal error")]
    Internal(#[from] eyre::Report),
}

fn log_error(error: &AlbumError) {
    match error {
        AlbumError::NotFound(what) => warn!("Album -> Not found: {}", what),
        AlbumError::WriteFailed => warn!("Album -> Write reported zero modified documents"),
        AlbumError::Store(e) => error!("Store error: {}", e),
        AlbumError::Internal(e) => error!("Internal error: {:?}", e),
    }
}

impl IntoResponse for AlbumError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, error_message) = match &self {
            AlbumError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AlbumError::WriteFailed => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AlbumError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "A database error occurred.".to_string(),
            ),
            AlbumError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected internal error occurred.".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
