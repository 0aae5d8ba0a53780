use crate::ingest::{IngestReceipt, PhotoReceipt};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub uploaded: usize,
    pub details: Vec<PhotoReceipt>,
}

impl From<IngestReceipt> for UploadResponse {
    fn from(receipt: IngestReceipt) -> Self {
        Self {
            success: true,
            uploaded: receipt.uploaded,
            details: receipt.details,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
