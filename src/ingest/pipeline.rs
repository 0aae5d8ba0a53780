use crate::ingest::error::IngestError;
use crate::ingest::metadata::extract_metadata;
use crate::ingest::optimize::optimize;
use crate::models::Photo;
use crate::settings::IngestSettings;
use crate::store::AlbumStore;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use color_eyre::eyre::eyre;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// One uploaded file as delivered by the transport layer.
#[derive(Debug, Clone)]
pub struct RawFile {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Size and quality provenance returned per photo. The full metadata blob is
/// never echoed back, to keep response payloads small.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoReceipt {
    pub id: String,
    pub original_size: u64,
    pub optimized_size: u64,
    pub quality: u8,
}

#[derive(Debug, Serialize)]
pub struct IngestReceipt {
    pub uploaded: usize,
    pub details: Vec<PhotoReceipt>,
}

/// The photo ingestion pipeline: validation, adaptive re-encoding, metadata
/// extraction, and batched conditional persistence into the owning album.
///
/// The store client is injected at construction time; the pipeline holds no
/// process-global state.
pub struct IngestPipeline {
    store: Arc<dyn AlbumStore>,
    settings: IngestSettings,
}

impl IngestPipeline {
    #[must_use]
    pub fn new(store: Arc<dyn AlbumStore>, settings: IngestSettings) -> Self {
        Self { store, settings }
    }

    /// Ingests a set of uploaded files into the album owned by `owner_id`.
    ///
    /// Files are processed concurrently on the blocking pool; results are
    /// collected in input order and appended to the album in fixed-size
    /// batches, each batch awaited before the next is attempted. A rejected
    /// batch fails the request with `AlbumWriteRejected`; batches already
    /// appended stay persisted (no cross-batch rollback).
    pub async fn ingest(
        &self,
        album_id: &str,
        owner_id: &str,
        description: Option<String>,
        files: Vec<RawFile>,
    ) -> Result<IngestReceipt, IngestError> {
        if files.is_empty() {
            return Err(IngestError::NoFilesProvided);
        }

        // Explicit ownership check ahead of any store mutation, so the
        // guarantee does not rest on the append filter alone.
        self.store
            .find_album(album_id, owner_id)
            .await?
            .ok_or(IngestError::AlbumWriteRejected)?;

        let mut handles = Vec::with_capacity(files.len());
        for file in files {
            let settings = self.settings.clone();
            let description = description.clone();
            handles.push(tokio::task::spawn_blocking(move || {
                process_file(&file, &settings, description)
            }));
        }

        let mut photos = Vec::with_capacity(handles.len());
        for handle in handles {
            let photo = handle
                .await
                .map_err(|e| IngestError::Internal(eyre!(e)))??;
            photos.push(photo);
        }

        let batch_size = self.settings.batch_size.max(1);
        for batch in photos.chunks(batch_size) {
            let modified = self.store.append_photos(album_id, owner_id, batch).await?;
            if modified == 0 {
                return Err(IngestError::AlbumWriteRejected);
            }
            debug!(album_id, batch_len = batch.len(), "Appended photo batch");
        }

        info!(album_id, uploaded = photos.len(), "Ingestion complete");
        Ok(IngestReceipt {
            uploaded: photos.len(),
            details: photos
                .iter()
                .map(|p| PhotoReceipt {
                    id: p.id.clone(),
                    original_size: p.original_size,
                    optimized_size: p.optimized_size,
                    quality: p.quality,
                })
                .collect(),
        })
    }
}

/// Validates and processes one file into a persistable photo record.
fn process_file(
    file: &RawFile,
    settings: &IngestSettings,
    description: Option<String>,
) -> Result<Photo, IngestError> {
    if !file.mime_type.starts_with("image/") {
        return Err(IngestError::InvalidFileType(file.mime_type.clone()));
    }
    // Hard ceiling, checked before any decode attempt.
    if file.bytes.len() as u64 > settings.max_raw_bytes {
        return Err(IngestError::FileTooLarge {
            size: file.bytes.len() as u64,
            limit: settings.max_raw_bytes,
        });
    }

    let optimized = optimize(&file.bytes, &settings.policy)?;
    let metadata = extract_metadata(&optimized.bytes, description);

    // Identifier assigned here, independent of the storage layer's
    // primary-key scheme, so it stays stable for deletion lookups.
    Ok(Photo {
        id: Uuid::new_v4().to_string(),
        url: format!(
            "data:image/jpeg;base64,{}",
            STANDARD.encode(&optimized.bytes)
        ),
        metadata,
        optimized: true,
        quality: optimized.quality,
        original_size: file.bytes.len() as u64,
        optimized_size: optimized.bytes.len() as u64,
    })
}
